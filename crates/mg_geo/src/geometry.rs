//! 几何类型定义与逐点遍历
//!
//! 提供矢量几何的统一表示（点/多点/线/面）以及结构保持的逐点
//! 变换遍历器。参考实现对四种要素类型各写了一套近乎重复的循环，
//! 这里收敛为带标签联合体上的单一泛型遍历。

use serde::{Deserialize, Serialize};

// ============================================================================
// Point2D - 2D 坐标对
// ============================================================================

/// 2D 坐标对（经度/x 在前，纬度/y 在后）
///
/// 坐标对本身不携带坐标系标签，由调用方跟踪已应用的转换。
///
/// # 示例
///
/// ```
/// use mg_geo::geometry::Point2D;
///
/// let beijing = Point2D::from_lonlat(116.404, 39.915);
/// assert_eq!(beijing.lon(), 116.404);
/// assert_eq!(beijing.lat(), 39.915);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    /// X坐标（或经度）
    pub x: f64,
    /// Y坐标（或纬度）
    pub y: f64,
}

impl Point2D {
    /// 创建新的2D点
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// 从经纬度创建（lon, lat）
    #[inline]
    #[must_use]
    pub const fn from_lonlat(lon: f64, lat: f64) -> Self {
        Self { x: lon, y: lat }
    }

    /// 获取经度（假设 x 为经度）
    #[inline]
    #[must_use]
    pub const fn lon(&self) -> f64 {
        self.x
    }

    /// 获取纬度（假设 y 为纬度）
    #[inline]
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.y
    }

    /// 判断是否为有限数（非NaN、非Inf）
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// 应用逐点变换，返回新点
    #[inline]
    #[must_use]
    pub fn map<F: Fn(f64, f64) -> (f64, f64)>(&self, f: F) -> Self {
        let (x, y) = f(self.x, self.y);
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2D> for (f64, f64) {
    fn from(p: Point2D) -> Self {
        (p.x, p.y)
    }
}

impl From<[f64; 2]> for Point2D {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2D> for [f64; 2] {
    fn from(p: Point2D) -> Self {
        [p.x, p.y]
    }
}

// ============================================================================
// Geometry - 带标签几何联合体
// ============================================================================

/// 一个部件：有序坐标序列，`None` 为缺失点/环断开哨兵
pub type GeometryPart = Vec<Option<Point2D>>;

/// 矢量几何的带标签联合体
///
/// - `Point`: 恰好一个坐标对（多顶点点要素按质心收窄，见 [`Geometry::centroid`]）
/// - `Multipoint`: 扁平有序序列，`None` 哨兵原样保留
/// - `Polyline` / `Polygon`: 部件（路径/环）的有序序列，环的绕向与
///   闭合状态精确保留——遍历绝不增删或重排点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    /// 单点
    Point(Point2D),
    /// 多点
    Multipoint(GeometryPart),
    /// 折线（多部件）
    Polyline(Vec<GeometryPart>),
    /// 多边形（环的序列）
    Polygon(Vec<GeometryPart>),
}

impl Geometry {
    /// 结构类型名称
    #[must_use]
    pub fn shape_type(&self) -> &'static str {
        match self {
            Self::Point(_) => "Point",
            Self::Multipoint(_) => "Multipoint",
            Self::Polyline(_) => "Polyline",
            Self::Polygon(_) => "Polygon",
        }
    }

    /// 对每个坐标对应用逐点变换，返回同变体的新几何
    ///
    /// 结构保持不变：部件数、各部件点数、哨兵位置与输入逐一对应；
    /// 哨兵 `None` 原样传递，绝不对其调用变换。
    #[must_use]
    pub fn map_coords<F: Fn(f64, f64) -> (f64, f64)>(&self, f: F) -> Self {
        let map_part = |part: &GeometryPart| -> GeometryPart {
            part.iter().map(|p| p.as_ref().map(|pt| pt.map(&f))).collect()
        };
        match self {
            Self::Point(p) => Self::Point(p.map(&f)),
            Self::Multipoint(pts) => Self::Multipoint(map_part(pts)),
            Self::Polyline(parts) => Self::Polyline(parts.iter().map(map_part).collect()),
            Self::Polygon(parts) => Self::Polygon(parts.iter().map(map_part).collect()),
        }
    }

    /// 部件数（Point/Multipoint 视为单部件）
    #[must_use]
    pub fn part_count(&self) -> usize {
        match self {
            Self::Point(_) | Self::Multipoint(_) => 1,
            Self::Polyline(parts) | Self::Polygon(parts) => parts.len(),
        }
    }

    /// 各部件的坐标槽位数（含哨兵）
    #[must_use]
    pub fn part_sizes(&self) -> Vec<usize> {
        match self {
            Self::Point(_) => vec![1],
            Self::Multipoint(pts) => vec![pts.len()],
            Self::Polyline(parts) | Self::Polygon(parts) => {
                parts.iter().map(Vec::len).collect()
            }
        }
    }

    /// 坐标槽位总数（含哨兵）
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.part_sizes().iter().sum()
    }

    /// 所有实有坐标是否均为有限值
    ///
    /// 哨兵 `None` 不参与判断。
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Point(p) => p.is_finite(),
            Self::Multipoint(pts) => pts.iter().flatten().all(Point2D::is_finite),
            Self::Polyline(parts) | Self::Polygon(parts) => {
                parts.iter().flatten().flatten().all(Point2D::is_finite)
            }
        }
    }

    /// 质心（实有坐标的算术平均）
    ///
    /// 点要素直接返回自身。多顶点来源构造的"点"要素按约定收窄为
    /// 质心，这是参考行为的文档化保留，下游可能依赖，不得静默修正。
    /// 无实有坐标时返回 `None`。
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn centroid(&self) -> Option<Point2D> {
        if let Self::Point(p) = self {
            return Some(*p);
        }
        let mut sx = 0.0;
        let mut sy = 0.0;
        let mut n = 0usize;
        let mut acc = |p: &Point2D| {
            sx += p.x;
            sy += p.y;
            n += 1;
        };
        match self {
            Self::Point(_) => unreachable!(),
            Self::Multipoint(pts) => pts.iter().flatten().for_each(&mut acc),
            Self::Polyline(parts) | Self::Polygon(parts) => {
                parts.iter().flatten().flatten().for_each(&mut acc);
            }
        }
        if n == 0 {
            None
        } else {
            Some(Point2D::new(sx / n as f64, sy / n as f64))
        }
    }
}

// ============================================================================
// 测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn shift(lng: f64, lat: f64) -> (f64, f64) {
        (lng + 1.0, lat - 0.5)
    }

    fn sample_polygon() -> Geometry {
        Geometry::Polygon(vec![
            vec![
                Some(Point2D::new(0.0, 0.0)),
                Some(Point2D::new(1.0, 0.0)),
                Some(Point2D::new(1.0, 1.0)),
                None, // 环断开哨兵
                Some(Point2D::new(0.0, 0.0)),
            ],
            vec![
                Some(Point2D::new(0.2, 0.2)),
                Some(Point2D::new(0.4, 0.2)),
                Some(Point2D::new(0.2, 0.4)),
            ],
        ])
    }

    #[test]
    fn test_point_map() {
        let g = Geometry::Point(Point2D::from_lonlat(116.0, 40.0));
        let out = g.map_coords(shift);
        assert_eq!(out, Geometry::Point(Point2D::new(117.0, 39.5)));
    }

    #[test]
    fn test_structure_preserved() {
        let g = sample_polygon();
        let out = g.map_coords(shift);

        assert_eq!(out.shape_type(), "Polygon");
        assert_eq!(out.part_count(), g.part_count());
        assert_eq!(out.part_sizes(), g.part_sizes());
        assert_eq!(out.point_count(), 8);
    }

    #[test]
    fn test_sentinel_passthrough() {
        // 哨兵位置必须与输入逐一对应，且不被变换触碰
        let g = sample_polygon();
        let calls = std::cell::Cell::new(0usize);
        let out = g.map_coords(|lng, lat| {
            calls.set(calls.get() + 1);
            shift(lng, lat)
        });
        // 8 个槽位中 1 个是哨兵，变换只应被调用 7 次
        assert_eq!(calls.get(), 7);

        let Geometry::Polygon(parts) = &out else {
            panic!("变体改变");
        };
        assert!(parts[0][3].is_none());
        assert_eq!(parts[0][4], Some(Point2D::new(1.0, -0.5)));
    }

    #[test]
    fn test_multipoint_order_and_sentinels() {
        let g = Geometry::Multipoint(vec![
            Some(Point2D::new(1.0, 1.0)),
            None,
            Some(Point2D::new(2.0, 2.0)),
        ]);
        let out = g.map_coords(shift);
        let Geometry::Multipoint(pts) = &out else {
            panic!("变体改变");
        };
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[0], Some(Point2D::new(2.0, 0.5)));
        assert!(pts[1].is_none());
        assert_eq!(pts[2], Some(Point2D::new(3.0, 1.5)));
    }

    #[test]
    fn test_polyline_parts_independent() {
        let g = Geometry::Polyline(vec![
            vec![Some(Point2D::new(0.0, 0.0)), Some(Point2D::new(1.0, 1.0))],
            vec![Some(Point2D::new(5.0, 5.0))],
        ]);
        let out = g.map_coords(shift);
        assert_eq!(out.part_sizes(), vec![2, 1]);
    }

    #[test]
    fn test_is_finite() {
        assert!(sample_polygon().is_finite());
        let g = Geometry::Multipoint(vec![Some(Point2D::new(f64::NAN, 0.0)), None]);
        assert!(!g.is_finite());
        // 纯哨兵序列视为有限
        let g = Geometry::Multipoint(vec![None, None]);
        assert!(g.is_finite());
    }

    #[test]
    fn test_centroid() {
        let p = Geometry::Point(Point2D::new(3.0, 4.0));
        assert_eq!(p.centroid(), Some(Point2D::new(3.0, 4.0)));

        let mp = Geometry::Multipoint(vec![
            Some(Point2D::new(0.0, 0.0)),
            None,
            Some(Point2D::new(2.0, 4.0)),
        ]);
        assert_eq!(mp.centroid(), Some(Point2D::new(1.0, 2.0)));

        let empty = Geometry::Multipoint(vec![None]);
        assert_eq!(empty.centroid(), None);
    }

    #[test]
    fn test_serde_roundtrip() {
        let g = sample_polygon();
        let json = serde_json::to_string(&g).expect("serialize");
        let back: Geometry = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, g);
    }
}
