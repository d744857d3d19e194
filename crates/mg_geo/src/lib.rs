//! MarsGeo 坐标转换核心模块
//!
//! 提供 WGS84、GCJ02（火星坐标）、BD09、Web Mercator 四种参考系之间的
//! 逐点转换，以及矢量几何（点/多点/线/面）的结构保持遍历。
//!
//! # 模块
//!
//! - `datum`: 坐标系枚举与 WGS84/GCJ02/BD09 转换（经验偏移算法）
//! - `web_mercator`: Web Mercator 投影正反算
//! - `geometry`: 几何类型 (Point2D, Geometry) 与逐点遍历器
//!
//! # 示例
//!
//! ```
//! use mg_geo::prelude::*;
//!
//! // 北京 WGS84 -> GCJ02
//! let (lng, lat) = ChinaDatum::STANDARD.wgs84_to_gcj02(116.404, 39.915);
//! assert!((lng - 116.41024).abs() < 1e-4);
//!
//! // 几何遍历：逐点应用转换，结构不变
//! let geom = Geometry::Point(Point2D::from_lonlat(116.404, 39.915));
//! let moved = geom.map_coords(datum::wgs84_to_gcj02);
//! assert_eq!(moved.point_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod datum;
pub mod geometry;
pub mod web_mercator;

/// 预导入模块
pub mod prelude {
    pub use crate::datum::{self, ChinaDatum, CoordSys, PointTransform};
    pub use crate::geometry::{Geometry, Point2D};
    pub use crate::web_mercator::{wgs84_to_web_mercator, web_mercator_to_wgs84};
}

// 重导出常用类型
pub use datum::{ChinaDatum, CoordSys, PointTransform};
pub use geometry::{Geometry, Point2D};
