//! 批量逐记录坐标转换
//!
//! 对一个要素类的全部记录执行：读取 -> 逐点变换 -> 写回。
//! 错误隔离在记录粒度：单条记录失败只产生一条带 OID 的警告，
//! 批次继续处理下一条，绝不中断。空间参考原样写回。

use crate::error::{DatasetError, DatasetResult};
use crate::progress::ProgressSink;
use crate::store::{FeatureClass, FeatureRecord};

// ============================================================================
// 转换统计
// ============================================================================

/// 批量转换统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertStats {
    /// 读取的记录总数
    pub total: usize,
    /// 成功转换并写回的记录数
    pub converted: usize,
    /// 失败（已上报警告）的记录数
    pub failed: usize,
}

// ============================================================================
// 批量转换循环
// ============================================================================

/// 对要素类的每条记录应用逐点变换并写回
///
/// 逐记录流程：
/// 1. 通过更新游标读取记录；
/// 2. 以结构保持遍历对几何逐点变换（哨兵原样保留）；
/// 3. 变换结果含非有限坐标的记录被拒绝（该记录保持未修改）；
/// 4. 写回，空间参考不变；
/// 5. 刷新进度标签 `名称:当前/总数` 与百分比位置。
///
/// 任何单条记录的失败都只上报一条 `OID{n}` 警告后继续。
///
/// # Errors
/// 仅在无法打开游标时返回错误；记录级失败不会传播。
pub fn convert_feature_class<F>(
    fc: &mut dyn FeatureClass,
    transform: F,
    progress: &mut dyn ProgressSink,
) -> DatasetResult<ConvertStats>
where
    F: Fn(f64, f64) -> (f64, f64),
{
    let name = fc.name().to_string();
    let total = fc.feature_count();
    let mut cursor = fc.update_cursor()?;

    let mut stats = ConvertStats::default();
    while let Some(item) = cursor.next() {
        stats.total += 1;

        let outcome = item.and_then(|record| {
            let oid = record.oid;
            let moved = record.geometry.map_coords(&transform);
            if !moved.is_finite() {
                return Err(DatasetError::NonFiniteCoordinate { oid });
            }
            cursor.update(FeatureRecord {
                oid,
                geometry: moved,
                spatial_ref: record.spatial_ref,
            })
        });

        match outcome {
            Ok(()) => stats.converted += 1,
            Err(err) => {
                stats.failed += 1;
                progress.add_warning(&err.to_string());
            }
        }

        progress.set_label(&format!("{name}:{}/{total}", stats.total));
        if total > 0 {
            let percent = u8::try_from(stats.total * 100 / total).unwrap_or(100);
            progress.set_position(percent);
        }
    }

    Ok(stats)
}

// ============================================================================
// 测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::MemoryFeatureClass;
    use crate::progress::NullProgress;
    use mg_geo::{datum, Geometry, Point2D};

    /// 记录所有上报，供断言
    #[derive(Default)]
    struct RecordingProgress {
        labels: Vec<String>,
        positions: Vec<u8>,
        warnings: Vec<String>,
    }

    impl ProgressSink for RecordingProgress {
        fn set_label(&mut self, label: &str) {
            self.labels.push(label.to_string());
        }
        fn set_position(&mut self, percent: u8) {
            self.positions.push(percent);
        }
        fn add_warning(&mut self, message: &str) {
            self.warnings.push(message.to_string());
        }
    }

    fn record(oid: i64, lng: f64, lat: f64) -> FeatureRecord {
        FeatureRecord {
            oid,
            geometry: Geometry::Point(Point2D::from_lonlat(lng, lat)),
            spatial_ref: "EPSG:4326".into(),
        }
    }

    #[test]
    fn test_convert_all_records() {
        let mut fc = MemoryFeatureClass::new(
            "cities",
            "EPSG:4326",
            vec![record(1, 116.404, 39.915), record(2, 121.473, 31.230)],
        );
        let mut progress = RecordingProgress::default();
        let stats =
            convert_feature_class(&mut fc, datum::wgs84_to_gcj02, &mut progress).expect("convert");

        assert_eq!(stats, ConvertStats { total: 2, converted: 2, failed: 0 });
        assert!(progress.warnings.is_empty());
        assert_eq!(progress.labels.last().map(String::as_str), Some("cities:2/2"));
        assert_eq!(progress.positions.last(), Some(&100));

        // 几何已变换，空间参考未动
        let Geometry::Point(p) = &fc.records()[0].geometry else {
            panic!("变体改变");
        };
        let expect = datum::wgs84_to_gcj02(116.404, 39.915);
        assert_eq!((p.x, p.y), expect);
        assert_eq!(fc.records()[0].spatial_ref, "EPSG:4326");
    }

    #[test]
    fn test_error_isolation() {
        // 3 条记录，第 2 条坐标损坏：1、3 仍须转换，
        // 恰好一条警告指向 OID 2，进度按总数 3 推进
        let mut fc = MemoryFeatureClass::new(
            "mixed",
            "EPSG:4326",
            vec![
                record(1, 116.404, 39.915),
                record(2, f64::NAN, 39.915),
                record(3, 113.264, 23.129),
            ],
        );
        let mut progress = RecordingProgress::default();
        let stats =
            convert_feature_class(&mut fc, datum::wgs84_to_gcj02, &mut progress).expect("convert");

        assert_eq!(stats, ConvertStats { total: 3, converted: 2, failed: 1 });
        assert_eq!(progress.warnings.len(), 1);
        assert!(progress.warnings[0].contains("OID{2}"), "{:?}", progress.warnings);
        assert_eq!(progress.labels.last().map(String::as_str), Some("mixed:3/3"));

        // 失败记录保持未修改
        let Geometry::Point(p) = &fc.records()[1].geometry else {
            panic!("变体改变");
        };
        assert!(p.x.is_nan());
        // 第 3 条已转换
        let Geometry::Point(p3) = &fc.records()[2].geometry else {
            panic!("变体改变");
        };
        assert_eq!((p3.x, p3.y), datum::wgs84_to_gcj02(113.264, 23.129));
    }

    #[test]
    fn test_sentinels_survive_batch() {
        let geometry = Geometry::Polyline(vec![vec![
            Some(Point2D::from_lonlat(116.0, 40.0)),
            None,
            Some(Point2D::from_lonlat(117.0, 41.0)),
        ]]);
        let mut fc = MemoryFeatureClass::new(
            "lines",
            "EPSG:4326",
            vec![FeatureRecord { oid: 7, geometry, spatial_ref: "EPSG:4326".into() }],
        );
        let stats = convert_feature_class(&mut fc, datum::wgs84_to_gcj02, &mut NullProgress)
            .expect("convert");
        assert_eq!(stats.converted, 1);

        let Geometry::Polyline(parts) = &fc.records()[0].geometry else {
            panic!("变体改变");
        };
        assert!(parts[0][1].is_none());
        assert_eq!(parts[0].len(), 3);
    }

    #[test]
    fn test_empty_class() {
        let mut fc = MemoryFeatureClass::new("empty", "EPSG:4326", vec![]);
        let stats = convert_feature_class(&mut fc, datum::wgs84_to_gcj02, &mut NullProgress)
            .expect("convert");
        assert_eq!(stats, ConvertStats::default());
    }
}
