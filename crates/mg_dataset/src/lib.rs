//! MarsGeo 数据集模块
//!
//! 提供地理要素数据的读写抽象与批量坐标转换。
//!
//! # 模块
//!
//! - [`store`]: 要素记录、要素类与更新游标抽象
//! - [`drivers`]: 存储驱动（内存、JSON 文件）
//! - [`progress`]: 进度与警告上报通道
//! - [`convert`]: 批量逐记录坐标转换循环
//! - [`error`]: 数据集层错误类型
//!
//! # 使用示例
//!
//! ```
//! use mg_dataset::convert::convert_feature_class;
//! use mg_dataset::drivers::MemoryFeatureClass;
//! use mg_dataset::progress::NullProgress;
//! use mg_dataset::store::FeatureRecord;
//! use mg_geo::{datum, Geometry, Point2D};
//!
//! let mut fc = MemoryFeatureClass::new(
//!     "roads",
//!     "EPSG:4326",
//!     vec![FeatureRecord {
//!         oid: 1,
//!         geometry: Geometry::Point(Point2D::from_lonlat(116.404, 39.915)),
//!         spatial_ref: "EPSG:4326".into(),
//!     }],
//! );
//! let stats =
//!     convert_feature_class(&mut fc, datum::wgs84_to_gcj02, &mut NullProgress).unwrap();
//! assert_eq!(stats.converted, 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod convert;
pub mod drivers;
pub mod error;
pub mod progress;
pub mod store;

pub use convert::{convert_feature_class, ConvertStats};
pub use drivers::{JsonFeatureClass, MemoryFeatureClass};
pub use error::{DatasetError, DatasetResult};
pub use progress::{LogProgress, NullProgress, ProgressSink};
pub use store::{FeatureClass, FeatureRecord, UpdateCursor};

/// 类型别名简化
pub type Result<T> = DatasetResult<T>;
