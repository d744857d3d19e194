//! 要素记录、要素类与更新游标抽象
//!
//! 外部地理数据存储被抽象为：可枚举的要素记录序列（每条记录带稳定
//! 标识、几何值与空间参考），加上逐记录写回能力。转换核心只消费
//! 这三个字段；空间参考原样透传，本层不解释也不修改投影元数据。

use crate::error::DatasetResult;
use mg_geo::Geometry;
use serde::{Deserialize, Serialize};

// ============================================================================
// 要素记录
// ============================================================================

/// 单条要素记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    /// 稳定记录标识（用于警告上报）
    pub oid: i64,
    /// 几何值
    pub geometry: Geometry,
    /// 所属要素类声明的空间参考（原样透传）
    pub spatial_ref: String,
}

// ============================================================================
// 要素类与更新游标
// ============================================================================

/// 要素类：一个可枚举、可写回的要素集合
pub trait FeatureClass {
    /// 要素类名称（用于进度标签）
    fn name(&self) -> &str;

    /// 要素总数
    fn feature_count(&self) -> usize;

    /// 集合声明的空间参考
    fn spatial_ref(&self) -> &str;

    /// 打开更新游标
    ///
    /// # Errors
    /// 底层存储打不开游标时返回错误
    fn update_cursor(&mut self) -> DatasetResult<Box<dyn UpdateCursor + '_>>;
}

/// 更新游标：顺序读取记录并支持写回当前行
///
/// 语义与常见 GIS 更新游标一致：`next` 推进到下一条记录，
/// `update` 覆盖最近一次 `next` 返回的那条记录的几何。
pub trait UpdateCursor {
    /// 读取下一条记录；序列结束返回 `None`
    ///
    /// 单条记录读取失败时返回 `Some(Err(..))`，调用方可跳过该记录
    /// 继续读取。
    fn next(&mut self) -> Option<DatasetResult<FeatureRecord>>;

    /// 写回当前行
    ///
    /// # Errors
    /// 尚未读取任何记录、或底层存储写入失败时返回错误
    fn update(&mut self, record: FeatureRecord) -> DatasetResult<()>;
}
