//! 内存要素类驱动
//!
//! 把一组要素记录装进内存向量，实现要素类与更新游标抽象。
//! 供测试与嵌入式调用使用，也是 JSON 文件驱动的承载结构。

use crate::error::{DatasetError, DatasetResult};
use crate::store::{FeatureClass, FeatureRecord, UpdateCursor};

// ============================================================================
// 内存要素类
// ============================================================================

/// 内存要素类
#[derive(Debug, Clone)]
pub struct MemoryFeatureClass {
    name: String,
    spatial_ref: String,
    records: Vec<FeatureRecord>,
}

impl MemoryFeatureClass {
    /// 创建内存要素类
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        spatial_ref: impl Into<String>,
        records: Vec<FeatureRecord>,
    ) -> Self {
        Self {
            name: name.into(),
            spatial_ref: spatial_ref.into(),
            records,
        }
    }

    /// 当前全部记录
    #[must_use]
    pub fn records(&self) -> &[FeatureRecord] {
        &self.records
    }

    /// 取出全部记录（消费自身）
    #[must_use]
    pub fn into_records(self) -> Vec<FeatureRecord> {
        self.records
    }
}

impl FeatureClass for MemoryFeatureClass {
    fn name(&self) -> &str {
        &self.name
    }

    fn feature_count(&self) -> usize {
        self.records.len()
    }

    fn spatial_ref(&self) -> &str {
        &self.spatial_ref
    }

    fn update_cursor(&mut self) -> DatasetResult<Box<dyn UpdateCursor + '_>> {
        Ok(Box::new(MemoryCursor {
            records: &mut self.records,
            next_index: 0,
        }))
    }
}

// ============================================================================
// 内存更新游标
// ============================================================================

/// 内存要素类的更新游标
struct MemoryCursor<'a> {
    records: &'a mut Vec<FeatureRecord>,
    /// 下一条待读取记录的下标；0 表示尚未读取
    next_index: usize,
}

impl UpdateCursor for MemoryCursor<'_> {
    fn next(&mut self) -> Option<DatasetResult<FeatureRecord>> {
        let record = self.records.get(self.next_index)?.clone();
        self.next_index += 1;
        Some(Ok(record))
    }

    fn update(&mut self, record: FeatureRecord) -> DatasetResult<()> {
        if self.next_index == 0 {
            return Err(DatasetError::CursorNotPositioned);
        }
        self.records[self.next_index - 1] = record;
        Ok(())
    }
}

// ============================================================================
// 测试
// ============================================================================
