//! JSON 文件要素类驱动
//!
//! 把要素类整体序列化为一个 JSON 文件（名称、空间参考、记录数组），
//! 通过 serde_json 读写。读入后记录驻留内存，`save` 时整体写回。

use crate::error::{DatasetError, DatasetResult};
use crate::store::{FeatureClass, FeatureRecord, UpdateCursor};
use crate::MemoryFeatureClass;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

// ============================================================================
// 文件格式
// ============================================================================

/// JSON 数据集文件结构
#[derive(Debug, Serialize, Deserialize)]
struct JsonDataset {
    /// 要素类名称
    name: String,
    /// 空间参考（原样透传）
    spatial_ref: String,
    /// 要素记录
    features: Vec<FeatureRecord>,
}

// ============================================================================
// JSON 要素类
// ============================================================================

/// JSON 文件要素类
#[derive(Debug)]
pub struct JsonFeatureClass {
    path: PathBuf,
    inner: MemoryFeatureClass,
}

impl JsonFeatureClass {
    /// 从 JSON 文件打开要素类
    ///
    /// # Errors
    /// 文件不存在或 JSON 结构不合法时返回错误
    pub fn open(path: impl AsRef<Path>) -> DatasetResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| DatasetError::Json {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let dataset: JsonDataset =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| DatasetError::Json {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            inner: MemoryFeatureClass::new(dataset.name, dataset.spatial_ref, dataset.features),
        })
    }

    /// 保存到打开时的路径
    ///
    /// # Errors
    /// 文件写入或序列化失败时返回错误
    pub fn save(&self) -> DatasetResult<()> {
        self.save_to(&self.path)
    }

    /// 保存到指定路径
    ///
    /// # Errors
    /// 文件写入或序列化失败时返回错误
    pub fn save_to(&self, path: impl AsRef<Path>) -> DatasetResult<()> {
        let path = path.as_ref();
        let dataset = JsonDataset {
            name: self.inner.name().to_string(),
            spatial_ref: self.inner.spatial_ref().to_string(),
            features: self.inner.records().to_vec(),
        };
        let file = File::create(path).map_err(|e| DatasetError::Json {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        serde_json::to_writer_pretty(BufWriter::new(file), &dataset).map_err(|e| {
            DatasetError::Json {
                path: path.display().to_string(),
                message: e.to_string(),
            }
        })
    }

    /// 源文件路径
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 当前全部记录
    #[must_use]
    pub fn records(&self) -> &[FeatureRecord] {
        self.inner.records()
    }
}

impl FeatureClass for JsonFeatureClass {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn feature_count(&self) -> usize {
        self.inner.feature_count()
    }

    fn spatial_ref(&self) -> &str {
        self.inner.spatial_ref()
    }

    fn update_cursor(&mut self) -> DatasetResult<Box<dyn UpdateCursor + '_>> {
        self.inner.update_cursor()
    }
}
