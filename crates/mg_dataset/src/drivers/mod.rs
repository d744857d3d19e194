//! 存储驱动模块
//!
//! 提供要素类抽象的具体实现。

pub mod json;
pub mod memory;

// 重导出
pub use json::JsonFeatureClass;
pub use memory::MemoryFeatureClass;
