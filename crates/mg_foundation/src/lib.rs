//! MarsGeo 基础层
//!
//! 提供整个项目共享的统一错误类型。
//!
//! # 模块
//!
//! - `error`: 统一错误类型 `MgError` 和结果别名 `MgResult`
//!
//! # 示例
//!
//! ```
//! use mg_foundation::error::{MgError, MgResult};
//!
//! fn load_dataset(name: &str) -> MgResult<()> {
//!     if name.is_empty() {
//!         return Err(MgError::invalid_input("数据集名称为空"));
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;

pub use error::{MgError, MgResult};
