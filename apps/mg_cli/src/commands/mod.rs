//! 子命令模块

pub mod convert;
pub mod info;
