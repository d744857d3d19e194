//! 进度与警告上报通道
//!
//! 批量转换过程中的轻量旁路上报：逐记录更新进度标签与百分比位置，
//! 每条失败记录上报一条带 OID 的警告。核心转换组件自身不做任何
//! 日志或上报，职责全部落在本通道与调用方。

// ============================================================================
// 上报接口
// ============================================================================

/// 进度与警告接收端
pub trait ProgressSink {
    /// 更新进度标签（如 `roads:3/120`）
    fn set_label(&mut self, label: &str);

    /// 更新进度位置（0-100）
    fn set_position(&mut self, percent: u8);

    /// 上报一条警告（每条失败记录恰好一条，消息含 OID）
    fn add_warning(&mut self, message: &str);
}

// ============================================================================
// 内置实现
// ============================================================================

/// 丢弃所有上报（嵌入式调用或测试用）
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn set_label(&mut self, _label: &str) {}
    fn set_position(&mut self, _percent: u8) {}
    fn add_warning(&mut self, _message: &str) {}
}

/// 通过 tracing 输出的上报端
///
/// 标签与位置为 debug 级（逐记录刷新，info 级会刷屏），警告为 warn 级。
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn set_label(&mut self, label: &str) {
        tracing::debug!("{label}");
    }

    fn set_position(&mut self, percent: u8) {
        tracing::debug!("进度: {percent}%");
    }

    fn add_warning(&mut self, message: &str) {
        tracing::warn!("{message}");
    }
}

// ============================================================================
// 测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_progress_accepts_everything() {
        let mut p = NullProgress;
        p.set_label("fc:1/3");
        p.set_position(33);
        p.add_warning("OID{2}: something");
    }
}
