//! FFI 错误定义

use thiserror::Error;

/// FFI 操作结果类型
pub type Result<T> = std::result::Result<T, FfiError>;

/// FFI 错误类型
#[derive(Error, Debug)]
pub enum FfiError {
    /// 动态库加载失败
    #[error("加载动态库失败 {path}: {reason}")]
    Load { path: String, reason: String },

    /// 符号不存在
    #[error("动态库中找不到符号: {0}")]
    SymbolNotFound(String),

    /// 字符串无法跨越 FFI 边界（包含 NUL 字节或不是 UTF-8）
    #[error("无效的 FFI 字符串: {0}")]
    InvalidString(String),

    /// 调用机制本身失败（不是验证器返回的结果码）
    #[error("FFI 调用失败: {0}")]
    Transport(String),

    /// 不支持的平台
    #[error("Pact does not currently support the operating system and architecture combination '{os}/{arch}'")]
    UnsupportedPlatform { os: String, arch: String },

    /// IO 错误
    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),
}
