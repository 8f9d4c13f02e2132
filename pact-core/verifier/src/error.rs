//! 验证器错误定义

use std::time::Duration;

use thiserror::Error;

/// 验证器操作结果类型
pub type Result<T> = std::result::Result<T, VerifierError>;

/// 参数映射错误
///
/// 在调用动态库之前同步返回，不会产生任何副作用。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// Pact 来源既不是 URL 也不是已存在的路径
    #[error("Pact file or directory '{0}' doesn't exist")]
    SourceNotFound(String),

    /// 暂不支持的选项
    #[error("{0}")]
    UnsupportedFeature(String),
}

/// 验证器错误类型
#[derive(Error, Debug)]
pub enum VerifierError {
    /// 参数映射失败
    #[error(transparent)]
    Mapping(#[from] MappingError),

    /// 契约验证未通过
    #[error("Verification failed")]
    VerificationFailed,

    /// 动态库拒绝了参数（绑定层缺陷）
    #[error("{diagnostic}")]
    InvalidArguments { code: i32, diagnostic: String },

    /// 动态库崩溃或返回未知结果码
    #[error("{diagnostic}")]
    UnexpectedCrash { code: i32, diagnostic: String },

    /// 等待验证完成超时
    #[error("Timeout waiting for verification process to complete ({}ms)", .0.as_millis())]
    Timeout(Duration),

    /// FFI 调用机制失败
    #[error("FFI 调用失败: {0}")]
    Transport(String),

    /// 动态库加载或调用错误
    #[error("动态库错误: {0}")]
    Library(pact_ffi::FfiError),

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),
}

impl From<pact_ffi::FfiError> for VerifierError {
    fn from(err: pact_ffi::FfiError) -> Self {
        match err {
            pact_ffi::FfiError::Transport(reason) => VerifierError::Transport(reason),
            other => VerifierError::Library(other),
        }
    }
}

impl VerifierError {
    /// 是否为绑定层缺陷（需要提交 issue）
    pub fn is_binding_defect(&self) -> bool {
        matches!(
            self,
            VerifierError::InvalidArguments { .. } | VerifierError::UnexpectedCrash { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_not_found_message() {
        let err = MappingError::SourceNotFound("./missing.json".to_string());
        assert_eq!(
            err.to_string(),
            "Pact file or directory './missing.json' doesn't exist"
        );
    }

    #[test]
    fn test_transport_error_kept_distinct() {
        let err: VerifierError = pact_ffi::FfiError::Transport("task panicked".into()).into();
        assert!(matches!(err, VerifierError::Transport(_)));

        let err: VerifierError = pact_ffi::FfiError::SymbolNotFound("verify".into()).into();
        assert!(matches!(err, VerifierError::Library(_)));
    }

    #[test]
    fn test_timeout_message() {
        let err = VerifierError::Timeout(Duration::from_millis(30000));
        assert!(err.to_string().contains("30000ms"));
        assert!(!err.is_binding_defect());
    }
}
