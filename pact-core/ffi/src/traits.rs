//! Verifier 动态库抽象接口

use async_trait::async_trait;

use crate::Result;

/// Verifier 动态库 trait
///
/// 对应动态库导出的 C 接口：
///
/// ```c
/// void init(const char* log_env_var);
/// char* version();
/// void free_string(char* s);
/// int verify(const char* request);
/// ```
///
/// 实现只负责跨越 FFI 边界，不解释 `verify` 的返回码。
#[async_trait]
pub trait VerifierLibrary: Send + Sync {
    /// 初始化动态库（每个进程只能调用一次）
    fn init(&self, log_env_var: &str) -> Result<()>;

    /// 获取动态库版本
    fn version(&self) -> Result<String>;

    /// 同步执行验证，返回结果码
    fn verify_blocking(&self, request: &str) -> Result<i32>;

    /// 异步执行验证
    ///
    /// 返回的 future 只完成一次；调用机制失败时返回 `FfiError::Transport`。
    async fn verify(&self, request: String) -> Result<i32>;

    /// 动态库名称，用于日志和错误报告
    fn name(&self) -> String {
        "libpact_verifier_ffi".to_string()
    }
}
