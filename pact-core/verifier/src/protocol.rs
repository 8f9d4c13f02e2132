//! Verifier 调用协议
//!
//! 请求格式：所有参数以 `\n` 连接成一个字符串（结尾不加分隔符）。
//! 返回码：
//!
//! | 码 | 含义 | 结果 |
//! |---|---|---|
//! | 0 | 成功 | `Success` |
//! | 1 | 验证失败 | `VerificationFailed` |
//! | 2 | 传入空指针或无效字符串 | `InvalidArguments` |
//! | 3 | 动态库内部 panic | `UnexpectedCrash` |
//! | 4 | 参数结构无效 | `InvalidArguments` |
//! | 其他 | 未知 | `UnexpectedCrash` |

use std::sync::{Arc, Mutex};

use pact_ffi::VerifierLibrary;
use tracing::{debug, error, info};

use crate::error::{Result, VerifierError};

/// 参数以换行连接为请求字符串
pub fn serialize_request(args: &[String]) -> String {
    args.join("\n")
}

/// 用于日志的请求字符串，隐藏密码和令牌
pub fn redacted_request(args: &[String]) -> String {
    let mut redacted = Vec::with_capacity(args.len());
    let mut hide_next = false;

    for arg in args {
        if hide_next {
            redacted.push("******".to_string());
            hide_next = false;
            continue;
        }
        hide_next = arg == "--password" || arg == "--broker-token";
        redacted.push(arg.clone());
    }

    redacted.join("\n")
}

/// 验证结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    Success(String),
    VerificationFailed,
    InvalidArguments { code: i32 },
    UnexpectedCrash { code: i32 },
}

impl VerificationOutcome {
    /// 按返回码分类
    pub fn classify(code: i32) -> Self {
        match code {
            0 => VerificationOutcome::Success(format!("finished: {}", code)),
            1 => VerificationOutcome::VerificationFailed,
            2 | 4 => VerificationOutcome::InvalidArguments { code },
            _ => VerificationOutcome::UnexpectedCrash { code },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, VerificationOutcome::Success(_))
    }

    /// 转换为调用方结果
    pub fn into_result(self, library: &str) -> Result<String> {
        match self {
            VerificationOutcome::Success(message) => Ok(message),
            VerificationOutcome::VerificationFailed => Err(VerifierError::VerificationFailed),
            VerificationOutcome::InvalidArguments { code } => {
                Err(VerifierError::InvalidArguments {
                    code,
                    diagnostic: invalid_arguments_diagnostic(library, code),
                })
            }
            VerificationOutcome::UnexpectedCrash { code } => Err(VerifierError::UnexpectedCrash {
                code,
                diagnostic: crash_diagnostic(library, code),
            }),
        }
    }
}

fn bug_report(library: &str) -> String {
    format!(
        "This is a bug in pact-js ({library}), not a problem with your contract.\n\
         Please open an issue at https://github.com/pact-foundation/pact-js/issues including:\n\
         \x20 - the pact-js version and the verifier library '{library}'\n\
         \x20 - the full output of the failing run with logLevel set to 'trace'\n\
         Before sharing logs, please remove any secrets (broker passwords, tokens, auth headers)."
    )
}

fn invalid_arguments_diagnostic(library: &str, code: i32) -> String {
    format!(
        "The verifier was invoked with invalid arguments (result code {code}).\n{}",
        bug_report(library)
    )
}

fn crash_diagnostic(library: &str, code: i32) -> String {
    format!(
        "The verifier failed unexpectedly (result code {code}).\n{}",
        bug_report(library)
    )
}

/// 初始化状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitState {
    Uninitialized,
    Initialized,
}

/// 动态库会话
///
/// 持有动态库和一次性初始化状态。同一会话同时只应有一个验证在执行，
/// 并发调用不会被串行化，其行为未定义。
pub struct Session<L: VerifierLibrary> {
    library: Arc<L>,
    log_env_var: String,
    state: Mutex<InitState>,
}

impl<L: VerifierLibrary> Session<L> {
    /// 创建会话（不会立即初始化动态库）
    pub fn new(library: Arc<L>, log_env_var: impl Into<String>) -> Self {
        Self {
            library,
            log_env_var: log_env_var.into(),
            state: Mutex::new(InitState::Uninitialized),
        }
    }

    /// 当前初始化状态
    pub fn state(&self) -> InitState {
        match self.state.lock() {
            Ok(state) => *state,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    /// 底层动态库
    pub fn library(&self) -> &Arc<L> {
        &self.library
    }

    /// 确保动态库已初始化，且只初始化一次
    pub fn ensure_initialized(&self) -> Result<()> {
        // init 中途 panic 时状态仍是未初始化，可以安全地重试
        let mut state = self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        if *state == InitState::Initialized {
            return Ok(());
        }

        info!("初始化 verifier 动态库, 日志变量: {}", self.log_env_var);
        self.library.init(&self.log_env_var)?;
        *state = InitState::Initialized;

        Ok(())
    }

    /// 重置为未初始化（仅用于测试隔离）
    #[doc(hidden)]
    pub fn reset(&self) {
        let mut state = self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *state = InitState::Uninitialized;
    }

    /// 执行一次验证
    ///
    /// 返回码总是被分类为 `VerificationOutcome`；调用机制失败时返回
    /// `VerifierError::Transport`。
    pub async fn invoke(&self, args: &[String]) -> Result<VerificationOutcome> {
        self.ensure_initialized()?;

        let request = serialize_request(args);
        debug!("发送参数到 FFI:\n{}", redacted_request(args));

        let code = self.library.verify(request).await?;
        let outcome = VerificationOutcome::classify(code);

        match &outcome {
            VerificationOutcome::Success(_) => info!("验证成功"),
            VerificationOutcome::VerificationFailed => info!("验证失败"),
            VerificationOutcome::InvalidArguments { code } => {
                error!("verifier 拒绝了参数, 返回码: {}", code)
            }
            VerificationOutcome::UnexpectedCrash { code } => {
                error!("verifier 异常退出, 返回码: {}", code)
            }
        }

        Ok(outcome)
    }
}
