//! 验证器入口
//!
//! 应用默认超时，映射参数，并在超时包裹下执行一次验证。

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use pact_common::VerifierOptions;
use pact_ffi::{NativeLibrary, VerifierLibrary};
use tokio::time::timeout;
use tracing::{error, info};

use crate::config::VerifierConfig;
use crate::error::{Result, VerifierError};
use crate::mapper::ArgumentMapper;
use crate::protocol::Session;

static NATIVE_SESSION: OnceLock<Arc<Session<NativeLibrary>>> = OnceLock::new();

/// 获取进程级的原生动态库会话
///
/// 第一次调用时加载动态库，之后的调用忽略 `config` 直接复用同一会话。
pub fn native_session(config: &VerifierConfig) -> Result<Arc<Session<NativeLibrary>>> {
    if let Some(session) = NATIVE_SESSION.get() {
        return Ok(Arc::clone(session));
    }

    let path = config.resolve_library_path()?;
    let library = NativeLibrary::load(&path)?;
    let session = Arc::new(Session::new(Arc::new(library), config.log_env_var.clone()));

    // 并发加载时以先写入者为准
    Ok(Arc::clone(NATIVE_SESSION.get_or_init(|| session)))
}

/// Pact 验证器
pub struct Verifier<L: VerifierLibrary> {
    options: VerifierOptions,
    session: Arc<Session<L>>,
    mapper: ArgumentMapper,
    default_timeout: Duration,
}

impl Verifier<NativeLibrary> {
    /// 使用进程级原生会话创建验证器
    pub fn native(options: VerifierOptions, config: &VerifierConfig) -> Result<Self> {
        let session = native_session(config)?;
        Ok(Self::new(options, session).default_timeout(config.timeout()))
    }
}

impl<L: VerifierLibrary> Verifier<L> {
    /// 创建验证器
    pub fn new(options: VerifierOptions, session: Arc<Session<L>>) -> Self {
        Self {
            options,
            session,
            mapper: ArgumentMapper::default(),
            default_timeout: Duration::from_millis(30000),
        }
    }

    /// 设置未指定 `timeout` 时使用的超时
    pub fn default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    /// 使用自定义参数映射器
    pub fn mapper(mut self, mapper: ArgumentMapper) -> Self {
        self.mapper = mapper;
        self
    }

    pub fn options(&self) -> &VerifierOptions {
        &self.options
    }

    /// 实际使用的超时（`timeout` 未设置或为 0 时使用默认值）
    pub fn timeout(&self) -> Duration {
        match self.options.timeout {
            Some(ms) if ms > 0 => Duration::from_millis(ms),
            _ => self.default_timeout,
        }
    }

    /// 映射后的参数序列
    pub fn arguments(&self) -> Result<Vec<String>> {
        Ok(self.mapper.map(&self.options)?)
    }

    /// 执行验证
    ///
    /// 参数映射错误在调用动态库之前返回。超时只停止等待，
    /// 动态库中的调用不会被中止。
    pub async fn verify(&self) -> Result<String> {
        info!("Verifying Pact Files");

        let args = self.arguments()?;
        let wait = self.timeout();

        let outcome = match timeout(wait, self.session.invoke(&args)).await {
            Ok(outcome) => outcome?,
            Err(_) => {
                error!("等待验证完成超时: {:?}", wait);
                return Err(VerifierError::Timeout(wait));
            }
        };

        match outcome.into_result(&self.session.library().name()) {
            Ok(message) => {
                info!("Pact Verification succeeded.");
                Ok(message)
            }
            Err(e) => {
                error!("{}", e);
                Err(e)
            }
        }
    }
}

/// 使用默认配置和原生动态库执行验证
pub async fn verify(options: VerifierOptions) -> Result<String> {
    Verifier::native(options, &VerifierConfig::default())?
        .verify()
        .await
}
