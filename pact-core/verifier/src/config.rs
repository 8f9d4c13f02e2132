//! 验证器配置

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Result, VerifierError};

/// 验证器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifierConfig {
    /// 动态库所在目录（相对当前工作目录）
    #[serde(default = "default_library_dir")]
    pub library_dir: PathBuf,

    /// 动态库名称
    #[serde(default = "default_library_name")]
    pub library_name: String,

    /// 动态库版本
    #[serde(default = "default_library_version")]
    pub library_version: String,

    /// 直接指定动态库路径（优先于目录/名称/版本）
    #[serde(default)]
    pub library_path: Option<PathBuf>,

    /// 传给 `init` 的日志环境变量名
    #[serde(default = "default_log_env_var")]
    pub log_env_var: String,

    /// 默认验证超时（毫秒）
    #[serde(default = "default_timeout_ms")]
    pub default_timeout_ms: u64,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            library_dir: default_library_dir(),
            library_name: default_library_name(),
            library_version: default_library_version(),
            library_path: None,
            log_env_var: default_log_env_var(),
            default_timeout_ms: default_timeout_ms(),
        }
    }
}

impl VerifierConfig {
    /// 从 TOML 文件加载配置
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| VerifierError::Config(format!("读取配置文件失败 {:?}: {}", path, e)))?;

        Self::from_toml_str(&content)
            .map_err(|e| VerifierError::Config(format!("解析配置文件失败 {:?}: {}", path, e)))
    }

    /// 从 TOML 字符串解析配置
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// 设置动态库路径
    pub fn library_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.library_path = Some(path.into());
        self
    }

    /// 设置日志环境变量名
    pub fn log_env_var(mut self, name: impl Into<String>) -> Self {
        self.log_env_var = name.into();
        self
    }

    /// 设置默认超时
    pub fn default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout_ms = timeout.as_millis() as u64;
        self
    }

    /// 默认超时
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.default_timeout_ms)
    }

    /// 解析动态库完整路径
    pub fn resolve_library_path(&self) -> Result<PathBuf> {
        match &self.library_path {
            Some(path) => Ok(expand_path(path)),
            None => Ok(pact_ffi::resolve_library_path(
                &expand_path(&self.library_dir),
                &self.library_name,
                &self.library_version,
            )?),
        }
    }
}

fn default_library_dir() -> PathBuf {
    PathBuf::from("ffi")
}

fn default_library_name() -> String {
    "libpact_verifier_ffi".to_string()
}

fn default_library_version() -> String {
    "v0.0.1".to_string()
}

fn default_log_env_var() -> String {
    "LOG_LEVEL".to_string()
}

fn default_timeout_ms() -> u64 {
    30000
}

/// 展开路径（处理 ~）
fn expand_path(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    if path_str.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            let expanded = path_str.replacen('~', &home.to_string_lossy(), 1);
            return PathBuf::from(expanded);
        }
    }
    path.to_path_buf()
}
