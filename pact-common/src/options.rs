//! 验证器配置选项
//!
//! 字段名与 pact-js 的 `VerifierOptions` 保持一致（camelCase），
//! 现有的 JSON/YAML 配置文件可以直接反序列化。

use serde::{Deserialize, Serialize};

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl LogLevel {
    /// 传递给验证器的小写名称
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Fatal => "fatal",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 输出格式（已无效果，仅为兼容保留）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    #[serde(rename = "json")]
    Json,
    #[serde(rename = "xml")]
    Xml,
    #[serde(rename = "progress")]
    Progress,
    #[serde(rename = "RspecJunitFormatter")]
    RspecJunitFormatter,
}

/// 标签：单个字符串或字符串列表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tags {
    One(String),
    Many(Vec<String>),
}

impl Tags {
    /// 以逗号连接所有标签（不去空白，不去重）
    pub fn joined(&self) -> String {
        match self {
            Tags::One(tag) => tag.clone(),
            Tags::Many(tags) => tags.join(","),
        }
    }

    /// 展开为列表
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Tags::One(tag) => vec![tag.clone()],
            Tags::Many(tags) => tags.clone(),
        }
    }
}

impl From<&str> for Tags {
    fn from(tag: &str) -> Self {
        Tags::One(tag.to_string())
    }
}

impl From<Vec<&str>> for Tags {
    fn from(tags: Vec<&str>) -> Self {
        Tags::Many(tags.into_iter().map(String::from).collect())
    }
}

/// 消费者版本选择器
///
/// 描述需要验证哪些消费者版本/标签。参见 https://docs.pact.io/selectors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumerVersionSelector {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pacticipant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all: Option<bool>,
}

/// 验证器选项
///
/// 除 `provider_base_url` 外所有字段都是可选的。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifierOptions {
    /// Provider 名称
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    /// 被测 Provider 的基础 URL
    pub provider_base_url: String,

    /// 验证器日志级别
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,

    /// Pact 文件来源（URL、目录或文件）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pact_urls: Option<Vec<String>>,

    // Pact Broker 连接
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pact_broker_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pact_broker_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pact_broker_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pact_broker_token: Option<String>,

    // 版本选择
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumer_version_tags: Option<Tags>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_version_tags: Option<Tags>,

    /// Provider 状态切换回调 URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_states_setup_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_wip_pacts_since: Option<String>,

    /// 暂不支持
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumer_version_selectors: Option<Vec<ConsumerVersionSelector>>,

    // 行为开关
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_verification_result: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_pending: Option<bool>,

    /// 暂不支持
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_provider_headers: Option<Vec<String>>,

    /// 等待验证完成的超时（毫秒）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,

    // 以下字段仅为兼容保留，没有任何效果
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monkeypatch: Option<String>,

    // 已废弃的别名
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumer_version_tag: Option<Tags>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_version_tag: Option<Tags>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl VerifierOptions {
    /// 使用 Provider 基础 URL 创建选项
    pub fn new(provider_base_url: impl Into<String>) -> Self {
        Self {
            provider_base_url: provider_base_url.into(),
            ..Default::default()
        }
    }

    /// 从 JSON 字符串解析
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}
