//! 选项字段的动态视图
//!
//! 参数映射表按字段名逐个查询选项值，这里提供字段枚举和统一的值类型。

use crate::options::{ConsumerVersionSelector, Tags, VerifierOptions};

/// `VerifierOptions` 的字段名
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionField {
    Provider,
    ProviderBaseUrl,
    LogLevel,
    PactUrls,
    PactBrokerUrl,
    PactBrokerUsername,
    PactBrokerPassword,
    PactBrokerToken,
    ConsumerVersionTags,
    ProviderVersionTags,
    ProviderStatesSetupUrl,
    ProviderVersion,
    IncludeWipPactsSince,
    ConsumerVersionSelectors,
    PublishVerificationResult,
    EnablePending,
    CustomProviderHeaders,
    Timeout,
    Format,
    Out,
    LogDir,
    Verbose,
    Monkeypatch,
    ConsumerVersionTag,
    ProviderVersionTag,
    Tags,
}

impl OptionField {
    /// 所有字段（声明顺序）
    pub const ALL: [OptionField; 26] = [
        OptionField::Provider,
        OptionField::ProviderBaseUrl,
        OptionField::LogLevel,
        OptionField::PactUrls,
        OptionField::PactBrokerUrl,
        OptionField::PactBrokerUsername,
        OptionField::PactBrokerPassword,
        OptionField::PactBrokerToken,
        OptionField::ConsumerVersionTags,
        OptionField::ProviderVersionTags,
        OptionField::ProviderStatesSetupUrl,
        OptionField::ProviderVersion,
        OptionField::IncludeWipPactsSince,
        OptionField::ConsumerVersionSelectors,
        OptionField::PublishVerificationResult,
        OptionField::EnablePending,
        OptionField::CustomProviderHeaders,
        OptionField::Timeout,
        OptionField::Format,
        OptionField::Out,
        OptionField::LogDir,
        OptionField::Verbose,
        OptionField::Monkeypatch,
        OptionField::ConsumerVersionTag,
        OptionField::ProviderVersionTag,
        OptionField::Tags,
    ];

    /// 配置文件中使用的字段名
    pub fn key(&self) -> &'static str {
        match self {
            OptionField::Provider => "provider",
            OptionField::ProviderBaseUrl => "providerBaseUrl",
            OptionField::LogLevel => "logLevel",
            OptionField::PactUrls => "pactUrls",
            OptionField::PactBrokerUrl => "pactBrokerUrl",
            OptionField::PactBrokerUsername => "pactBrokerUsername",
            OptionField::PactBrokerPassword => "pactBrokerPassword",
            OptionField::PactBrokerToken => "pactBrokerToken",
            OptionField::ConsumerVersionTags => "consumerVersionTags",
            OptionField::ProviderVersionTags => "providerVersionTags",
            OptionField::ProviderStatesSetupUrl => "providerStatesSetupUrl",
            OptionField::ProviderVersion => "providerVersion",
            OptionField::IncludeWipPactsSince => "includeWipPactsSince",
            OptionField::ConsumerVersionSelectors => "consumerVersionSelectors",
            OptionField::PublishVerificationResult => "publishVerificationResult",
            OptionField::EnablePending => "enablePending",
            OptionField::CustomProviderHeaders => "customProviderHeaders",
            OptionField::Timeout => "timeout",
            OptionField::Format => "format",
            OptionField::Out => "out",
            OptionField::LogDir => "logDir",
            OptionField::Verbose => "verbose",
            OptionField::Monkeypatch => "monkeypatch",
            OptionField::ConsumerVersionTag => "consumerVersionTag",
            OptionField::ProviderVersionTag => "providerVersionTag",
            OptionField::Tags => "tags",
        }
    }
}

impl std::fmt::Display for OptionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// 单个字段的取值
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Str(String),
    Bool(bool),
    Number(u64),
    List(Vec<String>),
    Selectors(Vec<ConsumerVersionSelector>),
}

impl OptionValue {
    /// 真值判断：空字符串、false、0 和空列表视为假
    pub fn is_truthy(&self) -> bool {
        match self {
            OptionValue::Str(s) => !s.is_empty(),
            OptionValue::Bool(b) => *b,
            OptionValue::Number(n) => *n != 0,
            OptionValue::List(items) => !items.is_empty(),
            OptionValue::Selectors(items) => !items.is_empty(),
        }
    }

    /// 转为单个参数值（列表以逗号连接）
    pub fn to_arg(&self) -> String {
        match self {
            OptionValue::Str(s) => s.clone(),
            OptionValue::Bool(b) => b.to_string(),
            OptionValue::Number(n) => n.to_string(),
            OptionValue::List(items) => items.join(","),
            // 选择器没有命令行形式，映射器会在此之前拒绝
            OptionValue::Selectors(items) => serde_json::to_string(items).unwrap_or_default(),
        }
    }

    /// 转为列表（标量视为单元素列表）
    pub fn to_list(&self) -> Vec<String> {
        match self {
            OptionValue::List(items) => items.clone(),
            other => vec![other.to_arg()],
        }
    }
}

impl VerifierOptions {
    /// 读取字段值，未设置时返回 `None`
    pub fn value(&self, field: OptionField) -> Option<OptionValue> {
        let str_value = |v: &Option<String>| v.clone().map(OptionValue::Str);
        // 标量标签保持字符串形态，空字符串按假值处理
        let tags_value = |v: &Option<Tags>| {
            v.as_ref().map(|t| match t {
                Tags::One(tag) => OptionValue::Str(tag.clone()),
                Tags::Many(tags) => OptionValue::List(tags.clone()),
            })
        };

        match field {
            OptionField::Provider => str_value(&self.provider),
            OptionField::ProviderBaseUrl => Some(OptionValue::Str(self.provider_base_url.clone())),
            OptionField::LogLevel => self.log_level.map(|l| OptionValue::Str(l.as_str().to_string())),
            OptionField::PactUrls => self.pact_urls.clone().map(OptionValue::List),
            OptionField::PactBrokerUrl => str_value(&self.pact_broker_url),
            OptionField::PactBrokerUsername => str_value(&self.pact_broker_username),
            OptionField::PactBrokerPassword => str_value(&self.pact_broker_password),
            OptionField::PactBrokerToken => str_value(&self.pact_broker_token),
            OptionField::ConsumerVersionTags => tags_value(&self.consumer_version_tags),
            OptionField::ProviderVersionTags => tags_value(&self.provider_version_tags),
            OptionField::ProviderStatesSetupUrl => str_value(&self.provider_states_setup_url),
            OptionField::ProviderVersion => str_value(&self.provider_version),
            OptionField::IncludeWipPactsSince => str_value(&self.include_wip_pacts_since),
            OptionField::ConsumerVersionSelectors => {
                self.consumer_version_selectors.clone().map(OptionValue::Selectors)
            }
            OptionField::PublishVerificationResult => {
                self.publish_verification_result.map(OptionValue::Bool)
            }
            OptionField::EnablePending => self.enable_pending.map(OptionValue::Bool),
            OptionField::CustomProviderHeaders => {
                self.custom_provider_headers.clone().map(OptionValue::List)
            }
            OptionField::Timeout => self.timeout.map(OptionValue::Number),
            OptionField::Format => self.format.map(|f| {
                // serde 名称即原始取值
                let name = serde_json::to_value(f)
                    .ok()
                    .and_then(|v| v.as_str().map(String::from))
                    .unwrap_or_default();
                OptionValue::Str(name)
            }),
            OptionField::Out => str_value(&self.out),
            OptionField::LogDir => str_value(&self.log_dir),
            OptionField::Verbose => self.verbose.map(OptionValue::Bool),
            OptionField::Monkeypatch => str_value(&self.monkeypatch),
            OptionField::ConsumerVersionTag => tags_value(&self.consumer_version_tag),
            OptionField::ProviderVersionTag => tags_value(&self.provider_version_tag),
            OptionField::Tags => self.tags.clone().map(OptionValue::List),
        }
    }
}
