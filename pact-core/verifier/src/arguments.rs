//! 选项到验证器参数的映射表
//!
//! 每个选项字段对应且仅对应一种映射：
//! - `Flag`：固定参数名 + 声明式取值转换
//! - `Function`：自定义函数，产出零个或多个参数
//! - `Warning`：接受但忽略，只输出警告
//! - `Unsupported`：暂不支持，设置即报错
//!
//! `default_mapping` 对 `OptionField` 做穷尽匹配，新增字段而不补充映射会编译失败。

use pact_common::{OptionField, OptionValue};
use url::Url;

use crate::error::MappingError;
use crate::uri::classify;

/// 自定义映射函数
pub type MapFn = fn(&OptionValue) -> Result<Vec<String>, MappingError>;

/// 声明式取值转换
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// `[arg, value]`
    String,
    /// `[arg]`
    Flag,
    /// `[arg, "a,b,c"]`
    Join,
}

/// 单个字段的映射
#[derive(Clone, Copy)]
pub enum ArgMapping {
    Flag { arg: &'static str, kind: ValueKind },
    Function(MapFn),
    Warning(&'static str),
    Unsupported(&'static str),
}

impl std::fmt::Debug for ArgMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgMapping::Flag { arg, kind } => f
                .debug_struct("Flag")
                .field("arg", arg)
                .field("kind", kind)
                .finish(),
            ArgMapping::Function(_) => f.write_str("Function(..)"),
            ArgMapping::Warning(message) => f.debug_tuple("Warning").field(message).finish(),
            ArgMapping::Unsupported(message) => {
                f.debug_tuple("Unsupported").field(message).finish()
            }
        }
    }
}

const fn string(arg: &'static str) -> ArgMapping {
    ArgMapping::Flag { arg, kind: ValueKind::String }
}

const fn flag(arg: &'static str) -> ArgMapping {
    ArgMapping::Flag { arg, kind: ValueKind::Flag }
}

const fn join(arg: &'static str) -> ArgMapping {
    ArgMapping::Flag { arg, kind: ValueKind::Join }
}

/// 字段的默认映射
pub fn default_mapping(field: OptionField) -> ArgMapping {
    match field {
        OptionField::Provider => string("--provider-name"),
        OptionField::ProviderBaseUrl => ArgMapping::Function(map_provider_base_url),
        OptionField::LogLevel => ArgMapping::Function(map_log_level),
        OptionField::PactUrls => ArgMapping::Function(map_pact_urls),
        OptionField::PactBrokerUrl => string("--broker-url"),
        OptionField::PactBrokerUsername => string("--user"),
        OptionField::PactBrokerPassword => string("--password"),
        OptionField::PactBrokerToken => string("--broker-token"),
        OptionField::ConsumerVersionTags => join("--consumer-version-tags"),
        OptionField::ProviderVersionTags => join("--provider-version-tags"),
        OptionField::ProviderStatesSetupUrl => string("--state-change-url"),
        OptionField::ProviderVersion => string("--provider-version"),
        OptionField::IncludeWipPactsSince => string("--include-wip-pacts-since"),
        OptionField::ConsumerVersionSelectors => {
            ArgMapping::Unsupported("Consumer version selectors are not yet implemented")
        }
        OptionField::PublishVerificationResult => flag("--publish"),
        OptionField::EnablePending => flag("--enable-pending"),
        OptionField::CustomProviderHeaders => {
            ArgMapping::Unsupported("customProviderHeaders are not yet implemented")
        }
        OptionField::Timeout => {
            ArgMapping::Warning("Timeout currently has no effect on the rust binary")
        }
        OptionField::Format => ArgMapping::Warning(
            "All output is currently on standard out, setting 'format' has no effect",
        ),
        OptionField::Out => ArgMapping::Warning(
            "All output is currently on standard out, setting 'out' has no effect",
        ),
        OptionField::LogDir => ArgMapping::Warning(
            "Setting logDir is deprecated as all logs are now on standard out.",
        ),
        OptionField::Verbose => ArgMapping::Warning(
            "Verbose mode is deprecated, please use logLevel: 'debug' instead",
        ),
        OptionField::Monkeypatch => ArgMapping::Warning(
            "The undocumented feature monkeypatch is no more, please file an issue if you were using it and need it",
        ),
        OptionField::ConsumerVersionTag => ArgMapping::Warning(
            "consumerVersionTag is deprecated and has no effect, please use consumerVersionTags instead",
        ),
        OptionField::ProviderVersionTag => ArgMapping::Warning(
            "providerVersionTag is deprecated and has no effect, please use providerVersionTags instead",
        ),
        OptionField::Tags => ArgMapping::Warning(
            "tags is deprecated and has no effect, please use consumerVersionTags instead",
        ),
    }
}

/// 默认映射表（字段声明顺序）
pub fn default_table() -> Vec<(OptionField, ArgMapping)> {
    OptionField::ALL
        .iter()
        .map(|field| (*field, default_mapping(*field)))
        .collect()
}

/// 拆分 Provider 基础 URL 为 `--port`/`--hostname`
///
/// 只有端口和主机名都存在时才输出。URL 中写明的默认端口（`:80`/`:443`）
/// 也算作存在。
fn map_provider_base_url(value: &OptionValue) -> Result<Vec<String>, MappingError> {
    let input = value.to_arg();
    let parsed = match Url::parse(&input) {
        Ok(url) => url,
        Err(_) => return Ok(Vec::new()),
    };

    // `Url::port()` 会吞掉与协议默认值相同的端口
    let port = if has_explicit_port(&input) {
        parsed.port_or_known_default()
    } else {
        parsed.port()
    };

    match (port, parsed.host_str()) {
        (Some(port), Some(host)) if !host.is_empty() => Ok(vec![
            "--port".to_string(),
            port.to_string(),
            "--hostname".to_string(),
            host.to_string(),
        ]),
        _ => Ok(Vec::new()),
    }
}

/// authority 部分是否写明了端口
fn has_explicit_port(input: &str) -> bool {
    let rest = match input.split_once("://") {
        Some((_, rest)) => rest,
        None => return false,
    };
    let authority = rest.split(['/', '?', '#']).next().unwrap_or("");
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
    // IPv6 地址本身含冒号，只看 `]` 之后
    let after_host = match host_port.rfind(']') {
        Some(index) => &host_port[index + 1..],
        None => host_port,
    };

    after_host
        .split_once(':')
        .map_or(false, |(_, port)| !port.is_empty())
}

fn map_log_level(value: &OptionValue) -> Result<Vec<String>, MappingError> {
    Ok(vec!["--loglevel".to_string(), value.to_arg().to_lowercase()])
}

/// 每个 Pact 来源按类型输出 `--url`/`--dir`/`--file`
fn map_pact_urls(value: &OptionValue) -> Result<Vec<String>, MappingError> {
    let mut args = Vec::new();

    for uri in value.to_list() {
        let uri_type = classify(&uri)?;
        args.push(uri_type.flag().to_string());
        args.push(uri);
    }

    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_every_field_in_order() {
        let table = default_table();
        let fields: Vec<_> = table.iter().map(|(f, _)| *f).collect();
        assert_eq!(fields, OptionField::ALL.to_vec());
    }

    #[test]
    fn test_provider_base_url() {
        let args = map_provider_base_url(&OptionValue::Str("http://localhost:8080".into())).unwrap();
        assert_eq!(args, vec!["--port", "8080", "--hostname", "localhost"]);
    }

    #[test]
    fn test_provider_base_url_without_port() {
        let args = map_provider_base_url(&OptionValue::Str("http://localhost".into())).unwrap();
        assert!(args.is_empty());

        let args = map_provider_base_url(&OptionValue::Str("not a url".into())).unwrap();
        assert!(args.is_empty());

        let args = map_provider_base_url(&OptionValue::Str("https://[::1]/api".into())).unwrap();
        assert!(args.is_empty());
    }

    #[test]
    fn test_provider_base_url_with_default_port() {
        let args = map_provider_base_url(&OptionValue::Str("http://localhost:80".into())).unwrap();
        assert_eq!(args, vec!["--port", "80", "--hostname", "localhost"]);

        let args =
            map_provider_base_url(&OptionValue::Str("https://user:pw@host:443/path".into()))
                .unwrap();
        assert_eq!(args, vec!["--port", "443", "--hostname", "host"]);

        let args = map_provider_base_url(&OptionValue::Str("http://[::1]:80".into())).unwrap();
        assert_eq!(args, vec!["--port", "80", "--hostname", "[::1]"]);
    }

    #[test]
    fn test_log_level_lowercased() {
        let args = map_log_level(&OptionValue::Str("DEBUG".into())).unwrap();
        assert_eq!(args, vec!["--loglevel", "debug"]);
    }

    #[test]
    fn test_pact_urls_mixed() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.json");
        std::fs::write(&file, "{}").unwrap();

        let dir_str = dir.path().to_string_lossy().into_owned();
        let file_str = file.to_string_lossy().into_owned();

        let args = map_pact_urls(&OptionValue::List(vec![
            "https://broker/pacts/a".into(),
            dir_str.clone(),
            file_str.clone(),
        ]))
        .unwrap();

        assert_eq!(
            args,
            vec![
                "--url".to_string(),
                "https://broker/pacts/a".to_string(),
                "--dir".to_string(),
                dir_str,
                "--file".to_string(),
                file_str,
            ]
        );
    }

    #[test]
    fn test_pact_urls_missing_source() {
        let err = map_pact_urls(&OptionValue::List(vec!["./missing.json".into()])).unwrap_err();
        assert_eq!(err, MappingError::SourceNotFound("./missing.json".into()));
    }

    #[test]
    fn test_deprecated_fields_warn() {
        for field in [
            OptionField::Verbose,
            OptionField::LogDir,
            OptionField::Monkeypatch,
            OptionField::Format,
            OptionField::Out,
        ] {
            assert!(matches!(default_mapping(field), ArgMapping::Warning(_)));
        }
    }
}
