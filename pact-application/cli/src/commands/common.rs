//! 公共工具函数模块
//!
//! 提供各命令模块共享的功能，包括：
//! - 选项文件加载 (JSON/YAML)
//! - 验证器配置加载

use anyhow::{Context, Result};
use pact_common::VerifierOptions;
use pact_verifier::VerifierConfig;
use std::fs;
use std::path::Path;

/// 加载选项文件
pub fn load_options(file: &str) -> Result<VerifierOptions> {
    let path = Path::new(file);
    let content =
        fs::read_to_string(path).with_context(|| format!("读取选项文件失败: {:?}", path))?;

    match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
            .with_context(|| format!("解析 YAML 选项文件失败: {:?}", path)),
        Some("json") => serde_json::from_str(&content)
            .with_context(|| format!("解析 JSON 选项文件失败: {:?}", path)),
        _ => anyhow::bail!("不支持的选项文件格式，仅支持 .yaml/.yml 或 .json"),
    }
}

/// 加载验证器配置，命令行指定的动态库路径优先
pub fn load_config(config: Option<&str>, library: Option<&str>) -> Result<VerifierConfig> {
    let config = match config {
        Some(path) => VerifierConfig::from_toml_file(path)?,
        None => VerifierConfig::default(),
    };

    Ok(match library {
        Some(path) => config.library_path(path),
        None => config,
    })
}
