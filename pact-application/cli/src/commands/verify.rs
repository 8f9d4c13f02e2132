//! Verify 命令处理

use anyhow::{Context, Result};
use colored::Colorize;
use pact_verifier::Verifier;

use super::common::{load_config, load_options};

pub async fn handle(
    file: &str,
    config: Option<&str>,
    library: Option<&str>,
    timeout: Option<u64>,
) -> Result<()> {
    let mut options = load_options(file)?;
    if timeout.is_some() {
        options.timeout = timeout;
    }

    let config = load_config(config, library)?;

    println!("{} 开始验证: {}", "⚙".cyan(), options.provider_base_url.yellow());
    if let Some(provider) = &options.provider {
        println!("  Provider: {}", provider.yellow());
    }

    let verifier = Verifier::native(options, &config).context("加载 verifier 动态库失败")?;

    match verifier.verify().await {
        Ok(message) => {
            println!("{} 验证通过 ({})", "✓".green().bold(), message);
            Ok(())
        }
        Err(e) => {
            println!("{} 验证失败", "✗".red().bold());
            Err(e.into())
        }
    }
}
