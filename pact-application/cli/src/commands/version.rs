//! 显示动态库版本

use anyhow::{Context, Result};
use pact_ffi::{NativeLibrary, VerifierLibrary};

use super::common::load_config;

pub fn handle(config: Option<&str>, library: Option<&str>) -> Result<()> {
    let config = load_config(config, library)?;
    let path = config.resolve_library_path()?;

    let library = NativeLibrary::load(&path)
        .with_context(|| format!("加载动态库失败: {}", path.display()))?;

    println!("{} {}", library.name(), library.version()?);
    Ok(())
}
