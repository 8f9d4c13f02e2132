//! 平台相关的动态库命名
//!
//! 动态库按 `{version}-{library}-{platform}-{arch}.{ext}` 命名，
//! 平台和架构名称沿用 pact-reference 的发布命名。

use std::path::{Path, PathBuf};

use crate::error::{FfiError, Result};

/// 操作系统名称到 pact-reference 平台名称
fn platform_name(os: &str) -> Option<&'static str> {
    match os {
        "linux" => Some("linux"),
        "macos" => Some("osx"),
        "windows" => Some("windows"),
        _ => None,
    }
}

/// CPU 架构名称到 pact-reference 架构名称
fn arch_name(arch: &str) -> Option<&'static str> {
    match arch {
        "x86_64" => Some("x86_64"),
        _ => None,
    }
}

/// 平台/架构组合对应的动态库扩展名
fn extension(prefix: &str) -> Option<&'static str> {
    match prefix {
        "osx-x86_64" => Some("dylib"),
        "linux-x86_64" => Some("so"),
        "windows-x86_64" => Some("dll"),
        _ => None,
    }
}

/// 计算指定平台的动态库文件名
pub fn lib_name_for(library: &str, version: &str, os: &str, arch: &str) -> Result<String> {
    let unsupported = || FfiError::UnsupportedPlatform {
        os: os.to_string(),
        arch: arch.to_string(),
    };

    let platform = platform_name(os).ok_or_else(unsupported)?;
    let arch = arch_name(arch).ok_or_else(unsupported)?;

    let prefix = format!("{}-{}", platform, arch);
    let ext = extension(&prefix).ok_or_else(unsupported)?;

    Ok(format!("{}-{}-{}.{}", version, library, prefix, ext))
}

/// 计算当前平台的动态库文件名
pub fn lib_name(library: &str, version: &str) -> Result<String> {
    lib_name_for(library, version, std::env::consts::OS, std::env::consts::ARCH)
}

/// 解析动态库完整路径
///
/// 相对目录以当前工作目录为基准。
pub fn resolve_library_path(dir: &Path, library: &str, version: &str) -> Result<PathBuf> {
    let file_name = lib_name(library, version)?;
    let dir = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        std::env::current_dir()?.join(dir)
    };
    Ok(dir.join(file_name))
}
