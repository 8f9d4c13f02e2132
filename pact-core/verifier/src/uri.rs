//! Pact 来源分类
//!
//! 判断一个 Pact 来源是 URL、目录还是文件，用于选择 `--url`/`--dir`/`--file` 参数。

use std::path::{Component, Path, PathBuf};

use tracing::debug;
use url::Url;

use crate::error::MappingError;

/// Pact 来源类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UriType {
    Url,
    Directory,
    File,
}

impl UriType {
    /// 对应的验证器参数
    pub fn flag(&self) -> &'static str {
        match self {
            UriType::Url => "--url",
            UriType::Directory => "--dir",
            UriType::File => "--file",
        }
    }
}

/// 分类 Pact 来源
///
/// http/https 地址直接视为 URL，不访问文件系统或网络；其余按本地路径处理。
pub fn classify(uri: &str) -> Result<UriType, MappingError> {
    if is_http_url(uri) {
        return Ok(UriType::Url);
    }

    let path = normalize(Path::new(uri));
    match std::fs::metadata(&path) {
        Ok(meta) if meta.is_dir() => Ok(UriType::Directory),
        Ok(_) => Ok(UriType::File),
        Err(e) => {
            debug!("Pact 来源不可访问 {}: {}", uri, e);
            Err(MappingError::SourceNotFound(uri.to_string()))
        }
    }
}

fn is_http_url(uri: &str) -> bool {
    Url::parse(uri)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// 词法规范化路径（去掉 `.`，折叠 `..`）
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                );
                if can_pop {
                    normalized.pop();
                } else if !normalized.has_root() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_http_urls() {
        assert_eq!(classify("http://broker/pacts/a").unwrap(), UriType::Url);
        assert_eq!(classify("https://broker.example.com/pacts").unwrap(), UriType::Url);
        assert_eq!(classify("HTTPS://broker.example.com/pacts").unwrap(), UriType::Url);
    }

    #[test]
    fn test_other_schemes_are_paths() {
        let err = classify("ftp://broker/pacts/a").unwrap_err();
        assert_eq!(err, MappingError::SourceNotFound("ftp://broker/pacts/a".into()));
    }

    #[test]
    fn test_directory_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.json");
        fs::write(&file, "{}").unwrap();

        assert_eq!(classify(dir.path().to_str().unwrap()).unwrap(), UriType::Directory);
        assert_eq!(classify(file.to_str().unwrap()).unwrap(), UriType::File);
    }

    #[test]
    fn test_not_found_keeps_original() {
        let err = classify("./definitely/missing/../a.json").unwrap_err();
        assert_eq!(
            err,
            MappingError::SourceNotFound("./definitely/missing/../a.json".into())
        );
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("./pacts/a.json")), PathBuf::from("pacts/a.json"));
        assert_eq!(normalize(Path::new("pacts/x/../a.json")), PathBuf::from("pacts/a.json"));
        assert_eq!(normalize(Path::new("../a.json")), PathBuf::from("../a.json"));
        assert_eq!(normalize(Path::new("/a/../../b")), PathBuf::from("/b"));
        assert_eq!(normalize(Path::new(".")), PathBuf::from("."));
    }

    #[test]
    fn test_flags() {
        assert_eq!(UriType::Url.flag(), "--url");
        assert_eq!(UriType::Directory.flag(), "--dir");
        assert_eq!(UriType::File.flag(), "--file");
    }
}
