//! Pact verifier
//!
//! 将 `VerifierOptions` 映射为命令行风格的参数序列，通过 FFI 调用 verifier 动态库，
//! 并把返回码转换为结果：
//!
//! ```text
//! VerifierOptions -> ArgumentMapper -> Vec<String> -> Session::invoke -> 返回码 -> Verifier
//! ```
//!
//! # 示例
//!
//! ```ignore
//! use pact_verifier::{Verifier, VerifierConfig};
//! use pact_common::VerifierOptions;
//!
//! let options = VerifierOptions {
//!     provider: Some("svc".into()),
//!     pact_urls: Some(vec!["./pacts/a.json".into()]),
//!     ..VerifierOptions::new("http://localhost:8080")
//! };
//! let message = Verifier::native(options, &VerifierConfig::default())?.verify().await?;
//! ```
//!
//! 同一进程同时只支持一个进行中的验证。

pub mod arguments;
pub mod config;
pub mod error;
pub mod mapper;
pub mod protocol;
pub mod uri;
pub mod verifier;

pub use arguments::{default_mapping, default_table, ArgMapping, ValueKind};
pub use config::VerifierConfig;
pub use error::{MappingError, Result, VerifierError};
pub use mapper::{map_options, ArgumentMapper};
pub use protocol::{serialize_request, InitState, Session, VerificationOutcome};
pub use uri::{classify, UriType};
pub use verifier::{native_session, verify, Verifier};

pub use pact_common::{ConsumerVersionSelector, LogLevel, Tags, VerifierOptions};
