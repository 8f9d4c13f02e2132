//! Pact verifier 通用类型定义
//!
//! 此 crate 包含 CLI 与验证器核心之间共享的选项类型。

mod field;
mod options;

pub use field::{OptionField, OptionValue};
pub use options::{ConsumerVersionSelector, LogLevel, OutputFormat, Tags, VerifierOptions};
