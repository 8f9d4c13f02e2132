//! Pact FFI 绑定层
//!
//! 加载 pact verifier 动态库，提供以下能力：
//! - 按平台/架构计算动态库文件名
//! - 解析 `init`、`version`、`free_string`、`verify` 四个 C 接口
//! - 同步和异步两种 `verify` 调用方式
//!
//! # 示例
//!
//! ```ignore
//! use pact_ffi::{NativeLibrary, VerifierLibrary, resolve_library_path};
//!
//! let path = resolve_library_path("ffi".as_ref(), "libpact_verifier_ffi", "v0.0.1")?;
//! let library = NativeLibrary::load(path)?;
//! library.init("LOG_LEVEL")?;
//! let code = library.verify("--provider-name\nsvc".to_string()).await?;
//! ```

mod error;
mod native;
mod platform;
mod traits;

pub use error::{FfiError, Result};
pub use native::NativeLibrary;
pub use platform::{lib_name, lib_name_for, resolve_library_path};
pub use traits::VerifierLibrary;
