//! 基于 libloading 的动态库实现

use std::ffi::{c_char, c_int, CStr, CString};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use libloading::{Library, Symbol};
use tracing::{debug, info};

use crate::error::{FfiError, Result};
use crate::traits::VerifierLibrary;

type InitFn = unsafe extern "C" fn(*const c_char);
type VersionFn = unsafe extern "C" fn() -> *mut c_char;
type FreeStringFn = unsafe extern "C" fn(*mut c_char);
type VerifyFn = unsafe extern "C" fn(*const c_char) -> c_int;

/// 已加载的 verifier 动态库
///
/// 函数指针只在 `library` 存活期间有效，异步调用会持有一份 `Arc` 克隆。
pub struct NativeLibrary {
    path: PathBuf,
    library: Arc<Library>,
    init: InitFn,
    version: VersionFn,
    free_string: FreeStringFn,
    verify: VerifyFn,
}

impl NativeLibrary {
    /// 加载动态库并解析所需符号
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        info!("加载 verifier 动态库: {}", path.display());

        let library = unsafe { Library::new(&path) }.map_err(|e| FfiError::Load {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let init = unsafe { symbol::<InitFn>(&library, "init")? };
        let version = unsafe { symbol::<VersionFn>(&library, "version")? };
        let free_string = unsafe { symbol::<FreeStringFn>(&library, "free_string")? };
        let verify = unsafe { symbol::<VerifyFn>(&library, "verify")? };

        debug!("动态库符号解析完成: {}", path.display());

        Ok(Self {
            path,
            library: Arc::new(library),
            init,
            version,
            free_string,
            verify,
        })
    }

    /// 动态库路径
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// 解析符号并复制出函数指针
unsafe fn symbol<T: Copy>(library: &Library, name: &str) -> Result<T> {
    let mut bytes = name.as_bytes().to_vec();
    bytes.push(0);
    let symbol: Symbol<T> = library
        .get(&bytes)
        .map_err(|_| FfiError::SymbolNotFound(name.to_string()))?;
    Ok(*symbol)
}

/// 转为 C 字符串，内部 NUL 字节无法跨越边界
fn to_c_string(value: &str) -> Result<CString> {
    CString::new(value).map_err(|e| FfiError::InvalidString(e.to_string()))
}

#[async_trait]
impl VerifierLibrary for NativeLibrary {
    fn init(&self, log_env_var: &str) -> Result<()> {
        let token = to_c_string(log_env_var)?;
        unsafe { (self.init)(token.as_ptr()) };
        Ok(())
    }

    fn version(&self) -> Result<String> {
        let ptr = unsafe { (self.version)() };
        if ptr.is_null() {
            return Err(FfiError::InvalidString("version() 返回空指针".to_string()));
        }

        let version = unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned();
        unsafe { (self.free_string)(ptr) };

        Ok(version)
    }

    fn verify_blocking(&self, request: &str) -> Result<i32> {
        let request = to_c_string(request)?;
        Ok(unsafe { (self.verify)(request.as_ptr()) })
    }

    async fn verify(&self, request: String) -> Result<i32> {
        let request = to_c_string(&request)?;
        let verify = self.verify;
        let library = Arc::clone(&self.library);

        tokio::task::spawn_blocking(move || {
            let _library = library;
            unsafe { verify(request.as_ptr()) }
        })
        .await
        .map_err(|e| FfiError::Transport(e.to_string()))
    }

    fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "libpact_verifier_ffi".to_string())
    }
}
