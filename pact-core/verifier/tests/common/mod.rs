//! 测试用的模拟动态库

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use pact_ffi::{FfiError, VerifierLibrary};
use pact_verifier::Session;

/// 模拟的 verify 行为
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum Behavior {
    /// 立即返回结果码
    Code(i32),
    /// 延迟后返回结果码
    Delayed(Duration, i32),
    /// 永不完成
    Pending,
    /// 调用机制失败
    Transport,
}

pub struct MockLibrary {
    behavior: Behavior,
    inits: AtomicUsize,
    completed: AtomicUsize,
    requests: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl MockLibrary {
    pub fn new(behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            inits: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn init_count(&self) -> usize {
        self.inits.load(Ordering::SeqCst)
    }

    /// 延迟调用真正跑完的次数
    pub fn completed_count(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl VerifierLibrary for MockLibrary {
    fn init(&self, _log_env_var: &str) -> pact_ffi::Result<()> {
        self.inits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn version(&self) -> pact_ffi::Result<String> {
        Ok("0.0.1-mock".to_string())
    }

    fn verify_blocking(&self, request: &str) -> pact_ffi::Result<i32> {
        self.requests.lock().unwrap().push(request.to_string());
        match &self.behavior {
            Behavior::Code(code) | Behavior::Delayed(_, code) => Ok(*code),
            Behavior::Pending => Err(FfiError::Transport("不支持同步挂起".to_string())),
            Behavior::Transport => Err(FfiError::Transport("mock transport failure".to_string())),
        }
    }

    async fn verify(&self, request: String) -> pact_ffi::Result<i32> {
        self.requests.lock().unwrap().push(request);
        match &self.behavior {
            Behavior::Code(code) => Ok(*code),
            Behavior::Delayed(delay, code) => {
                tokio::time::sleep(*delay).await;
                self.completed.fetch_add(1, Ordering::SeqCst);
                Ok(*code)
            }
            Behavior::Pending => std::future::pending().await,
            Behavior::Transport => Err(FfiError::Transport("mock transport failure".to_string())),
        }
    }

    fn name(&self) -> String {
        "libpact_verifier_ffi-mock".to_string()
    }
}

#[allow(dead_code)]
pub fn session(library: &Arc<MockLibrary>) -> Arc<Session<MockLibrary>> {
    Arc::new(Session::new(Arc::clone(library), "LOG_LEVEL"))
}

/// 测试用的 Pact 文件
#[allow(dead_code)]
pub fn pact_file() -> String {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/pacts/a.json").to_string()
}

#[allow(dead_code)]
pub fn pact_dir() -> String {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/pacts").to_string()
}
