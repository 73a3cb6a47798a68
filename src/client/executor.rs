//! Blocking execution of transport futures.

use std::future::Future;
use std::sync::{Arc, OnceLock};

use tokio::runtime::{Builder as TokioRuntimeBuilder, Handle, Runtime};

use crate::error::{DslError, Result};

static SHARED: OnceLock<BlockingExecutor> = OnceLock::new();

/// Owns the runtime and shuts it down without blocking, so the last handle
/// may be dropped from any context.
struct RuntimeGuard(Option<Runtime>);

impl Drop for RuntimeGuard {
    fn drop(&mut self) {
        if let Some(runtime) = self.0.take() {
            runtime.shutdown_background();
        }
    }
}

/// Runs execution futures to completion on a private tokio runtime.
///
/// Used by the `*_blocking` methods of `Request` and `Document`. Calls made
/// from inside another tokio runtime are rejected with `DslError::Internal`.
#[derive(Clone)]
pub struct BlockingExecutor {
    runtime: Arc<RuntimeGuard>,
}

impl BlockingExecutor {
    pub fn new() -> Result<Self> {
        let runtime = TokioRuntimeBuilder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .map_err(|err| DslError::internal(format!("failed to initialize runtime: {err}")))?;
        Ok(Self {
            runtime: Arc::new(RuntimeGuard(Some(runtime))),
        })
    }

    /// The process-wide executor, created on first use.
    pub fn shared() -> Result<Self> {
        if let Some(executor) = SHARED.get() {
            return Ok(executor.clone());
        }
        ensure_blocking_allowed()?;
        let executor = Self::new()?;
        Ok(SHARED.get_or_init(|| executor).clone())
    }

    /// Block the current thread until `future` resolves.
    pub fn run<F, T>(&self, future: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        ensure_blocking_allowed()?;
        match &self.runtime.0 {
            Some(runtime) => runtime.block_on(future),
            None => Err(DslError::internal("runtime has been shut down")),
        }
    }
}

/// Blocking on a future from a runtime worker would stall or panic it.
fn ensure_blocking_allowed() -> Result<()> {
    if Handle::try_current().is_ok() {
        return Err(DslError::internal("blocking call inside an async runtime"));
    }
    Ok(())
}

impl std::fmt::Debug for BlockingExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockingExecutor").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_returns_future_output() {
        let executor = BlockingExecutor::new().unwrap();
        let value = executor.run(async { Ok::<_, DslError>(42) }).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_run_propagates_errors() {
        let executor = BlockingExecutor::new().unwrap();
        let err = executor
            .run(async { Err::<(), _>(DslError::NoClient) })
            .unwrap_err();
        assert!(matches!(err, DslError::NoClient));
    }

    #[test]
    fn test_shared_executor_is_reused() {
        let first = BlockingExecutor::shared().unwrap();
        let second = BlockingExecutor::shared().unwrap();
        assert!(Arc::ptr_eq(&first.runtime, &second.runtime));
        assert_eq!(second.run(async { Ok::<_, DslError>(7) }).unwrap(), 7);
    }

    #[test]
    fn test_run_inside_runtime_is_rejected() {
        let executor = BlockingExecutor::new().unwrap();
        let outer = TokioRuntimeBuilder::new_current_thread().build().unwrap();
        let result = outer.block_on(async { executor.run(async { Ok::<_, DslError>(1) }) });
        assert!(matches!(result, Err(DslError::Internal(_))));
    }

    #[tokio::test]
    async fn test_dropping_inside_runtime_does_not_panic() {
        let executor = BlockingExecutor::new().unwrap();
        drop(executor);
    }
}
