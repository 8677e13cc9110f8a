//! Detached background tasks for fire-and-forget work.
//!
//! In the browser everything runs on the UI thread, so tasks go through
//! `wasm_bindgen_futures::spawn_local`. Natively they are handed to the
//! tokio runtime and the join handle is returned so callers can wait for
//! settlement if they care to.

use crate::utils::error::Result;
#[cfg(not(target_arch = "wasm32"))]
use crate::utils::error::UiError;
use std::future::Future;

/// `Send + Sync` natively, no bound on wasm32 where nothing crosses threads.
#[cfg(not(target_arch = "wasm32"))]
pub trait MaybeSendSync: Send + Sync {}
#[cfg(not(target_arch = "wasm32"))]
impl<T: Send + Sync + ?Sized> MaybeSendSync for T {}

#[cfg(target_arch = "wasm32")]
pub trait MaybeSendSync {}
#[cfg(target_arch = "wasm32")]
impl<T: ?Sized> MaybeSendSync for T {}

#[cfg(not(target_arch = "wasm32"))]
pub type TaskHandle = tokio::task::JoinHandle<()>;

#[cfg(target_arch = "wasm32")]
pub type TaskHandle = ();

/// Fails with `UiError::NoRuntime` when called outside a tokio runtime.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_detached<F>(task: F) -> Result<TaskHandle>
where
    F: Future<Output = ()> + Send + 'static,
{
    let handle = tokio::runtime::Handle::try_current().map_err(|_| UiError::NoRuntime)?;
    Ok(handle.spawn(task))
}

#[cfg(target_arch = "wasm32")]
pub fn spawn_detached<F>(task: F) -> Result<TaskHandle>
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(task);
    Ok(())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_without_runtime_is_an_error() {
        assert!(matches!(spawn_detached(async {}), Err(UiError::NoRuntime)));
    }

    #[tokio::test]
    async fn test_spawn_inside_runtime_runs_task() {
        let (tx, rx) = tokio::sync::oneshot::channel();
        let handle = spawn_detached(async move {
            let _ = tx.send(5);
        })
        .unwrap();
        handle.await.unwrap();
        assert_eq!(rx.await.unwrap(), 5);
    }
}
