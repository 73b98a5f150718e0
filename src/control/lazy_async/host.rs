//! tokio adapters for `LazyAsync`.
//!
//! Start functions built here spawn onto the caller's tokio runtime when
//! there is one, and onto a lazily built shared runtime otherwise.

use std::future::Future;
use std::sync::LazyLock;
use std::time::Duration;

use futures::channel::oneshot;
use tokio::runtime::{Builder, Handle, Runtime};

use super::LazyAsync;
use crate::error::{Error, Result};

/// Shared runtime used when a value is started outside of any tokio runtime.
static HOST_RUNTIME: LazyLock<Option<Runtime>> = LazyLock::new(|| {
    match Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => Some(runtime),
        Err(error) => {
            tracing::error!(%error, "failed to build the shared tokio runtime");
            None
        }
    }
});

fn handle() -> Option<Handle> {
    Handle::try_current()
        .ok()
        .or_else(|| HOST_RUNTIME.as_ref().map(|runtime| runtime.handle().clone()))
}

fn spawn_detached<Fut>(future: Fut)
where
    Fut: Future<Output = ()> + Send + 'static,
{
    match handle() {
        Some(handle) => drop(handle.spawn(future)),
        None => tracing::error!("no tokio runtime available; the value will never resolve"),
    }
}

impl<T: Send + 'static> LazyAsync<T> {
    /// Wraps a future factory; each start builds and spawns a new future.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liftkit::control::LazyAsync;
    ///
    /// # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
    /// let lazy = LazyAsync::from_future(|| async { 40 + 2 });
    /// assert_eq!(lazy.run().await, Ok(42));
    /// # });
    /// ```
    pub fn from_future<F, Fut>(factory: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        Self::new(move |resolve| {
            let future = factory();
            spawn_detached(async move { resolve(future.await) });
        })
    }

    /// Resolves with `value` once `delay` has elapsed after each start.
    pub fn delayed(value: T, delay: Duration) -> Self
    where
        T: Clone + Sync,
    {
        Self::from_future(move || {
            let value = value.clone();
            async move {
                tokio::time::sleep(delay).await;
                value
            }
        })
    }

    /// Starts the computation and waits for its value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Abandoned`] if the start function drops its resolver
    /// without calling it.
    pub async fn run(&self) -> Result<T> {
        let (sender, receiver) = oneshot::channel();
        self.fork(move |value| {
            // The receiver is gone only if the caller stopped waiting.
            let _ = sender.send(value);
        });
        receiver.await.map_err(|_| Error::Abandoned)
    }
}
