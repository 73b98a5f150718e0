//! `LazyAsync` - a deferred, callback-driven asynchronous value.
//!
//! A `LazyAsync<T>` wraps a start function `(resolve: T -> ()) -> ()`. Nothing
//! happens until [`LazyAsync::fork`] is called, and the result is not
//! memoized: every `fork` invokes the start function again, side effects
//! included.
//!
//! # Scheduling
//!
//! The type does not assume any scheduler. A start function may resolve
//! synchronously, from a timer, or from another thread; the only contract is
//! that it calls its resolver at most once. With the `async` feature,
//! [`LazyAsync::from_future`] and [`LazyAsync::delayed`] bridge to tokio.
//!
//! # Composition
//!
//! - [`LazyAsync::chain`] is sequential: the continuation's value does not
//!   start until `self` has resolved.
//! - [`LazyAsync::join_all`] is concurrent: every branch is started before any
//!   of them has resolved, and the output resolves once, with the branch values
//!   in positional order.
//!
//! # Limitations
//!
//! There is no cancellation and no failure channel. Failures are encoded in
//! the payload (for example by resolving with a `Union` or `Validation`), and a
//! start function that panics unwinds into whoever called `fork`.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::mpsc;
//! use liftkit::control::LazyAsync;
//!
//! let five = LazyAsync::resolved(5);
//! let eight = LazyAsync::resolved(8);
//! let sum = five.chain(move |a| eight.map(move |b| a + b));
//!
//! let (sender, receiver) = mpsc::channel();
//! sum.fork(move |total| sender.send(total).unwrap_or_default());
//! assert_eq!(receiver.recv(), Ok(13));
//! ```

#[cfg(feature = "async")]
mod host;

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

/// The callback a start function uses to deliver its value.
pub type Resolver<T> = Box<dyn FnOnce(T) + Send + 'static>;

type Start<T> = dyn Fn(Resolver<T>) + Send + Sync;

/// A deferred computation that eventually produces one value per start.
pub struct LazyAsync<T> {
    start: Arc<Start<T>>,
}

impl<T> Clone for LazyAsync<T> {
    fn clone(&self) -> Self {
        Self {
            start: Arc::clone(&self.start),
        }
    }
}

impl<T> fmt::Debug for LazyAsync<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("LazyAsync(<deferred>)")
    }
}

impl<T: Send + 'static> LazyAsync<T> {
    /// Wraps a start function without running it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use liftkit::control::LazyAsync;
    ///
    /// let starts = Arc::new(AtomicUsize::new(0));
    /// let counter = Arc::clone(&starts);
    /// let lazy = LazyAsync::new(move |resolve| {
    ///     counter.fetch_add(1, Ordering::SeqCst);
    ///     resolve(1);
    /// });
    /// assert_eq!(starts.load(Ordering::SeqCst), 0);
    ///
    /// lazy.fork(|_| ());
    /// lazy.fork(|_| ());
    /// assert_eq!(starts.load(Ordering::SeqCst), 2);
    /// ```
    pub fn new<S>(start: S) -> Self
    where
        S: Fn(Resolver<T>) + Send + Sync + 'static,
    {
        Self {
            start: Arc::new(start),
        }
    }

    /// Creates a value that resolves synchronously with `value` on every start.
    pub fn resolved(value: T) -> Self
    where
        T: Clone + Sync,
    {
        Self::new(move |resolve| resolve(value.clone()))
    }

    /// Starts the computation, delivering its value to `resolve`.
    #[inline]
    pub fn fork<R>(&self, resolve: R)
    where
        R: FnOnce(T) + Send + 'static,
    {
        (self.start)(Box::new(resolve));
    }

    /// Returns `true` if both values share the same start function.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.start, &other.start)
    }

    /// Transforms the resolved value.
    ///
    /// Equivalent to `chain(|x| LazyAsync::resolved(function(x)))` without
    /// requiring `U: Clone`.
    pub fn map<U, F>(&self, function: F) -> LazyAsync<U>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let source = self.clone();
        let function = Arc::new(function);
        LazyAsync::new(move |resolve: Resolver<U>| {
            let function = Arc::clone(&function);
            source.fork(move |value| resolve(function(value)));
        })
    }

    /// Sequences a dependent computation after `self`.
    ///
    /// Starting the result starts `self`; once it resolves, `function` builds
    /// the next value, which is started with the original resolver.
    pub fn chain<U, F>(&self, function: F) -> LazyAsync<U>
    where
        U: Send + 'static,
        F: Fn(T) -> LazyAsync<U> + Send + Sync + 'static,
    {
        let source = self.clone();
        let function = Arc::new(function);
        LazyAsync::new(move |resolve: Resolver<U>| {
            let function = Arc::clone(&function);
            source.fork(move |value| function(value).fork(resolve));
        })
    }

    /// Starts every branch concurrently and resolves with all of their values.
    ///
    /// Each start of the result allocates a fresh completion counter and slot
    /// buffer. All branches are forked before the result can resolve, values
    /// are placed by position regardless of completion order, and the
    /// resolver runs exactly once, after the last branch completes. An empty
    /// input resolves immediately with an empty vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::mpsc;
    /// use liftkit::control::LazyAsync;
    ///
    /// let joined = LazyAsync::join_all(vec![LazyAsync::resolved(1), LazyAsync::resolved(2)]);
    /// let (sender, receiver) = mpsc::channel();
    /// joined.fork(move |values| sender.send(values).unwrap_or_default());
    /// assert_eq!(receiver.recv(), Ok(vec![1, 2]));
    /// ```
    pub fn join_all(branches: Vec<Self>) -> LazyAsync<Vec<T>> {
        let branches: Arc<[Self]> = branches.into();
        LazyAsync::new(move |resolve: Resolver<Vec<T>>| {
            let total = branches.len();
            tracing::debug!(branches = total, "starting concurrent branches");
            if total == 0 {
                resolve(Vec::new());
                return;
            }

            let barrier = Arc::new(Barrier::new(total, resolve));
            for (index, branch) in branches.iter().enumerate() {
                let barrier = Arc::clone(&barrier);
                branch.fork(move |value| barrier.complete(index, value));
            }
        })
    }
}

/// Creates a lazy value from its start function.
#[inline]
pub fn lazy_async<T, S>(start: S) -> LazyAsync<T>
where
    T: Send + 'static,
    S: Fn(Resolver<T>) + Send + Sync + 'static,
{
    LazyAsync::new(start)
}

/// Creates a lazy value that resolves with `value` on every start.
#[inline]
pub fn resolved_async<T>(value: T) -> LazyAsync<T>
where
    T: Clone + Send + Sync + 'static,
{
    LazyAsync::resolved(value)
}

// =============================================================================
// Fan-in Barrier
// =============================================================================

struct Barrier<T> {
    state: Mutex<BarrierState<T>>,
}

struct BarrierState<T> {
    slots: Vec<Option<T>>,
    completed: usize,
    resolve: Option<Resolver<Vec<T>>>,
}

impl<T> Barrier<T> {
    fn new(total: usize, resolve: Resolver<Vec<T>>) -> Self {
        let mut slots = Vec::with_capacity(total);
        slots.resize_with(total, || None);
        Self {
            state: Mutex::new(BarrierState {
                slots,
                completed: 0,
                resolve: Some(resolve),
            }),
        }
    }

    fn complete(&self, index: usize, value: T) {
        let finished = {
            let mut state = self.state.lock();
            state.slots[index] = Some(value);
            state.completed += 1;
            tracing::trace!(
                index,
                completed = state.completed,
                total = state.slots.len(),
                "branch resolved"
            );
            if state.completed < state.slots.len() {
                return;
            }

            let values: Vec<T> = std::mem::take(&mut state.slots)
                .into_iter()
                .flatten()
                .collect();
            state.resolve.take().map(|resolve| (resolve, values))
        };

        // The resolver may fork further work; it runs after the lock is released.
        if let Some((resolve, values)) = finished {
            tracing::debug!(branches = values.len(), "all branches resolved");
            resolve(values);
        }
    }
}
