//! The `Task` type and its combinators.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};

type Effect<T, E> = dyn Fn() -> BoxFuture<'static, Result<T, E>> + Send + Sync;

/// A deferred computation that succeeds with `T` or fails with `E`.
///
/// Cloning shares the description, never a result: a `Task` caches
/// nothing, so two runs of the same value execute the effect twice.
pub struct Task<T, E> {
    effect: Arc<Effect<T, E>>,
}

impl<T, E> Clone for Task<T, E> {
    fn clone(&self) -> Self {
        Task {
            effect: Arc::clone(&self.effect),
        }
    }
}

impl<T, E> fmt::Debug for Task<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task").finish_non_exhaustive()
    }
}

impl<T, E> Task<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Wrap a nullary effect.
    pub fn new<F, Fut>(effect: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        Task {
            effect: Arc::new(move || effect().boxed()),
        }
    }

    /// Wrap an effect together with the argument it is run with.
    ///
    /// `args` is bound now and cloned into every run.
    pub fn of<A, F, Fut>(effect: F, args: A) -> Self
    where
        A: Clone + Send + Sync + 'static,
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        Task::new(move || effect(args.clone()))
    }

    /// A task that succeeds with `value` every time it runs.
    pub fn succeed(value: T) -> Self
    where
        T: Clone + Sync,
    {
        Task::new(move || futures::future::ready(Ok(value.clone())))
    }

    /// A task that fails with `error` every time it runs.
    pub fn fail(error: E) -> Self
    where
        E: Clone + Sync,
    {
        Task::new(move || futures::future::ready(Err(error.clone())))
    }

    /// Start the effect and return a handle to its eventual outcome.
    ///
    /// Should only be called by the program's outermost layer; everything
    /// else composes tasks without running them.
    pub fn run(&self) -> BoxFuture<'static, Result<T, E>> {
        tracing::trace!("running task");
        (self.effect)()
    }

    /// Transform the success value.
    pub fn map<U, F>(&self, func: F) -> Task<U, E>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let this = self.clone();
        let func = Arc::new(func);
        Task::new(move || {
            let running = this.run();
            let func = Arc::clone(&func);
            async move { running.await.map(&*func) }
        })
    }

    /// Transform the failure value.
    pub fn map_error<G, F>(&self, func: F) -> Task<T, G>
    where
        G: Send + 'static,
        F: Fn(E) -> G + Send + Sync + 'static,
    {
        let this = self.clone();
        let func = Arc::new(func);
        Task::new(move || {
            let running = this.run();
            let func = Arc::clone(&func);
            async move { running.await.map_err(&*func) }
        })
    }

    /// Run the task returned by `func` after this one succeeds.
    ///
    /// Failures skip `func` entirely.
    pub fn chain<U, F>(&self, func: F) -> Task<U, E>
    where
        U: Send + 'static,
        F: Fn(T) -> Task<U, E> + Send + Sync + 'static,
    {
        let this = self.clone();
        let func = Arc::new(func);
        Task::new(move || {
            let running = this.run();
            let func = Arc::clone(&func);
            async move {
                let value = running.await?;
                func(value).run().await
            }
        })
    }

    /// Recover from a failure by running the task returned by `func`.
    ///
    /// Successes skip `func` entirely.
    pub fn on_error<G, F>(&self, func: F) -> Task<T, G>
    where
        G: Send + 'static,
        F: Fn(E) -> Task<T, G> + Send + Sync + 'static,
    {
        let this = self.clone();
        let func = Arc::new(func);
        Task::new(move || {
            let running = this.run();
            let func = Arc::clone(&func);
            async move {
                match running.await {
                    Ok(value) => Ok(value),
                    Err(error) => func(error).run().await,
                }
            }
        })
    }

    /// Combine this task with `other`, sequentially.
    ///
    /// `other` starts only after this task has succeeded; the first
    /// failure short-circuits.
    pub fn map2<U, V, F>(&self, func: F, other: &Task<U, E>) -> Task<V, E>
    where
        U: Send + 'static,
        V: Send + 'static,
        F: Fn(T, U) -> V + Send + Sync + 'static,
    {
        let this = self.clone();
        let other = other.clone();
        let func = Arc::new(func);
        Task::new(move || {
            let running = this.run();
            let other = other.clone();
            let func = Arc::clone(&func);
            async move {
                let first = running.await?;
                let second = other.run().await?;
                Ok(func(first, second))
            }
        })
    }
}

impl<T, E> Task<Vec<T>, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Run every task concurrently; see [`crate::all`].
    pub fn all(tasks: impl IntoIterator<Item = Task<T, E>>) -> Self {
        crate::batch::all(tasks)
    }

    /// Run tasks one at a time in order; see [`crate::sequence`].
    pub fn sequence(tasks: impl IntoIterator<Item = Task<T, E>>) -> Self {
        crate::batch::sequence(tasks)
    }
}
