//! Batching strategies: concurrent (`all`) and sequential (`sequence`).

use std::sync::Arc;

use futures::future::try_join_all;

use crate::task::Task;

/// Run every task concurrently.
///
/// Succeeds with the results in input order once all tasks succeed; fails
/// with the first failure the join observes.
pub fn all<T, E>(tasks: impl IntoIterator<Item = Task<T, E>>) -> Task<Vec<T>, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    let tasks: Arc<[Task<T, E>]> = tasks.into_iter().collect();
    tracing::debug!(count = tasks.len(), "batched tasks for concurrent run");
    Task::new(move || try_join_all(tasks.iter().map(Task::run)))
}

/// Run tasks one after another, in order.
///
/// Each step appends the next result with [`append`], exactly like a
/// left fold of `map2`, but the steps run in a loop so the future stays
/// flat however many tasks there are. A failure stops the loop, so later
/// tasks never start.
pub fn sequence<T, E>(tasks: impl IntoIterator<Item = Task<T, E>>) -> Task<Vec<T>, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    let tasks: Arc<[Task<T, E>]> = tasks.into_iter().collect();
    tracing::debug!(count = tasks.len(), "batched tasks for sequential run");
    Task::new(move || {
        let tasks = Arc::clone(&tasks);
        async move {
            let mut results = Vec::with_capacity(tasks.len());
            for task in tasks.iter() {
                results = append(results, task.run().await?);
            }
            Ok(results)
        }
    })
}

/// Return `list` with `value` pushed onto the end.
pub fn append<T>(mut list: Vec<T>, value: T) -> Vec<T> {
    list.push(value);
    list
}

#[cfg(test)]
mod tests;
