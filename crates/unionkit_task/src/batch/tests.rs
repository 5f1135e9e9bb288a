#![allow(clippy::unwrap_used, reason = "tests panic on failure")]

use super::*;
use futures::channel::oneshot;
use futures::executor::block_on;
use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};

fn counted(counter: &Arc<AtomicUsize>, outcome: Result<i32, String>) -> Task<i32, String> {
    let counter = Arc::clone(counter);
    Task::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        futures::future::ready(outcome.clone())
    })
}

#[test]
fn test_sequence_collects_in_order() {
    let tasks = vec![
        Task::<i32, String>::succeed(1),
        Task::succeed(2),
        Task::succeed(3),
    ];
    assert_eq!(block_on(Task::sequence(tasks).run()), Ok(vec![1, 2, 3]));
}

#[test]
fn test_sequence_stops_at_first_failure() {
    let third_runs = Arc::new(AtomicUsize::new(0));
    let tasks = vec![
        Task::succeed(1),
        Task::fail("middle".to_string()),
        counted(&third_runs, Ok(3)),
    ];
    assert_eq!(
        block_on(sequence(tasks).run()),
        Err("middle".to_string())
    );
    assert_eq!(third_runs.load(Ordering::SeqCst), 0);
}

#[test]
fn test_sequence_handles_long_lists() {
    let tasks: Vec<Task<i32, String>> = (0..10_000).map(Task::succeed).collect();
    let results = block_on(sequence(tasks).run()).unwrap();
    assert_eq!(results.len(), 10_000);
    assert_eq!(results.first(), Some(&0));
    assert_eq!(results.last(), Some(&9_999));
}

#[test]
fn test_sequence_long_list_stops_at_failure() {
    let after = Arc::new(AtomicUsize::new(0));
    let mut tasks: Vec<Task<i32, String>> = (0..5_000).map(Task::succeed).collect();
    tasks.push(Task::fail("halfway".to_string()));
    tasks.extend((0..5_000).map(|_| counted(&after, Ok(0))));

    assert_eq!(block_on(sequence(tasks).run()), Err("halfway".to_string()));
    assert_eq!(after.load(Ordering::SeqCst), 0);
}

#[test]
fn test_sequence_of_nothing_is_empty() {
    let tasks: Vec<Task<i32, String>> = Vec::new();
    assert_eq!(block_on(sequence(tasks).run()), Ok(vec![]));
}

#[test]
fn test_all_preserves_input_order() {
    let tasks = vec![
        Task::<i32, String>::succeed(3),
        Task::succeed(1),
        Task::succeed(2),
    ];
    assert_eq!(block_on(Task::all(tasks).run()), Ok(vec![3, 1, 2]));
}

#[test]
fn test_all_fails_with_failure() {
    let tasks = vec![
        Task::<i32, &'static str>::succeed(1),
        Task::fail("boom"),
    ];
    assert_eq!(block_on(all(tasks).run()), Err("boom"));
}

#[test]
fn test_all_runs_members_concurrently() {
    // The first task can only finish after the second one has started.
    let (tx, rx) = oneshot::channel::<i32>();
    let rx = Arc::new(Mutex::new(Some(rx)));
    let tx = Arc::new(Mutex::new(Some(tx)));

    let waiting: Task<i32, String> = Task::new(move || {
        let rx = rx.lock().take();
        async move {
            match rx {
                Some(rx) => rx.await.map_err(|_| "sender dropped".to_string()),
                None => Err("already ran".to_string()),
            }
        }
    });
    let signalling: Task<i32, String> = Task::new(move || {
        let tx = tx.lock().take();
        async move {
            if let Some(tx) = tx {
                let _ = tx.send(7);
            }
            Ok(1)
        }
    });

    assert_eq!(block_on(all([waiting, signalling]).run()), Ok(vec![7, 1]));
}

#[test]
fn test_batches_rerun_every_member() {
    let counter = Arc::new(AtomicUsize::new(0));
    let batch = all(vec![counted(&counter, Ok(1)), counted(&counter, Ok(2))]);
    assert_eq!(block_on(batch.run()), Ok(vec![1, 2]));
    assert_eq!(block_on(batch.run()), Ok(vec![1, 2]));
    assert_eq!(counter.load(Ordering::SeqCst), 4);
}

#[test]
fn test_append_pushes_to_the_end() {
    assert_eq!(append(vec![1, 2], 3), vec![1, 2, 3]);
    assert_eq!(append(Vec::new(), "a"), vec!["a"]);
}
