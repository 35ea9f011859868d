//! Bounded worker pool and submission-order aggregation.
//!
//! Workers send `(task, result)` pairs over a channel as they finish; the
//! join step is a full barrier, after which results are placed into a slot
//! array indexed by submission ordinal. The final ordering is therefore
//! `[file 0's records in file order, file 1's records, ...]` no matter which
//! worker completed first, and the shared slot array is only written from the
//! aggregating thread. Determinism and exclusivity hold by construction, not
//! by locking.

use std::num::NonZeroUsize;
use std::sync::Arc;

use threadpool::ThreadPool;

use super::{load_file, FileOutcome, LoadError, LoadTask};
use crate::core::index::IndexBuilder;

/// Worker-pool size for a run: one per task, capped at the machine's
/// available parallelism. Tasks beyond the cap queue.
#[must_use]
pub fn default_worker_count(task_count: usize) -> usize {
    let parallelism = std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1);
    task_count.clamp(1, parallelism)
}

/// Run every task on a bounded pool and return one outcome per task, in
/// submission order.
///
/// Blocks until every worker has finished. Each outcome carries either the
/// file's index list (in record order) or the error that stopped it; a worker
/// that dies without reporting (a panic in the builder, say) is surfaced as
/// [`LoadError::Worker`] rather than dropped.
///
/// Expects `tasks` to carry ordinals `0..tasks.len()` as produced by argument
/// parsing.
pub fn load_all<B: IndexBuilder>(
    tasks: Vec<LoadTask>,
    builder: &Arc<B>,
    workers: usize,
) -> Vec<FileOutcome<B::Index>> {
    let task_count = tasks.len();
    if task_count == 0 {
        return Vec::new();
    }

    // Kept aside so a worker that never reports can still be attributed.
    let paths: Vec<_> = tasks.iter().map(|task| task.path.clone()).collect();

    let pool = ThreadPool::new(workers.max(1));
    let (tx, rx) = crossbeam::channel::bounded(task_count);

    for task in tasks {
        debug_assert!(task.ordinal < task_count);
        let tx = tx.clone();
        let builder = Arc::clone(builder);
        pool.execute(move || {
            let result = load_file(&task, builder.as_ref());
            // The receiver outlives the join below, so this cannot fail.
            let _ = tx.send(FileOutcome { task, result });
        });
    }
    drop(tx);

    pool.join();

    // Slot array indexed by submission ordinal: completion order is erased
    // here, not serialized away in the workers.
    let mut slots: Vec<Option<FileOutcome<B::Index>>> = Vec::with_capacity(task_count);
    slots.resize_with(task_count, || None);
    for outcome in rx.try_iter() {
        let ordinal = outcome.task.ordinal;
        slots[ordinal] = Some(outcome);
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(ordinal, slot)| {
            slot.unwrap_or_else(|| FileOutcome {
                task: LoadTask::new(ordinal, paths[ordinal].clone()),
                result: Err(LoadError::Worker {
                    path: paths[ordinal].clone(),
                }),
            })
        })
        .collect()
}
