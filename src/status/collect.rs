//! Concurrent SPROM collection for the status report

use crate::device::{CliExecutor, Context};
use crate::error::ExecutionError;
use crate::sprom::{fetch_sprom, sprom_query_interface, SpromData};
use crate::status::StatusRow;
use std::collections::{BTreeSet, HashMap, VecDeque};
use std::panic::{self, AssertUnwindSafe};
use std::sync::{mpsc, Mutex};
use std::thread;

/// SPROM results keyed by the queried interface; `None` means no data
pub type SpromCache = HashMap<String, Option<SpromData>>;

/// Distinct interfaces whose SPROM must be read to type every row
pub fn query_targets(rows: &[StatusRow]) -> BTreeSet<String> {
    rows.iter()
        .filter(|row| row.wants_sprom())
        .map(|row| sprom_query_interface(&row.interface))
        .collect()
}

/// Query every target's SPROM with at most `max_workers` queries in flight
///
/// Results are gathered in completion order. A worker that panics is logged
/// and its interface is left out of the cache.
pub fn collect_sprom(
    executor: &dyn CliExecutor,
    ctx: &Context,
    targets: &BTreeSet<String>,
    max_workers: usize,
) -> SpromCache {
    let mut cache = SpromCache::with_capacity(targets.len());
    if targets.is_empty() {
        return cache;
    }

    // Shared work queue, drained by the workers
    let queue = Mutex::new(targets.iter().cloned().collect::<VecDeque<_>>());
    let workers = max_workers.clamp(1, targets.len());
    let (tx, rx) = mpsc::channel();

    thread::scope(|s| {
        for _ in 0..workers {
            let tx = tx.clone();
            let queue = &queue;
            s.spawn(move || loop {
                // Take the next port, stop when the queue is empty
                let next = queue.lock().ok().and_then(|mut q| q.pop_front());
                let Some(port) = next else {
                    break;
                };

                let result = panic::catch_unwind(AssertUnwindSafe(|| {
                    fetch_sprom(executor, ctx, &port)
                }));
                if tx.send((port, result)).is_err() {
                    break;
                }
            });
        }
        // Only the workers hold senders now, so the loop ends when they finish
        drop(tx);

        // Collect in completion order
        for (port, result) in rx {
            match result {
                Ok(data) => {
                    cache.insert(port, data);
                }
                Err(_) => {
                    let err = ExecutionError::WorkerPanicked(port);
                    ctx.print_error(&format!("SPROM data collection failed: {}", err));
                }
            }
        }
    });

    cache
}
