//! Sequential async task queue.
//!
//! [`SequentialQueue`] accepts asynchronous tasks at arbitrary times and runs
//! them one at a time, in submission order. Submitting never blocks: the
//! first submission into an idle queue spawns a drain cycle on the Tokio
//! runtime, and every later submission while that cycle is alive is a pure
//! append. The drain cycle consumes the backlog to exhaustion — including
//! tasks appended while it runs — then exits, leaving the queue idle and
//! reusable.
//!
//! Failures are fire-and-forget by design: a task that resolves to `Err` or
//! panics is reported through `tracing` at `warn` level and the next task
//! still runs. The queue offers no way for a submitter to learn whether
//! their particular task succeeded.

use std::collections::VecDeque;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::FutureExt;
use tokio::runtime::Handle;
use tracing::{debug, warn};

pub mod task;

pub use task::{BoxError, IntoTaskResult};

use task::{Task, TaskFailure, TaskFuture};

/// An in-process queue that executes submitted tasks strictly one at a time,
/// in submission order.
///
/// Cloning is cheap and produces another handle to the same queue, so it can
/// be shared freely across tasks and threads. Dropping the last handle while
/// tasks remain pending discards them without running them.
///
/// # Examples
///
/// ```rust,no_run
/// use seqq::SequentialQueue;
///
/// #[tokio::main]
/// async fn main() {
///     let queue = SequentialQueue::new();
///     queue.submit(|| async {
///         // runs first, alone
///     });
///     queue.submit(|| async {
///         // starts only after the previous task fully completed
///     });
/// }
/// ```
#[derive(Clone)]
pub struct SequentialQueue {
    shared: Arc<Shared>,
}

struct Shared {
    runtime: Handle,
    state: Mutex<State>,
}

struct State {
    backlog: VecDeque<Task>,
    draining: bool,
    next_seq: u64,
}

impl Shared {
    /// Critical sections never panic and never await, so a poisoned lock
    /// still guards consistent state.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SequentialQueue {
    /// Creates an idle queue bound to the current Tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime context. Use
    /// [`SequentialQueue::with_handle`] to construct a queue from a plain
    /// thread.
    pub fn new() -> Self {
        Self::with_handle(Handle::current())
    }

    /// Creates an idle queue that spawns its drain cycles on `runtime`.
    ///
    /// Useful when submissions come from threads outside the runtime, e.g.
    /// a blocking I/O thread feeding work into an async application.
    pub fn with_handle(runtime: Handle) -> Self {
        Self {
            shared: Arc::new(Shared {
                runtime,
                state: Mutex::new(State {
                    backlog: VecDeque::new(),
                    draining: false,
                    next_seq: 0,
                }),
            }),
        }
    }

    /// Appends `task` to the backlog and starts a drain cycle if none is
    /// active.
    ///
    /// Returns immediately — it never waits for the submitted task (or any
    /// task ahead of it) to run. The task is invoked lazily when the drain
    /// cycle reaches it; its future may resolve to `()` or to a
    /// `Result<(), E>` (see [`IntoTaskResult`]). An `Err` outcome or a panic
    /// is logged at `warn` level and does not affect later tasks.
    ///
    /// Safe to call concurrently from any number of threads or tasks; the
    /// backlog append and the drain-cycle start are a single critical
    /// section, so exactly one cycle is ever active per queue.
    pub fn submit<F, Fut>(&self, task: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future + Send + 'static,
        Fut::Output: IntoTaskResult,
    {
        let run: Box<dyn FnOnce() -> TaskFuture + Send> =
            Box::new(move || Box::pin(async move { task().await.into_task_result() }));

        let mut state = self.shared.lock();
        let seq = state.next_seq;
        state.next_seq += 1;
        state.backlog.push_back(Task { seq, run });
        debug!(task = seq, pending = state.backlog.len(), "task submitted");

        let start_cycle = !state.draining;
        if start_cycle {
            state.draining = true;
        }
        drop(state);

        if start_cycle {
            self.shared.runtime.spawn(drain(Arc::clone(&self.shared)));
        }
    }

    /// Discards every pending task from the backlog.
    ///
    /// A task currently mid-execution is not cancelled; it runs to
    /// completion and the drain cycle then exits normally. Dropped tasks
    /// never run and never report success or failure.
    pub fn clear(&self) {
        let mut state = self.shared.lock();
        let dropped = state.backlog.len();
        state.backlog.clear();
        if dropped > 0 {
            debug!(dropped, "backlog cleared");
        }
    }

    /// Number of tasks waiting in the backlog (excluding one mid-execution).
    ///
    /// A point-in-time snapshot; concurrent submissions may change it before
    /// the caller acts on it.
    pub fn pending(&self) -> usize {
        self.shared.lock().backlog.len()
    }

    /// Whether a drain cycle is currently active.
    pub fn is_draining(&self) -> bool {
        self.shared.lock().draining
    }
}

/// One drain cycle: consumes the backlog until it is observed empty.
///
/// At most one instance runs per queue — `submit` only spawns this when it
/// flips the draining flag from clear to set, under the state lock.
async fn drain(shared: Arc<Shared>) {
    debug!("drain cycle started");
    loop {
        let task = {
            let mut state = shared.lock();
            match state.backlog.pop_front() {
                Some(task) => task,
                None => {
                    // The emptiness check and the flag clear share one lock
                    // acquisition: a racing submission lands either before
                    // this check (and is drained by this cycle) or after the
                    // flag is clear (and spawns its own cycle). No task is
                    // stranded, none runs twice.
                    state.draining = false;
                    debug!("drain cycle finished");
                    return;
                }
            }
        };

        debug!(task = task.seq, "task starting");
        match AssertUnwindSafe((task.run)()).catch_unwind().await {
            Ok(Ok(())) => debug!(task = task.seq, "task completed"),
            Ok(Err(e)) => {
                let failure = TaskFailure::Error(e);
                warn!(task = task.seq, error = %failure, "task failed — continuing drain");
            }
            Err(payload) => {
                let failure = TaskFailure::Panic(panic_message(payload));
                warn!(task = task.seq, error = %failure, "task failed — continuing drain");
            }
        }
    }
}

/// Renders a caught panic payload for the failure log.
fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_owned()
    }
}
