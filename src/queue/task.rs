//! Task representation and outcome conversion.

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

/// Boxed error type that fallible tasks resolve to.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Type-erased future a queued task produces when invoked.
pub(crate) type TaskFuture = Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send>>;

/// A unit of work sitting in the backlog.
pub(crate) struct Task {
    /// Monotonic per-queue sequence number, used for log correlation only.
    pub(crate) seq: u64,
    pub(crate) run: Box<dyn FnOnce() -> TaskFuture + Send>,
}

/// How the drain loop classifies a task that did not complete cleanly.
///
/// Never crosses the public API: the drain loop pattern-matches on it and
/// routes it to the diagnostic sink, then moves on to the next task.
#[derive(Debug, Error)]
pub(crate) enum TaskFailure {
    #[error("task returned an error: {0}")]
    Error(BoxError),

    #[error("task panicked: {0}")]
    Panic(String),
}

/// Conversion from a task future's output into the queue's internal outcome.
///
/// Implemented for `()` (infallible tasks) and `Result<(), E>` for any error
/// convertible into [`BoxError`], so both plain and fallible async blocks can
/// be submitted without adapters:
///
/// ```rust,no_run
/// use seqq::SequentialQueue;
///
/// # #[tokio::main]
/// # async fn main() {
/// let queue = SequentialQueue::new();
/// queue.submit(|| async { /* infallible */ });
/// queue.submit(|| async { std::fs::remove_file("stale.lock") });
/// # }
/// ```
pub trait IntoTaskResult {
    /// Converts the task output, with any failure boxed for reporting.
    fn into_task_result(self) -> Result<(), BoxError>;
}

impl IntoTaskResult for () {
    fn into_task_result(self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<E> IntoTaskResult for Result<(), E>
where
    E: Into<BoxError>,
{
    fn into_task_result(self) -> Result<(), BoxError> {
        self.map_err(Into::into)
    }
}
