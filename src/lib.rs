//! # seqq
//!
//! A lightweight in-process sequential async task queue for Tokio.
//!
//! Tasks submitted to a [`SequentialQueue`] run one at a time, in submission
//! order, no matter how many threads or tasks are submitting. Submission is
//! fire-and-forget: it returns immediately, and task failures are reported
//! through `tracing` rather than back to the submitter.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use seqq::SequentialQueue;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let queue = SequentialQueue::new();
//!     queue.submit(|| async {
//!         tokio::time::sleep(Duration::from_millis(500)).await;
//!         println!("first");
//!     });
//!     queue.submit(|| async {
//!         println!("second — only after the first finished");
//!     });
//!     tokio::time::sleep(Duration::from_secs(1)).await;
//! }
//! ```

// ── Active modules with real implementations ──────────────────────────────────
pub mod queue;

// ── Planned modules — stubs for future implementation ────────────────────────
pub mod persist;
pub mod schedule;

// ── Convenience re-exports ────────────────────────────────────────────────────
pub use queue::{BoxError, IntoTaskResult, SequentialQueue};
