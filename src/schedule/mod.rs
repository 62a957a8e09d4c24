//! Scheduled submission — delayed and recurring tasks.
//!
//! ## Planned Features
//!
//! - `submit_after(delay, task)` via `tokio::time::sleep`
//! - Fixed-interval recurring submission
//! - Cron-style calendars (via the `cron` crate)
//! - Cancellation handles for scheduled-but-not-yet-queued tasks
//!
//! ## Status: PLANNED

// TODO: Implement scheduled submission

/// Placeholder — will become the `Scheduler` type.
pub struct Scheduler;
