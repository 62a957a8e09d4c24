//! Durable backlogs — queue state that survives process restarts.
//!
//! ## Planned Features
//!
//! - Pluggable `Backlog` trait behind the in-memory default
//! - File-backed write-ahead backlog
//! - Redis backend via `fred` or `deadpool-redis`
//! - Replay of unfinished tasks on startup
//!
//! ## Status: PLANNED

// TODO: Implement durable backlog backends

/// Placeholder — will become the `Backlog` storage trait.
pub struct Backlog;
