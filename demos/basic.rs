//! Submits a mix of slow, fast, and failing tasks and lets the queue drain.
//!
//! Run with:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example basic
//! ```

use std::time::Duration;

use seqq::SequentialQueue;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let queue = SequentialQueue::new();

    queue.submit(|| async {
        info!("task 1: slow");
        tokio::time::sleep(Duration::from_millis(500)).await;
        info!("task 1: done");
    });

    queue.submit(|| async {
        info!("task 2: ran only after task 1 finished");
    });

    queue.submit(|| async { Err::<(), _>(std::io::Error::other("task 3: disk on fire")) });

    queue.submit(|| async {
        info!("task 4: still runs after task 3 failed");
    });

    // Fire-and-forget: give the queue time to drain before exiting.
    tokio::time::sleep(Duration::from_secs(1)).await;
}
