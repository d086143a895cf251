//! # Runtime
//!
//! Tokio runtime presets shared by the workspace binaries.
//!
//! * **Default**: worker count from `TOKIO_WORKER_THREADS` or available parallelism.
//! * **High Performance**: server preset with larger stacks and longer keep-alive.
//!
//! ## Example
//!
//! ```rust,ignore
//! #[ridge_runtime::main(high_performance)]
//! async fn main() -> anyhow::Result<()> {
//!     Ok(())
//! }
//! ```

pub use anyhow::Result;
pub use ridge_derive::main;

use anyhow::anyhow;
use std::num::NonZero;
use std::sync::OnceLock;
use std::thread::available_parallelism;
use std::time::Duration;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

const FALLBACK_WORKER_THREADS: usize = 4;
const MAX_WORKER_THREADS: usize = 1024;
/// 3 `MiB`.
const DEFAULT_STACK_SIZE: usize = 3 * 1024 * 1024;
/// 1 `MiB`.
const MIN_STACK_SIZE: usize = 1024 * 1024;
/// 16 `MiB`.
const MAX_STACK_SIZE: usize = 16 * 1024 * 1024;
const DEFAULT_THREAD_NAME: &str = "ridge-worker";
const DEFAULT_KEEP_ALIVE: Duration = Duration::from_secs(60);

static WORKER_THREADS: OnceLock<usize> = OnceLock::new();

fn detected_worker_threads() -> usize {
    *WORKER_THREADS.get_or_init(|| {
        std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|raw| raw.parse::<usize>().ok())
            .filter(|&n| (1..=MAX_WORKER_THREADS).contains(&n))
            .unwrap_or_else(|| {
                available_parallelism().map_or(FALLBACK_WORKER_THREADS, NonZero::get)
            })
    })
}

/// Settings applied to the multithreaded Tokio runtime.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub worker_threads: usize,
    pub stack_size: usize,
    pub thread_name: String,
    pub thread_keep_alive: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            worker_threads: detected_worker_threads(),
            stack_size: DEFAULT_STACK_SIZE,
            thread_name: DEFAULT_THREAD_NAME.to_owned(),
            thread_keep_alive: DEFAULT_KEEP_ALIVE,
        }
    }
}

impl RuntimeConfig {
    /// Preset for the HTTP server.
    #[must_use = "Use this configuration for server applications"]
    pub fn high_performance() -> Self {
        Self {
            stack_size: 4 * 1024 * 1024,
            thread_name: "ridge-hp".to_owned(),
            thread_keep_alive: Duration::from_secs(300),
            ..Self::default()
        }
    }

    /// Clamps every field into its supported range.
    fn normalized(&self) -> Self {
        let thread_name = if self.thread_name.trim().is_empty() {
            DEFAULT_THREAD_NAME.to_owned()
        } else {
            self.thread_name.clone()
        };

        Self {
            worker_threads: self.worker_threads.clamp(1, MAX_WORKER_THREADS),
            stack_size: self.stack_size.clamp(MIN_STACK_SIZE, MAX_STACK_SIZE),
            thread_name,
            thread_keep_alive: self.thread_keep_alive,
        }
    }
}

/// Builds a multithreaded Tokio runtime with all drivers enabled.
///
/// Out-of-range values in `config` are clamped rather than rejected.
///
/// # Errors
///
/// Returns an error if the OS refuses to create the runtime threads.
pub fn build_runtime_with_config(config: &RuntimeConfig) -> Result<Runtime> {
    let config = config.normalized();
    debug!(config = ?config, "Building tokio runtime");

    Builder::new_multi_thread()
        .worker_threads(config.worker_threads)
        .thread_name(&config.thread_name)
        .thread_stack_size(config.stack_size)
        .thread_keep_alive(config.thread_keep_alive)
        .enable_all()
        .build()
        .map_err(|e| anyhow!("Failed to initialize runtime: {e}"))
}
