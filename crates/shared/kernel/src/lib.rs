//! Kernel utilities shared by ridge applications.
//! Keep this crate lightweight: config loading and the system routes every server mounts.
//!
//! ## Config loading
//! ```rust,no_run
//! use ridge_kernel::config::load_config;
//! use ridge_kernel::domain::config::DemoConfig;
//!
//! let cfg: DemoConfig = load_config(None::<&str>).unwrap();
//! println!("listening on {}", cfg.server.port);
//! ```
pub mod config;
#[cfg(feature = "server")]
pub mod server;

pub use ridge_domain as domain;
