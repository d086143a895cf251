//! # Domain Models
//!
//! Plain data types with a single dependency (`serde`).
//! No I/O and no rendering here; loading lives in `ridge-kernel`.

pub mod config;
pub mod constants;
