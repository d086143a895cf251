mod health;
pub mod router;

pub use health::HealthResponse;
