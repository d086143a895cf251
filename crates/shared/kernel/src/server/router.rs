use super::health;
use axum::Router;
use axum::routing::get;

pub const HEALTH_PATH: &str = "/health";

/// Routes every ridge server exposes regardless of its pages.
pub fn system_router<S>() -> Router<S>
where
    S: Send + Sync + Clone + 'static,
{
    Router::new().route(HEALTH_PATH, get(health::health_handler))
}
