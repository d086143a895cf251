use crate::page;
use axum::Router;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::head;
use ridge::domain::config::DemoConfig;
use ridge::server::router::{HEALTH_PATH, system_router};
use tower_http::trace::TraceLayer;
use tracing::debug;

pub const UNSUPPORTED_METHOD: &str = "Unsupported method.";

/// System routes plus the demo page on every other path; anything but GET gets a 400.
pub fn init(config: DemoConfig) -> Router {
    Router::new()
        .merge(system_router())
        // `get()` answers HEAD implicitly; claim it explicitly on the health route.
        .route(HEALTH_PATH, head(unsupported_method))
        .fallback(render_page)
        .method_not_allowed_fallback(unsupported_method)
        .layer(TraceLayer::new_for_http())
        .with_state(config)
}

async fn render_page(method: Method, State(config): State<DemoConfig>) -> Response {
    if method != Method::GET {
        return unsupported_method(method).await;
    }

    let markup = page::display(&config.assets).to_string();
    debug!(bytes = markup.len(), "Rendered demo page");

    Html(markup).into_response()
}

async fn unsupported_method(method: Method) -> Response {
    debug!(%method, "Rejected request method");
    (StatusCode::BAD_REQUEST, UNSUPPORTED_METHOD).into_response()
}
