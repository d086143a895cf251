use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use ridge::domain::config::DemoConfig;
use ridge_demo::router::{self, UNSUPPORTED_METHOD};
use rstest::rstest;
use tower::ServiceExt;

type TestResult = Result<(), Box<dyn std::error::Error>>;

async fn send(method: Method, uri: &str) -> Result<(StatusCode, Option<String>, String), Box<dyn std::error::Error>> {
    let app = router::init(DemoConfig::default());
    let response = app.oneshot(Request::builder().method(method).uri(uri).body(Body::empty())?).await?;

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let bytes = response.into_body().collect().await?.to_bytes();
    Ok((status, content_type, String::from_utf8(bytes.to_vec())?))
}

#[rstest]
#[case("/")]
#[case("/any/nested/path")]
#[tokio::test]
async fn get_renders_page_on_every_path(#[case] uri: &str) -> TestResult {
    let (status, content_type, body) = send(Method::GET, uri).await?;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.is_some_and(|ct| ct.starts_with("text/html")));
    assert!(body.starts_with("<!doctype html><html><head>"));
    assert!(body.contains(r#"<label x-data="{ isChecked: false }""#));
    assert!(body.contains(r#"x-bind:class="{ 'bg-gray-300': !isChecked, 'bg-green-500': isChecked }""#));
    assert!(body.contains(r#"<input x-model="isChecked" type="checkbox""#));
    assert!(body.contains(r#"<svg x-show="!isChecked""#));
    assert!(body.contains(r#"x-mask="99/99/9999""#));
    assert!(body.ends_with("</body></html>"));
    Ok(())
}

#[rstest]
#[case(Method::POST, "/")]
#[case(Method::PUT, "/form")]
#[case(Method::DELETE, "/")]
#[case(Method::HEAD, "/")]
#[case(Method::POST, "/health")]
#[case(Method::HEAD, "/health")]
#[case(Method::PATCH, "/health")]
#[tokio::test]
async fn other_methods_are_rejected(#[case] method: Method, #[case] uri: &str) -> TestResult {
    let (status, _, body) = send(method.clone(), uri).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    if method != Method::HEAD {
        assert_eq!(body, UNSUPPORTED_METHOD);
    }
    Ok(())
}

#[tokio::test]
async fn health_is_served_next_to_the_page() -> TestResult {
    let (status, content_type, body) = send(Method::GET, "/health").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert!(body.contains(r#""status":"up""#));
    Ok(())
}
