// tests/support/helpers.rs
use axum::body::{self, Body};
use axum::http::{Request, Response, header::CONTENT_TYPE};
use serde_json::Value;

pub fn make_test_router() -> axum::Router {
    sitedesk_core::presentation::http::routes::build_router()
}

pub fn post_json(uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub fn content_type(resp: &Response<Body>) -> String {
    resp.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}

pub async fn body_string(resp: Response<Body>) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(resp: Response<Body>) -> Value {
    serde_json::from_str(&body_string(resp).await).unwrap()
}

/// Number of elements tagged with `data-testid="<id>"`.
pub fn count_test_id(html: &str, id: &str) -> usize {
    html.matches(&format!("data-testid=\"{id}\"")).count()
}

/// Text content of every element tagged with `data-testid="<id>"`, in
/// document order. Only handles the flat markup the feed emits.
pub fn texts_by_test_id(html: &str, id: &str) -> Vec<String> {
    let needle = format!("data-testid=\"{id}\"");
    html.match_indices(&needle)
        .filter_map(|(start, _)| {
            let rest = &html[start..];
            let open_end = rest.find('>')?;
            let content = &rest[open_end + 1..];
            let close = content.find('<')?;
            Some(content[..close].to_string())
        })
        .collect()
}
