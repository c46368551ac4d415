use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics::{counter, histogram};
use std::time::Instant;

/// Label for requests that matched no route.
pub const UNMATCHED_PATH: &str = "unmatched";

/// Record `http_requests_total` and `http_request_duration_seconds`.
///
/// Paths are labelled by route template so static assets and unknown URLs
/// do not create a series each.
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = route_label(&req);

    let response = next.run(req).await;

    let duration = start.elapsed();
    let status = response.status().as_u16().to_string();

    let labels = [("method", method), ("path", path), ("status", status)];

    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());

    response
}

fn route_label(req: &Request) -> String {
    req.extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_PATH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, middleware::from_fn, routing::get};
    use tower::ServiceExt;

    #[tokio::test]
    async fn passes_responses_through_unchanged() {
        let app = Router::new()
            .route("/api/articles", get(|| async { (StatusCode::CREATED, "[]") }))
            .layer(from_fn(metrics_middleware));

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/api/articles")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[test]
    fn requests_without_a_route_use_the_unmatched_label() {
        let req = axum::http::Request::builder()
            .uri("/nowhere")
            .body(Body::empty())
            .unwrap();

        assert_eq!(route_label(&req), UNMATCHED_PATH);
    }
}
