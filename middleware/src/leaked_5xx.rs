use axum::{
    Json,
    body::{Body, to_bytes},
    http::{Request, Response},
    middleware::Next,
    response::IntoResponse,
};

/// Handlers in this service do not produce 5xx on their own, so anything
/// that reaches here is unexpected. The original body is logged and the
/// client only sees a generic json error.
pub async fn mw_handle_leaked_5xx(request: Request<Body>, next: Next) -> Response<Body> {
    let response = next.run(request).await;
    let status = response.status();

    if !status.is_server_error() {
        return response;
    }

    match to_bytes(response.into_body(), usize::MAX).await {
        Ok(content) if !content.is_empty() => tracing::error!(%status, "{:?}", content),
        Ok(_) => tracing::error!(%status, "empty response body"),
        Err(e) => tracing::error!(
            %status,
            "unable to convert 5xx response body to bytes :: {:?}",
            e
        ),
    }

    (
        status,
        Json(serde_json::json!({
            "error": "Internal Server Error",
            "message": "An unexpected error occurred",
        })),
    )
        .into_response()
}
