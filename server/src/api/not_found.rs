use axum::{
    Json,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use axum_macros::debug_handler;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ResponseBody {
    pub error: &'static str,
    pub message: &'static str,
}

/// Anything that is not exactly one of the known paths.
#[debug_handler]
pub async fn handler(method: Method, uri: Uri) -> ResponseBody {
    tracing::warn!("HTTP error 404 on {} {}", method, uri.path());

    ResponseBody {
        error: "Not Found",
        message: "Endpoint does not exist",
    }
}

impl IntoResponse for ResponseBody {
    fn into_response(self) -> Response {
        (StatusCode::NOT_FOUND, Json(self)).into_response()
    }
}
