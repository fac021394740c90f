use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use axum_macros::debug_handler;
use serde::Serialize;
use time::OffsetDateTime;

use crate::{AppState, runtime::rfc3339};

pub const PATH: &str = "/health";

pub const HEALTHY: &str = "healthy";

#[derive(Debug, Serialize)]
pub struct ResponseBody {
    pub status: &'static str,
    pub timestamp: String,
    pub uptime_seconds: u64,
}

#[debug_handler]
#[tracing::instrument(ret, skip_all)]
pub async fn handler(State(AppState { clock }): State<AppState>) -> ResponseBody {
    let now = OffsetDateTime::now_utc();

    ResponseBody {
        status: HEALTHY,
        timestamp: rfc3339(now),
        uptime_seconds: clock.uptime_seconds(now),
    }
}

impl IntoResponse for ResponseBody {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
