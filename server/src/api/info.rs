use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use axum_macros::debug_handler;
use serde::Serialize;
use time::OffsetDateTime;

use crate::{
    AppState,
    endpoints::{ENDPOINTS, Endpoint},
    request::RequestFacts,
    runtime::RuntimeSnapshot,
    system::SystemFacts,
};

pub const PATH: &str = "/";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServiceDescriptor {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub framework: &'static str,
}

pub const SERVICE: ServiceDescriptor = ServiceDescriptor {
    name: "devops-info-service",
    version: env!("CARGO_PKG_VERSION"),
    description: "DevOps course info service (Rust)",
    framework: "axum",
};

#[derive(Debug, Serialize)]
pub struct ResponseBody {
    pub service: ServiceDescriptor,
    pub system: SystemFacts,
    pub runtime: RuntimeSnapshot,
    pub request: RequestFacts,
    pub endpoints: &'static [Endpoint],
}

#[debug_handler]
#[tracing::instrument(skip_all)]
pub async fn handler(
    State(AppState { clock }): State<AppState>,
    request: RequestFacts,
) -> ResponseBody {
    tracing::info!("handling request for {} {}", request.method, request.path);

    ResponseBody {
        service: SERVICE,
        system: SystemFacts::collect(),
        runtime: RuntimeSnapshot::collect(OffsetDateTime::now_utc(), clock),
        request,
        endpoints: &ENDPOINTS,
    }
}

impl IntoResponse for ResponseBody {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
