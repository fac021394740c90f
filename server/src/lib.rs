mod api;
mod clock;
mod config;
mod endpoints;
mod request;
mod runtime;
mod span;
mod system;

use std::net::SocketAddr;

use axum::{Router, middleware::from_fn, routing::any};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

pub use api::{health, info, not_found};
pub use clock::StartClock;
pub use config::{ConfigError, DEFAULT_HOST, DEFAULT_PORT, ServerOpts};
pub use endpoints::{ENDPOINTS, Endpoint};
pub use request::RequestFacts;
pub use runtime::{RuntimeSnapshot, human_duration};
pub use system::SystemFacts;

#[derive(Debug, Clone, Copy)]
pub struct AppState {
    pub clock: StartClock,
}

/// Exact path matching only. Any method is served on a known path;
/// everything else falls through to a json 404.
pub fn server(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(from_fn(middleware::mw_client_ip))
        .layer(TraceLayer::new_for_http().make_span_with(span::span))
        .layer(from_fn(middleware::mw_handle_leaked_5xx));

    Router::new()
        .route(api::info::PATH, any(api::info::handler))
        .route(api::health::PATH, any(api::health::handler))
        .fallback(api::not_found::handler)
        .with_state(state)
        .layer(middleware)
}

pub async fn serve(opts: ServerOpts, clock: StartClock) -> Result<(), ServerError> {
    tracing::info!("{:?}", opts);

    let addr = opts.addr();
    let listener = TcpListener::bind(addr.as_str())
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    tracing::info!(
        "listening on {}",
        listener.local_addr().map_err(ServerError::LocalAddr)?
    );

    let app = server(AppState { clock }).into_make_service_with_connect_info::<SocketAddr>();

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => {
            tracing::warn!("unable to listen for shutdown signal :: {:?}", e);
            std::future::pending::<()>().await
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    #[error("bind :: {addr} :: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("local_addr :: {0}")]
    LocalAddr(#[source] std::io::Error),

    #[error("axum::serve :: {0}")]
    Serve(#[source] std::io::Error),
}
