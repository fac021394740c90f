#![allow(dead_code)]

pub mod macros;

use axum::body::{Body, to_bytes};
use devops_info_service::{AppState, StartClock};
use http::{Request, Response, header::CONTENT_TYPE};
use tower::ServiceExt;

pub struct TestClient {
    clock: StartClock,
}

impl TestClient {
    pub fn new() -> Self {
        Self::started_at(StartClock::now())
    }

    pub fn started_at(clock: StartClock) -> Self {
        Self { clock }
    }

    pub async fn send(&self, request: Request<Body>) -> Asserter {
        let response = devops_info_service::server(AppState { clock: self.clock })
            .oneshot(request)
            .await
            .unwrap(/* Infallible */);
        Asserter::from(response)
    }
}

pub struct Asserter {
    response: Response<Body>,
}

impl Asserter {
    pub fn status(self, expected: u16) -> Self {
        assert_eq!(
            self.response.status().as_u16(),
            expected,
            "expected status {}, got {}",
            expected,
            self.response.status()
        );
        self
    }

    pub fn is_json(self) -> Self {
        let content_type = self
            .response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok());
        assert_eq!(
            content_type,
            Some("application/json"),
            "expected application/json, got {:?}",
            content_type
        );
        self
    }

    pub fn has_header(self, name: &str) -> Self {
        assert!(
            self.response.headers().contains_key(name),
            "expected header `{}` in {:?}",
            name,
            self.response.headers()
        );
        self
    }

    pub async fn json_body<T>(self, f: impl FnOnce(T))
    where
        T: serde::de::DeserializeOwned,
    {
        f(self.into_deserialized_json_body::<T>().await)
    }

    pub async fn into_deserialized_json_body<T>(self) -> T
    where
        T: serde::de::DeserializeOwned,
    {
        let body_bytes = to_bytes(self.response.into_body(), usize::MAX)
            .await
            .expect("unable to read response body");

        serde_json::from_slice::<T>(&body_bytes).expect("unable to deserialize response body")
    }
}

impl From<Response<Body>> for Asserter {
    fn from(response: Response<Body>) -> Self {
        Self { response }
    }
}

#[cfg(feature = "test-tracing")]
static TRACING_INIT: std::sync::Once = std::sync::Once::new();

#[cfg(feature = "test-tracing")]
pub fn tracing_init() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::layer::SubscriberExt;
        use tracing_subscriber::util::SubscriberInitExt;

        tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::from_default_env())
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .init();
    });
}

pub fn assert_rfc3339(value: &serde_json::Value) {
    use time::{OffsetDateTime, format_description::well_known::Rfc3339};

    let text = value.as_str().expect("timestamp is not a string");
    OffsetDateTime::parse(text, &Rfc3339)
        .unwrap_or_else(|e| panic!("`{}` is not rfc3339 :: {:?}", text, e));
}
