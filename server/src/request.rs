use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header::USER_AGENT, request::Parts},
};
use middleware::ClientIp;
use serde::Serialize;

/// Per-request client data echoed back by the info endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct RequestFacts {
    pub client_ip: String,
    pub user_agent: String,
    pub method: String,
    pub path: String,
}

impl RequestFacts {
    pub fn collect(parts: &Parts) -> Self {
        Self {
            client_ip: parts
                .extensions
                .get::<ClientIp>()
                .map(|ClientIp(ip)| ip.clone())
                .unwrap_or_default(),
            user_agent: parts
                .headers
                .get(USER_AGENT)
                .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
                .unwrap_or_default(),
            method: parts.method.to_string(),
            path: parts.uri.path().to_string(),
        }
    }
}

impl<S> FromRequestParts<S> for RequestFacts
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::collect(parts))
    }
}
