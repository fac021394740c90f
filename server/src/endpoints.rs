use serde::Serialize;

use crate::api;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub path: &'static str,
    pub method: &'static str,
    pub description: &'static str,
}

/// The routes this service describes about itself, in response order.
pub const ENDPOINTS: [Endpoint; 2] = [
    Endpoint {
        path: api::info::PATH,
        method: "GET",
        description: "Service information",
    },
    Endpoint {
        path: api::health::PATH,
        method: "GET",
        description: "Health check",
    },
];
