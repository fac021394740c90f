use std::{fmt::Display, net::SocketAddr};

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{Request, Response},
    middleware::Next,
};

/// Host portion of the TCP peer address as seen by the listener.
/// Forwarding headers are deliberately not consulted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientIp(pub String);

impl Display for ClientIp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

pub async fn mw_client_ip(mut request: Request<Body>, next: Next) -> Response<Body> {
    if let Some(ConnectInfo(remote_addr)) = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .copied()
    {
        let ip = client_ip(&remote_addr.to_string());
        request.extensions_mut().insert(ClientIp(ip));
    }
    next.run(request).await
}

/// `host` when `remote_addr` splits as `host:port` (or `[host]:port`),
/// otherwise `remote_addr` unchanged. The port text is not validated.
pub fn client_ip(remote_addr: &str) -> String {
    split_host(remote_addr).unwrap_or(remote_addr).to_string()
}

fn split_host(remote_addr: &str) -> Option<&str> {
    let (host, port) = remote_addr.rsplit_once(':')?;
    if port.contains(['[', ']']) {
        return None;
    }

    match host.strip_prefix('[') {
        Some(bracketed) => bracketed
            .strip_suffix(']')
            .filter(|inner| !inner.contains(['[', ']'])),
        // too many colons: a bare ipv6 address, not host:port
        None if host.contains([':', '[', ']']) => None,
        None => Some(host),
    }
}
