//! Client address extraction for click analytics.

use axum::http::HeaderMap;
use std::net::SocketAddr;

/// Determines the requester's address.
///
/// When `behind_proxy` is set, the first entry of `X-Forwarded-For` wins, then
/// `X-Real-IP`, then the socket peer. Otherwise only the socket peer is used,
/// since forwarding headers are client-controlled.
pub fn client_ip(headers: &HeaderMap, peer: SocketAddr, behind_proxy: bool) -> String {
    if behind_proxy {
        let forwarded = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty());

        if let Some(ip) = forwarded {
            return ip.to_string();
        }

        let real_ip = headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty());

        if let Some(ip) = real_ip {
            return ip.to_string();
        }
    }

    peer.ip().to_string()
}
