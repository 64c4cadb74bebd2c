//! Client identity for rate limiting.

use actix_web::dev::ServiceRequest;

/// Resolve the client key for a request.
///
/// Order of trust mirrors the upstream proxy setup: explicit `client-ip`
/// header, then the first `x-forwarded-for` hop, then the peer address.
/// Requests with none of these share a single "unknown" bucket.
pub fn client_ip(req: &ServiceRequest) -> String {
    if let Some(ip) = header_value(req, "client-ip") {
        return ip;
    }
    if let Some(forwarded) = header_value(req, "x-forwarded-for") {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }
    req.connection_info()
        .peer_addr()
        .map(str::to_string)
        .unwrap_or_else(|| "unknown".to_string())
}

fn header_value(req: &ServiceRequest, name: &str) -> Option<String> {
    let value = req.headers().get(name)?.to_str().ok()?.trim();
    (!value.is_empty()).then(|| value.to_string())
}
