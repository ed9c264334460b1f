//! # Request Stamping Middleware
//!
//! Gives every request an ID and timestamp for tracing. An incoming
//! `X-Request-ID` header is reused when present so IDs survive a proxy hop;
//! otherwise a UUID v4 is generated. The ID is echoed on the response.
//!
//! Handlers can read it via `Extension<RequestStamp>`.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Longest inbound request ID accepted as-is.
const MAX_INBOUND_ID_LEN: usize = 128;

/// Request metadata for tracing and debugging.
#[derive(Clone, Debug)]
pub struct RequestStamp {
    /// Request identifier
    pub id: String,
    /// Time the request reached the server
    pub timestamp: DateTime<Utc>,
}

impl RequestStamp {
    fn from_request(req: &Request) -> Self {
        let id = req
            .headers()
            .get(&REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty() && id.len() <= MAX_INBOUND_ID_LEN)
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        Self {
            id,
            timestamp: Utc::now(),
        }
    }
}

/// Request stamping middleware.
///
/// Adds a [`RequestStamp`] to the request extensions and `X-Request-ID` to the response.
pub async fn stamp_req(mut req: Request, next: Next) -> Response {
    let stamp = RequestStamp::from_request(&req);

    req.extensions_mut().insert(stamp.clone());

    let mut res = next.run(req).await;

    if let Ok(header_value) = HeaderValue::from_str(&stamp.id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, header_value);
    }

    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_stamp_reuses_inbound_id_and_records_arrival() {
        let before = Utc::now();
        let req = axum::http::Request::builder()
            .header("x-request-id", "edge-7f3a")
            .body(Body::empty())
            .unwrap();

        let stamp = RequestStamp::from_request(&req);

        assert_eq!(stamp.id, "edge-7f3a");
        assert!(stamp.timestamp >= before);
        assert!(stamp.timestamp <= Utc::now());
    }

    #[test]
    fn test_oversized_inbound_id_is_replaced() {
        let req = axum::http::Request::builder()
            .header("x-request-id", "a".repeat(MAX_INBOUND_ID_LEN + 1))
            .body(Body::empty())
            .unwrap();

        let stamp = RequestStamp::from_request(&req);

        assert!(Uuid::parse_str(&stamp.id).is_ok());
    }
}
