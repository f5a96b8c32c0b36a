use std::collections::BTreeMap;
use std::time::Instant;

use axum::{
    extract::{Query, Request, State},
    http::{HeaderMap, HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use rand::Rng;

use crate::state::AppState;
use crate::utils::access_log::{AccessLogEntry, ErrorDetail, TARGET};

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");
pub const RESPONSE_TIME_HEADER: HeaderName = HeaderName::from_static("x-response-time");
pub const POWERED_BY_HEADER: HeaderName = HeaderName::from_static("x-powered-by");

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Identifier assigned to every request, `req_<unix millis>_<9 base36 chars>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let suffix: String = (0..9)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        Self(format!("req_{}_{}", Utc::now().timestamp_millis(), suffix))
    }
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// Access logging for every request: assigns the request id, measures
/// latency, logs the outcome and stamps the tracking headers.
pub async fn request_log(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let started = Instant::now();
    let request_id = RequestId::generate();

    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let query = Query::<BTreeMap<String, String>>::try_from_uri(request.uri())
        .map(|Query(q)| q)
        .unwrap_or_default();
    let user_agent = header_str(request.headers(), "user-agent");
    let ip = header_str(request.headers(), "x-forwarded-for")
        .or_else(|| header_str(request.headers(), "x-real-ip"));

    tracing::debug!(target: TARGET, "Starting {} {} ({})", method, request.uri(), request_id.0);

    let mut response = next.run(request).await;

    let elapsed = started.elapsed().as_millis();
    let entry = AccessLogEntry {
        timestamp: Utc::now(),
        method,
        path,
        status: response.status().as_u16(),
        response_time_ms: elapsed,
        request_id: request_id.0.clone(),
        user_agent,
        ip,
        query,
        error: response.extensions().get::<ErrorDetail>().cloned(),
    };
    entry.emit(state.config.log_colors);

    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&request_id.0) {
        headers.insert(REQUEST_ID_HEADER, value);
    }
    if let Ok(value) = HeaderValue::from_str(&format!("{elapsed}ms")) {
        headers.insert(RESPONSE_TIME_HEADER, value);
    }
    headers.insert(POWERED_BY_HEADER, HeaderValue::from_static("axum"));

    response
}
