use std::fmt::Display;

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::utils::access_log::ErrorDetail;

/// Uniform `{success, data | error | message}` response body.
///
/// Handler failures travel as `success: false` with a static message and
/// HTTP 200; the underlying cause is kept out of the body and handed to the
/// access log through [`with_detail`](Self::with_detail).
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip)]
    detail: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
            detail: None,
        }
    }

    pub fn fail(error: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.to_string()),
            message: None,
            detail: None,
        }
    }

    /// `success: false` that still carries a payload (degraded health).
    pub fn degraded(data: T) -> Self {
        Self {
            success: false,
            ..Self::ok(data)
        }
    }

    pub fn with_detail(mut self, cause: impl Display) -> Self {
        self.detail = Some(cause.to_string());
        self
    }
}

impl Envelope<()> {
    pub fn message(message: &str) -> Self {
        Self {
            success: true,
            data: None,
            error: None,
            message: Some(message.to_string()),
            detail: None,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(mut self) -> Response {
        let detail = self.detail.take();
        let mut response = Json(self).into_response();
        if let Some(message) = detail {
            response.extensions_mut().insert(ErrorDetail::new(message));
        }
        response
    }
}
