//! Uniform JSON response envelope.
//!
//! Every endpoint answers with `{"Success": bool, "Status": int, "Message": ...}`.
//! `Success` is derived from the status code and can not be set on its own.

use std::fmt;

use axum::{
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Serialize, Serializer};

/// Returns true for any 2xx status.
pub fn is_success(status: u16) -> bool {
    status / 100 == 2
}

/// Response body shared by all routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Envelope<M> {
    success: bool,
    #[serde(serialize_with = "serialize_status")]
    status: StatusCode,
    message: M,
}

fn serialize_status<S: Serializer>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u16(status.as_u16())
}

impl<M> Envelope<M> {
    pub fn new(status: StatusCode, message: M) -> Self {
        Self {
            success: is_success(status.as_u16()),
            status,
            message,
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &M {
        &self.message
    }
}

impl<M> IntoResponse for Envelope<M>
where
    M: Serialize + fmt::Debug,
{
    fn into_response(self) -> Response {
        tracing::info!(
            status = self.status.as_u16(),
            message = ?self.message,
            "Sending response"
        );

        // Nothing is written on failure, not even the intended status: the client
        // sees an implicit 200 with no headers and no payload.
        let body = match serde_json::to_vec(&self) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(error = %e, status = self.status.as_u16(), "Failed to serialize response");
                return StatusCode::OK.into_response();
            }
        };

        (self.status, [(CONTENT_TYPE, "application/json")], body).into_response()
    }
}
