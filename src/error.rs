use axum::{
    http::{header::ALLOW, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
};

use crate::envelope::Envelope;

/// Client errors a handler answers without touching state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Received call using forbidden method (only {allowed} is allowed): {received}")]
    MethodNotAllowed { allowed: Method, received: Method },

    #[error("You are asking the impossible!")]
    UnknownFlag,
}

impl AppError {
    /// Fails with `MethodNotAllowed` unless `received` is exactly `allowed`.
    ///
    /// Handlers call this before reading anything else from the request.
    /// `HEAD` does not count as `GET`.
    pub fn require_method(allowed: Method, received: &Method) -> Result<(), AppError> {
        if *received == allowed {
            Ok(())
        } else {
            Err(AppError::MethodNotAllowed {
                allowed,
                received: received.clone(),
            })
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::UnknownFlag => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut response = Envelope::new(self.status(), self.to_string()).into_response();

        if let AppError::MethodNotAllowed { allowed, .. } = &self {
            if let Ok(value) = HeaderValue::from_str(allowed.as_str()) {
                response.headers_mut().insert(ALLOW, value);
            }
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_not_allowed_message() {
        let err = AppError::MethodNotAllowed {
            allowed: Method::GET,
            received: Method::DELETE,
        };
        assert_eq!(
            err.to_string(),
            "Received call using forbidden method (only GET is allowed): DELETE"
        );
        assert_eq!(err.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn test_require_method() {
        assert!(AppError::require_method(Method::POST, &Method::POST).is_ok());
        assert_eq!(
            AppError::require_method(Method::GET, &Method::HEAD),
            Err(AppError::MethodNotAllowed {
                allowed: Method::GET,
                received: Method::HEAD,
            })
        );
    }

    #[test]
    fn test_unknown_flag() {
        assert_eq!(AppError::UnknownFlag.to_string(), "You are asking the impossible!");
        assert_eq!(AppError::UnknownFlag.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_method_not_allowed_sets_allow_header() {
        let response = AppError::MethodNotAllowed {
            allowed: Method::POST,
            received: Method::GET,
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers().get(ALLOW).unwrap(), "POST");
    }
}
