use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Failure modes of a single lookup. Each is terminal for its request;
/// nothing is retried.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Invalid hex values for LAC or CI")]
    InvalidHex,

    #[error("Error contacting geolocation provider: {0}")]
    Unreachable(String),

    #[error("Geolocation provider error (status {status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("No 'location' field in geolocation provider response")]
    Protocol,
}

#[derive(Serialize)]
struct Detail {
    detail: String,
}

impl ResponseError for LookupError {
    fn status_code(&self) -> StatusCode {
        match self {
            LookupError::InvalidHex => StatusCode::BAD_REQUEST,
            LookupError::Unreachable(_) | LookupError::Upstream { .. } | LookupError::Protocol => {
                StatusCode::BAD_GATEWAY
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(Detail {
            detail: self.to_string(),
        })
    }
}
