use actix_web::http::StatusCode;
use actix_web::{error, HttpRequest, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};

use crate::domain::order::OrderError;

// ============================================================================
// HTTP error mapping
// ============================================================================

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub error: String,
    pub message: String,
}

impl ResponseError for OrderError {
    fn status_code(&self) -> StatusCode {
        match self {
            OrderError::AlreadyExists(_) => StatusCode::CONFLICT,
            OrderError::NotFound(_) => StatusCode::NOT_FOUND,
            OrderError::InvalidCustomerId(_)
            | OrderError::InvalidQuantity(_)
            | OrderError::QuantityExceedsCapacity { .. }
            | OrderError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message: self.to_string(),
        })
    }
}

pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    OrderError::MalformedRequest(err.to_string()).into()
}

pub fn path_error_handler(err: error::PathError, _req: &HttpRequest) -> actix_web::Error {
    OrderError::MalformedRequest(err.to_string()).into()
}

pub fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    OrderError::MalformedRequest(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::CustomerId;

    #[test]
    fn test_status_codes() {
        assert_eq!(OrderError::AlreadyExists(CustomerId(1)).status_code(), StatusCode::CONFLICT);
        assert_eq!(OrderError::NotFound(CustomerId(1)).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(OrderError::InvalidCustomerId(0).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            OrderError::QuantityExceedsCapacity { quantity: 60, capacity: 50 }.status_code(),
            StatusCode::BAD_REQUEST
        );
    }
}
