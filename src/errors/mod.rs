use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use std::fmt;

use crate::constants::{
    CODE_INTERNAL_ERROR, CODE_INVALID_JSON, CODE_NOT_FOUND, CODE_VALIDATION_FAILED,
};
use crate::models::ErrorResponse;
use crate::pagination::PaginationError;

#[derive(Debug)]
pub enum ApiError {
    InvalidJson(String),
    NotFound(String),
    InternalServerError(String),
    ValidationError(Vec<String>),
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidJson(_) => CODE_INVALID_JSON,
            ApiError::NotFound(_) => CODE_NOT_FOUND,
            ApiError::InternalServerError(_) => CODE_INTERNAL_ERROR,
            ApiError::ValidationError(_) => CODE_VALIDATION_FAILED,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidJson(message) => write!(f, "Invalid JSON: {}", message),
            ApiError::NotFound(message) => write!(f, "Not Found: {}", message),
            ApiError::InternalServerError(message) => {
                write!(f, "Internal Server Error: {}", message)
            }
            ApiError::ValidationError(errors) => write!(f, "Validation Error: {:?}", errors),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson(_) | ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::ValidationError(errors) => ErrorResponse {
                success: false,
                code: self.code().to_string(),
                message: "Validation failed".to_string(),
                errors: Some(errors.clone()),
            },
            ApiError::InvalidJson(message)
            | ApiError::NotFound(message)
            | ApiError::InternalServerError(message) => ErrorResponse {
                success: false,
                code: self.code().to_string(),
                message: message.clone(),
                errors: None,
            },
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<PaginationError> for ApiError {
    fn from(err: PaginationError) -> Self {
        match err {
            PaginationError::Decode(message) => ApiError::InvalidJson(message),
            PaginationError::Validation(message) => ApiError::ValidationError(vec![message]),
            PaginationError::Encode(message) => {
                error!("Failed to encode synchronized query: {}", message);
                ApiError::InternalServerError(message)
            }
        }
    }
}
