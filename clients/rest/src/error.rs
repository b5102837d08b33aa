use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use store::store::person_store::StoreError;
use thiserror::Error;

/// Every failure the API can report. Store failures are classified here, once,
/// by error kind rather than in each handler.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Name and number are required")]
    MissingFields,

    #[error("Person not found")]
    PersonNotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFields => StatusCode::BAD_REQUEST,
            ApiError::PersonNotFound => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::MalformedId(_)) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::Disconnected) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        log::error!("{}", self);

        let message = match self {
            ApiError::Store(StoreError::MalformedId(_)) => "malformatted id".to_string(),
            ApiError::Store(StoreError::Disconnected) => "internal server error".to_string(),
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(json!({ "error": message }))
    }
}
