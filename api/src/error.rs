use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use sideline_http_errors::ErrorResponseData;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Database Error: {0}")]
    DbErr(#[from] diesel::result::Error),

    #[error("Database Pool Error: {0}")]
    DbPool(#[from] deadpool_diesel::PoolError),

    #[error("Unknown {0}")]
    ObjectNotFound(&'static str),

    #[error("No assignment exists for that team and athlete")]
    AssignmentNotFound,

    #[error("Invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("Invalid ID: {0}")]
    InvalidId(#[from] sideline_db::object_id::ObjectIdError),

    #[error("Storage error: {0}")]
    StorageError(#[from] sideline_storage::Error),

    #[error(transparent)]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("Upload is missing the {0} field")]
    MissingUploadField(&'static str),
}

impl Error {
    fn error_kind(&self) -> &'static str {
        match self {
            Error::DbErr(diesel::result::Error::NotFound) => "not_found",
            Error::DbErr(_) => "db",
            Error::DbPool(_) => "db_pool",
            Error::ObjectNotFound(_) => "not_found",
            Error::AssignmentNotFound => "not_found",
            Error::Validation { .. } => "validation",
            Error::InvalidId(_) => "bad_request",
            Error::StorageError(_) => "storage",
            Error::Multipart(_) => "bad_request",
            Error::MissingUploadField(_) => "bad_request",
        }
    }

    pub fn response_tuple(&self) -> (StatusCode, ErrorResponseData) {
        let status = match self {
            Error::DbErr(diesel::result::Error::NotFound) => StatusCode::NOT_FOUND,
            Error::ObjectNotFound(_) => StatusCode::NOT_FOUND,
            Error::AssignmentNotFound => StatusCode::NOT_FOUND,
            Error::Validation { .. } => StatusCode::BAD_REQUEST,
            Error::InvalidId(_) => StatusCode::BAD_REQUEST,
            Error::Multipart(_) => StatusCode::BAD_REQUEST,
            Error::MissingUploadField(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            ErrorResponseData::new(self.error_kind(), self.to_string()),
        )
    }
}

impl From<deadpool_diesel::InteractError> for Error {
    fn from(e: deadpool_diesel::InteractError) -> Self {
        std::panic::panic_any(e)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (code, json) = self.response_tuple();
        (code, Json(json)).into_response()
    }
}
