use actix_web::http::StatusCode;
use actix_web::{error, HttpResponse};
use derive_more::{Display, Error};
use serde_json::json;

use crate::server::model::order::ValidationError;

#[derive(Debug, Display, Error)]
pub(crate) enum CustomError {
    #[display("personId and order are required")]
    MissingField,
    #[display("{_0}")]
    Validation(ValidationError),
    #[display("resource not found")]
    ResourceNotFound,
    #[display("storage backend unavailable")]
    StorageError,
}

impl From<ValidationError> for CustomError {
    fn from(e: ValidationError) -> Self {
        CustomError::Validation(e)
    }
}

impl error::ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match *self {
            CustomError::MissingField | CustomError::Validation(_) => StatusCode::BAD_REQUEST,
            CustomError::ResourceNotFound => StatusCode::NOT_FOUND,
            CustomError::StorageError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
