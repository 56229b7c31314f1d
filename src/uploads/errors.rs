use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum UploadsApiError {
    NoFileUploaded,
    UploadedFileNotFound,
}

impl UploadsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::NoFileUploaded => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "No file uploaded".to_string(),
            },
            Self::UploadedFileNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Uploaded file not found.".to_string(),
            },
        }
    }
}
