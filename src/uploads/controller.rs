use axum::{
    extract::{multipart::MultipartRejection, Multipart, Path, State},
    http::Method,
    Json,
};

use crate::{app::models::api_error::ApiError, AppState};

use super::{
    errors::UploadsApiError,
    models::{file_uploaded_response::FileUploadedResponse, uploaded_file::UploadedFile},
    service,
};

pub async fn upload_file(
    State(state): State<AppState>,
    method: Method,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<FileUploadedResponse>, ApiError> {
    if method != Method::POST {
        return Err(UploadsApiError::NoFileUploaded.value());
    }

    let multipart = match multipart {
        Ok(multipart) => multipart,
        Err(e) => {
            tracing::debug!(%e, "request is not multipart");
            return Err(UploadsApiError::NoFileUploaded.value());
        }
    };

    match service::upload_file(
        multipart,
        state.storage.as_ref(),
        state.uploaded_files.as_ref(),
    )
    .await
    {
        Ok(response) => Ok(Json(response)),
        Err(e) => Err(e),
    }
}

pub async fn get_uploaded_file_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UploadedFile>, ApiError> {
    match service::get_uploaded_file_by_id(&id, state.uploaded_files.as_ref()).await {
        Ok(uploaded_file) => Ok(Json(uploaded_file)),
        Err(e) => Err(e),
    }
}
