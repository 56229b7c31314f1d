use axum::extract::Multipart;

use crate::{
    app::{
        errors::DefaultApiError, models::api_error::ApiError,
        util::multipart::multipart::get_file_properties,
    },
    storage::storage::FileStorage,
};

use super::{
    errors::UploadsApiError,
    models::{file_uploaded_response::FileUploadedResponse, uploaded_file::UploadedFile},
    repository::UploadedFileRepository,
    UPLOAD_FIELD_NAME,
};

/// Stores the `file` part of `multipart` and records it.
///
/// The content is written first and the record second. When the record cannot
/// be created the stored content is removed again, so a failed upload leaves
/// neither behind.
pub async fn upload_file(
    multipart: Multipart,
    storage: &dyn FileStorage,
    uploaded_files: &dyn UploadedFileRepository,
) -> Result<FileUploadedResponse, ApiError> {
    let file_properties = match get_file_properties(multipart, UPLOAD_FIELD_NAME).await {
        Ok(Some(file_properties)) => file_properties,
        Ok(None) => return Err(UploadsApiError::NoFileUploaded.value()),
        Err(e) => {
            tracing::warn!(%e, "failed to read multipart body");
            return Err(UploadsApiError::NoFileUploaded.value());
        }
    };

    let stored_name = match storage
        .save(&file_properties.file_name, &file_properties.data)
        .await
    {
        Ok(stored_name) => stored_name,
        Err(e) => {
            tracing::error!(%e, file_name = %file_properties.file_name, "failed to store upload");
            return Err(DefaultApiError::InternalServerError.value());
        }
    };

    let uploaded_file = UploadedFile::from_properties(&stored_name, &file_properties);

    if let Err(e) = uploaded_files.create(&uploaded_file).await {
        tracing::error!(%e, %stored_name, "failed to record upload");

        if let Err(e) = storage.delete(&stored_name).await {
            tracing::error!(%e, %stored_name, "failed to remove unrecorded upload");
        }

        return Err(DefaultApiError::InternalServerError.value());
    }

    tracing::info!(
        id = %uploaded_file.id,
        %stored_name,
        size = uploaded_file.size,
        "file uploaded"
    );

    Ok(FileUploadedResponse::new(storage.url(&stored_name)))
}

pub async fn get_uploaded_file_by_id(
    id: &str,
    uploaded_files: &dyn UploadedFileRepository,
) -> Result<UploadedFile, ApiError> {
    match uploaded_files.find_by_id(id).await {
        Ok(uploaded_file) => match uploaded_file {
            Some(uploaded_file) => Ok(uploaded_file),
            None => Err(UploadsApiError::UploadedFileNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}
