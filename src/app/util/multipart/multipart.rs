use axum::extract::{multipart::MultipartError, Multipart};
use mime::Mime;
use uuid::Uuid;

use super::models::file_properties::FileProperties;

/// Reads the first part named `field_name` that carries a non-empty filename.
///
/// Parts without a filename are form values, not files, and are skipped along
/// with parts under any other name.
pub async fn get_file_properties(
    mut multipart: Multipart,
    field_name: &str,
) -> Result<Option<FileProperties>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(field_name) {
            continue;
        }

        let file_name = match field.file_name() {
            Some(file_name) if !file_name.is_empty() => file_name.to_string(),
            _ => continue,
        };
        let mime_type = field
            .content_type()
            .and_then(|content_type| content_type.parse::<Mime>().ok())
            .unwrap_or(mime::APPLICATION_OCTET_STREAM);
        let data = field.bytes().await?;

        return Ok(Some(FileProperties {
            id: Uuid::new_v4().to_string(),
            file_name,
            mime_type,
            data,
        }));
    }

    Ok(None)
}
