use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::app::util::{multipart::models::file_properties::FileProperties, time};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UploadedFile {
    pub id: String,
    /// Name the content was stored under.
    pub file: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: i64,
    pub created_at: i64,
}

impl UploadedFile {
    pub fn from_properties(stored_name: &str, file_properties: &FileProperties) -> UploadedFile {
        UploadedFile {
            id: file_properties.id.to_string(),
            file: stored_name.to_string(),
            original_name: file_properties.file_name.to_string(),
            mime_type: file_properties.mime_type.to_string(),
            size: file_properties.data.len() as i64,
            created_at: time::current_time_in_secs() as i64,
        }
    }
}
