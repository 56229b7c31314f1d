use serde::Serialize;

pub const FILE_UPLOADED_MESSAGE: &str = "File uploaded successfully";

#[derive(Debug, Serialize)]
pub struct FileUploadedResponse {
    pub message: String,
    pub file_url: String,
}

impl FileUploadedResponse {
    pub fn new(file_url: String) -> Self {
        Self {
            message: FILE_UPLOADED_MESSAGE.to_string(),
            file_url,
        }
    }
}
