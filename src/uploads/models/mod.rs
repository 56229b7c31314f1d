pub mod file_uploaded_response;
pub mod uploaded_file;
