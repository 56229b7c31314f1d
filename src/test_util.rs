use std::{
    io,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request},
    Router,
};
use tempfile::TempDir;

use crate::{
    app::{env::Envy, router},
    storage::{file_system_storage::FileSystemStorage, storage::FileStorage},
    uploads::{models::uploaded_file::UploadedFile, repository::UploadedFileRepository},
    AppState,
};

pub const BOUNDARY: &str = "X-UPLOAD-API-BOUNDARY";

/// Keeps records in memory. With `failing` set every insert errors.
#[derive(Debug, Default)]
pub struct InMemoryUploadedFileRepository {
    records: Mutex<Vec<UploadedFile>>,
    failing: bool,
}

impl InMemoryUploadedFileRepository {
    pub fn failing() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            failing: true,
        }
    }

    pub fn records(&self) -> Vec<UploadedFile> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl UploadedFileRepository for InMemoryUploadedFileRepository {
    async fn create(&self, uploaded_file: &UploadedFile) -> Result<(), sqlx::Error> {
        if self.failing {
            return Err(sqlx::Error::PoolTimedOut);
        }

        self.records.lock().unwrap().push(uploaded_file.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<UploadedFile>, sqlx::Error> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|record| record.id == id)
            .cloned())
    }
}

/// Storage whose writes always fail.
#[derive(Debug, Default)]
pub struct FailingFileStorage;

#[async_trait]
impl FileStorage for FailingFileStorage {
    async fn save(&self, _name: &str, _content: &[u8]) -> io::Result<String> {
        Err(io::Error::new(io::ErrorKind::Other, "no space left on device"))
    }

    fn url(&self, name: &str) -> String {
        ["/media/", name].concat()
    }

    async fn delete(&self, _name: &str) -> io::Result<()> {
        Ok(())
    }
}

pub struct TestApp {
    pub router: Router,
    pub storage: FileSystemStorage,
    pub uploaded_files: Arc<InMemoryUploadedFileRepository>,
    _dir: TempDir,
}

pub fn test_envy() -> Envy {
    Envy {
        database_url: "postgres://localhost/uploads_test".to_string(),
        ..Default::default()
    }
}

pub fn create_test_app(envy: Envy, uploaded_files: InMemoryUploadedFileRepository) -> TestApp {
    build_test_app(envy, uploaded_files, None)
}

/// Like `create_test_app`, but the app writes through `storage` instead of the
/// temp-dir `FileSystemStorage` exposed on `TestApp`.
pub fn create_test_app_with_storage(
    envy: Envy,
    uploaded_files: InMemoryUploadedFileRepository,
    storage: Arc<dyn FileStorage>,
) -> TestApp {
    build_test_app(envy, uploaded_files, Some(storage))
}

fn build_test_app(
    envy: Envy,
    uploaded_files: InMemoryUploadedFileRepository,
    app_storage: Option<Arc<dyn FileStorage>>,
) -> TestApp {
    let dir = TempDir::new().unwrap();
    let media_root = dir.path().join("media");
    let storage = FileSystemStorage::new(&media_root, envy.media_url());
    let uploaded_files = Arc::new(uploaded_files);
    let app_storage =
        app_storage.unwrap_or_else(|| -> Arc<dyn FileStorage> { Arc::new(storage.clone()) });

    let envy = Envy {
        media_root: Some(media_root.to_string_lossy().to_string()),
        ..envy
    };

    let state = AppState {
        storage: app_storage,
        uploaded_files: uploaded_files.clone(),
        envy: Arc::new(envy),
    };

    TestApp {
        router: router::build(state),
        storage,
        uploaded_files,
        _dir: dir,
    }
}

pub struct Part<'a> {
    pub name: &'a str,
    pub file_name: Option<&'a str>,
    pub content_type: Option<&'a str>,
    pub data: &'a [u8],
}

impl<'a> Part<'a> {
    pub fn file(name: &'a str, file_name: &'a str, data: &'a [u8]) -> Self {
        Self {
            name,
            file_name: Some(file_name),
            content_type: Some("application/octet-stream"),
            data,
        }
    }

    pub fn file_with_type(
        name: &'a str,
        file_name: &'a str,
        content_type: &'a str,
        data: &'a [u8],
    ) -> Self {
        Self {
            content_type: Some(content_type),
            ..Self::file(name, file_name, data)
        }
    }

    pub fn text(name: &'a str, value: &'a str) -> Self {
        Self {
            name,
            file_name: None,
            content_type: None,
            data: value.as_bytes(),
        }
    }
}

pub fn multipart_body(parts: &[Part]) -> Vec<u8> {
    let mut body = Vec::new();

    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());

        let mut disposition = format!("Content-Disposition: form-data; name=\"{}\"", part.name);
        if let Some(file_name) = part.file_name {
            disposition.push_str(&format!("; filename=\"{}\"", file_name));
        }
        body.extend_from_slice(disposition.as_bytes());
        body.extend_from_slice(b"\r\n");

        if let Some(content_type) = part.content_type {
            body.extend_from_slice(format!("Content-Type: {}\r\n", content_type).as_bytes());
        }

        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(part.data);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn multipart_request(uri: &str, parts: &[Part]) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap()
}
