use std::{
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use tokio::{fs, io::AsyncWriteExt};

use super::{
    storage::FileStorage,
    util::name::{get_alternative_name, get_valid_name},
};

/// Stores files flat inside `location` and serves them under `base_url`.
#[derive(Debug, Clone)]
pub struct FileSystemStorage {
    location: PathBuf,
    base_url: String,
}

impl FileSystemStorage {
    pub fn new(location: impl Into<PathBuf>, base_url: &str) -> Self {
        let base_url = match base_url.ends_with('/') {
            true => base_url.to_string(),
            false => [base_url, "/"].concat(),
        };

        Self {
            location: location.into(),
            base_url,
        }
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.location.join(name)
    }

    async fn write_new(&self, name: &str, content: &[u8]) -> io::Result<()> {
        let path = self.path(name);
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;

        let written = async {
            file.write_all(content).await?;
            file.sync_all().await
        }
        .await;

        if let Err(e) = written {
            drop(file);
            if let Err(remove_err) = fs::remove_file(&path).await {
                tracing::warn!(%remove_err, ?path, "failed to remove partial upload");
            }
            return Err(e);
        }

        Ok(())
    }
}

#[async_trait]
impl FileStorage for FileSystemStorage {
    async fn save(&self, name: &str, content: &[u8]) -> io::Result<String> {
        fs::create_dir_all(&self.location).await?;

        let valid_name = get_valid_name(name);
        let mut candidate = valid_name.clone();

        loop {
            match self.write_new(&candidate, content).await {
                Ok(_) => return Ok(candidate),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    tracing::debug!(%candidate, "name taken, trying an alternative");
                    candidate = get_alternative_name(&valid_name);
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn url(&self, name: &str) -> String {
        [&self.base_url, name.trim_start_matches('/')].concat()
    }

    async fn delete(&self, name: &str) -> io::Result<()> {
        match fs::remove_file(self.path(name)).await {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}
