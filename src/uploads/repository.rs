use async_trait::async_trait;
use sqlx::PgPool;

use super::models::uploaded_file::UploadedFile;

#[async_trait]
pub trait UploadedFileRepository: Send + Sync {
    async fn create(&self, uploaded_file: &UploadedFile) -> Result<(), sqlx::Error>;

    async fn find_by_id(&self, id: &str) -> Result<Option<UploadedFile>, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct PgUploadedFileRepository {
    pool: PgPool,
}

impl PgUploadedFileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UploadedFileRepository for PgUploadedFileRepository {
    async fn create(&self, uploaded_file: &UploadedFile) -> Result<(), sqlx::Error> {
        sqlx::query(
            "
            INSERT INTO uploaded_files (
                id, file, original_name, mime_type, size, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(&uploaded_file.id)
        .bind(&uploaded_file.file)
        .bind(&uploaded_file.original_name)
        .bind(&uploaded_file.mime_type)
        .bind(uploaded_file.size)
        .bind(uploaded_file.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<UploadedFile>, sqlx::Error> {
        sqlx::query_as::<_, UploadedFile>(
            "
            SELECT * FROM uploaded_files WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }
}
