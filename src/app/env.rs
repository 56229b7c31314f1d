use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MEDIA_ROOT: &str = "media";
pub const DEFAULT_MEDIA_URL: &str = "/media/";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub port: Option<u16>,

    pub database_url: String,

    pub media_root: Option<String>,
    pub media_url: Option<String>,

    pub allowed_origins: Option<Vec<String>>,
    pub max_upload_bytes: Option<usize>,
}

fn default_app_env() -> String {
    "development".to_string()
}

impl Envy {
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn media_root(&self) -> &str {
        self.media_root.as_deref().unwrap_or(DEFAULT_MEDIA_ROOT)
    }

    pub fn media_url(&self) -> &str {
        self.media_url.as_deref().unwrap_or(DEFAULT_MEDIA_URL)
    }

    /// Path under which stored files are served, or `None` when `MEDIA_URL`
    /// points somewhere else (a CDN, another host).
    pub fn media_mount_path(&self) -> Option<String> {
        let media_url = self.media_url();
        if !media_url.starts_with('/') {
            return None;
        }

        let path = media_url.trim_end_matches('/');
        if path.is_empty() {
            return None;
        }

        Some(path.to_string())
    }

    pub fn allowed_origins(&self) -> &[String] {
        match &self.allowed_origins {
            Some(origins) => origins.as_slice(),
            None => &[],
        }
    }
}
