use crate::error::{Result, SiftError};
use reqwest::Client;
use std::future::Future;
use std::io::ErrorKind;
use std::time::Duration;
use tracing::debug;

/// Fetch-by-identifier capability. Identifiers are absolute strings: a
/// local path or an absolute URL.
pub trait DocumentStore {
    fn read(&self, identifier: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Reads documents from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl DocumentStore for FsStore {
    async fn read(&self, identifier: &str) -> Result<String> {
        debug!("Reading {}", identifier);
        match tokio::fs::read_to_string(identifier).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(SiftError::NotFound(identifier.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Retrieves documents over HTTP.
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: Client,
}

impl HttpStore {
    pub fn new() -> Self {
        Self::with_timeout(10)
    }

    pub fn with_timeout(timeout_secs: u64) -> Self {
        let client = Client::builder()
            .user_agent("Sift/0.2 (https://github.com/trapdoorsec/sift)")
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs / 2))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

impl Default for HttpStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for HttpStore {
    async fn read(&self, identifier: &str) -> Result<String> {
        debug!("Fetching {}", identifier);
        let response = self.client.get(identifier).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(SiftError::NotFound(identifier.to_string()));
        }
        let response = response.error_for_status()?;
        Ok(response.text().await?)
    }
}

/// Backend selected from the shape of the seed identifier.
pub enum DocumentSource {
    Filesystem(FsStore),
    Http(HttpStore),
}

impl DocumentSource {
    /// Seeds carrying a network scheme get the HTTP backend, everything
    /// else is treated as a local path.
    pub fn for_seed(seed: &str) -> Self {
        if seed.starts_with("http://") || seed.starts_with("https://") {
            DocumentSource::Http(HttpStore::new())
        } else {
            DocumentSource::Filesystem(FsStore)
        }
    }
}

impl DocumentStore for DocumentSource {
    async fn read(&self, identifier: &str) -> Result<String> {
        match self {
            DocumentSource::Filesystem(store) => store.read(identifier).await,
            DocumentSource::Http(store) => store.read(identifier).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_seed_http() {
        assert!(matches!(
            DocumentSource::for_seed("http://example.com/index.html"),
            DocumentSource::Http(_)
        ));
        assert!(matches!(
            DocumentSource::for_seed("https://example.com/index.html"),
            DocumentSource::Http(_)
        ));
    }

    #[test]
    fn test_for_seed_path() {
        assert!(matches!(
            DocumentSource::for_seed("/var/www/index.html"),
            DocumentSource::Filesystem(_)
        ));
        assert!(matches!(
            DocumentSource::for_seed("site/index.html"),
            DocumentSource::Filesystem(_)
        ));
    }

    #[tokio::test]
    async fn test_fs_store_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        std::fs::write(&path, "<html><body>hello</body></html>").unwrap();

        let store = FsStore;
        let text = store.read(path.to_str().unwrap()).await.unwrap();
        assert!(text.contains("hello"));
    }

    #[tokio::test]
    async fn test_fs_store_missing_file_is_not_found() {
        let store = FsStore;
        let err = store.read("/nonexistent/definitely/missing.html").await;
        assert!(matches!(err, Err(SiftError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_fs_store_unreadable_path_is_io_error() {
        // A directory is readable as a path but not as a document.
        let dir = tempfile::tempdir().unwrap();

        let store = FsStore;
        let err = store.read(dir.path().to_str().unwrap()).await;
        assert!(matches!(err, Err(SiftError::IoError(_))));
    }
}
