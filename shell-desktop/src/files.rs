//! File sink that downloads into the user's Downloads folder.

use std::path::PathBuf;

use async_trait::async_trait;
use capability_bridge::error::{BridgeError, Result};
use capability_bridge::files::FileSinkBridge;
use tokio::fs;
use tracing::{debug, warn};

/// Downloads a remote resource over HTTP and writes it under the
/// platform Downloads directory.
pub struct HttpFileSink {
    client: reqwest::Client,
    target_dir: PathBuf,
}

impl HttpFileSink {
    pub fn new() -> Self {
        Self::with_target_dir(default_download_dir())
    }

    pub fn with_target_dir(target_dir: PathBuf) -> Self {
        Self {
            client: reqwest::Client::new(),
            target_dir,
        }
    }
}

impl Default for HttpFileSink {
    fn default() -> Self {
        Self::new()
    }
}

fn default_download_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
        .unwrap_or_else(std::env::temp_dir)
}

/// The filename names a file inside the target directory; anything that
/// could traverse out of it is rejected.
fn validate_filename(filename: &str) -> Result<()> {
    if filename.is_empty()
        || filename.contains('/')
        || filename.contains('\\')
        || filename.contains("..")
    {
        return Err(BridgeError::OperationFailed(format!(
            "invalid filename: {filename:?}"
        )));
    }
    Ok(())
}

#[async_trait]
impl FileSinkBridge for HttpFileSink {
    async fn save_remote(&self, url: &str, filename: &str) -> Result<()> {
        validate_filename(filename)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| BridgeError::OperationFailed(format!("download failed: {}", e)))?
            .error_for_status()
            .map_err(|e| BridgeError::OperationFailed(format!("download failed: {}", e)))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| BridgeError::OperationFailed(format!("download failed: {}", e)))?;

        if !fs::try_exists(&self.target_dir).await? {
            warn!(path = ?self.target_dir, "download directory missing; creating");
            fs::create_dir_all(&self.target_dir).await?;
        }

        let path = self.target_dir.join(filename);
        fs::write(&path, &body).await?;

        debug!(path = ?path, bytes = body.len(), "saved remote file");
        Ok(())
    }
}
