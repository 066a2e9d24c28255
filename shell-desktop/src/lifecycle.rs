//! App state bridge stub.

use async_trait::async_trait;
use capability_bridge::error::Result;
use capability_bridge::lifecycle::{AppState, AppStateBridge, AppStateStream};

/// Desktop windows are treated as permanently foregrounded; the stream
/// never yields, so the lifecycle machine stays `Active`.
pub struct DesktopAppState;

struct PendingAppStateStream;

#[async_trait]
impl AppStateStream for PendingAppStateStream {
    async fn next(&mut self) -> Option<AppState> {
        std::future::pending().await
    }
}

#[async_trait]
impl AppStateBridge for DesktopAppState {
    async fn subscribe(&self) -> Result<Box<dyn AppStateStream>> {
        Ok(Box::new(PendingAppStateStream))
    }
}
