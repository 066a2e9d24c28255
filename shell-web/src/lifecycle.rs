//! App state bridge for browser tabs.

use async_trait::async_trait;
use capability_bridge::error::Result;
use capability_bridge::lifecycle::{AppState, AppStateBridge, AppStateStream};

/// A tab has no foreground/background lifecycle in this layer's sense;
/// visibility changes deliberately do not map onto it. The stream never
/// yields, keeping the lifecycle machine `Active` for the tab's life.
pub struct BrowserAppState;

struct PendingAppStateStream;

#[async_trait(?Send)]
impl AppStateStream for PendingAppStateStream {
    async fn next(&mut self) -> Option<AppState> {
        std::future::pending().await
    }
}

#[async_trait(?Send)]
impl AppStateBridge for BrowserAppState {
    async fn subscribe(&self) -> Result<Box<dyn AppStateStream>> {
        Ok(Box::new(PendingAppStateStream))
    }
}
