//! Share bridge stub.

use async_trait::async_trait;
use capability_bridge::error::{BridgeError, Result};
use capability_bridge::share::{ShareBridge, ShareOutcome, ShareRequest};

/// Desktop has no share sheet. `is_supported` is `false`, so the adapter
/// hides share affordances and `share` is never reached in practice.
pub struct DesktopShare;

#[async_trait]
impl ShareBridge for DesktopShare {
    fn is_supported(&self) -> bool {
        false
    }

    async fn share(&self, _request: &ShareRequest) -> Result<ShareOutcome> {
        Err(BridgeError::NotAvailable(
            "desktop shell has no share sheet".to_string(),
        ))
    }
}
