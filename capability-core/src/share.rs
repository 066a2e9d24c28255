//! Share sheet adapter.
//!
//! `can_share` is a side-effect-free availability probe; `share` presents
//! the sheet and treats user dismissal as success. A failing native plugin
//! falls back to the web share surface when the browser offers one.

use std::sync::Arc;

use capability_bridge::share::{ShareBridge, ShareRequest};
use tracing::{debug, warn};

use crate::platform::PlatformContext;

pub struct ShareSheet {
    ctx: PlatformContext,
    native: Option<Arc<dyn ShareBridge>>,
    web: Option<Arc<dyn ShareBridge>>,
}

impl ShareSheet {
    pub fn new(
        ctx: PlatformContext,
        native: Option<Arc<dyn ShareBridge>>,
        web: Option<Arc<dyn ShareBridge>>,
    ) -> Self {
        Self { ctx, native, web }
    }

    /// Whether any share surface exists for this platform/browser
    /// combination. Safe to call from render paths.
    pub fn can_share(&self) -> bool {
        if self.ctx.is_native() {
            if self.native.as_ref().is_some_and(|bridge| bridge.is_supported()) {
                return true;
            }
        }
        self.web.as_ref().is_some_and(|bridge| bridge.is_supported())
    }

    /// Present the share sheet. Returns `true` when a sheet was presented
    /// (shared or dismissed), `false` only when no mechanism worked.
    pub async fn share(&self, request: ShareRequest) -> bool {
        if self.ctx.is_native() {
            if let Some(native) = &self.native {
                match native.share(&request).await {
                    Ok(outcome) => {
                        debug!(outcome = ?outcome, "native share completed");
                        return true;
                    }
                    Err(err) => {
                        warn!(error = %err, "native share failed; trying web fallback");
                    }
                }
            }
        }

        let Some(web) = &self.web else {
            debug!("no share surface available");
            return false;
        };
        if !web.is_supported() {
            debug!("web share surface not supported by this browser");
            return false;
        }

        match web.share(&request).await {
            Ok(outcome) => {
                debug!(outcome = ?outcome, "web share completed");
                true
            }
            Err(err) => {
                warn!(error = %err, "web share failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capability_bridge::error::{BridgeError, Result};
    use capability_bridge::share::ShareOutcome;
    use capability_bridge::Platform;

    struct FakeShare {
        supported: bool,
        outcome: Result<ShareOutcome>,
    }

    impl FakeShare {
        fn presenting(outcome: ShareOutcome) -> Self {
            Self {
                supported: true,
                outcome: Ok(outcome),
            }
        }

        fn failing() -> Self {
            Self {
                supported: true,
                outcome: Err(BridgeError::OperationFailed("sheet refused".into())),
            }
        }

        fn unsupported() -> Self {
            Self {
                supported: false,
                outcome: Err(BridgeError::NotAvailable("navigator.share".into())),
            }
        }
    }

    #[async_trait::async_trait]
    impl ShareBridge for FakeShare {
        fn is_supported(&self) -> bool {
            self.supported
        }

        async fn share(&self, _request: &ShareRequest) -> Result<ShareOutcome> {
            match &self.outcome {
                Ok(outcome) => Ok(*outcome),
                Err(BridgeError::NotAvailable(what)) => {
                    Err(BridgeError::NotAvailable(what.clone()))
                }
                Err(BridgeError::OperationFailed(what)) => {
                    Err(BridgeError::OperationFailed(what.clone()))
                }
                Err(err) => Err(BridgeError::OperationFailed(err.to_string())),
            }
        }
    }

    #[tokio::test]
    async fn unavailable_everywhere() {
        let sheet = ShareSheet::new(PlatformContext::new(Platform::Web), None, None);

        assert!(!sheet.can_share());
        assert!(!sheet.share(ShareRequest::default().with_title("x")).await);
    }

    #[tokio::test]
    async fn browser_without_navigator_share() {
        let sheet = ShareSheet::new(
            PlatformContext::new(Platform::Web),
            None,
            Some(Arc::new(FakeShare::unsupported())),
        );

        assert!(!sheet.can_share());
        assert!(!sheet.share(ShareRequest::default().with_title("x")).await);
    }

    #[tokio::test]
    async fn dismissal_counts_as_success() {
        let sheet = ShareSheet::new(
            PlatformContext::new(Platform::Android),
            Some(Arc::new(FakeShare::presenting(ShareOutcome::Dismissed))),
            None,
        );

        assert!(sheet.can_share());
        assert!(sheet.share(ShareRequest::default().with_text("hi")).await);
    }

    #[tokio::test]
    async fn native_failure_falls_back_to_web() {
        let sheet = ShareSheet::new(
            PlatformContext::new(Platform::Ios),
            Some(Arc::new(FakeShare::failing())),
            Some(Arc::new(FakeShare::presenting(ShareOutcome::Shared))),
        );

        assert!(sheet.share(ShareRequest::default().with_url("https://a.example")).await);
    }
}
