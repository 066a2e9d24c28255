//! File save adapter.
//!
//! Downloads a remote resource where the user can find it, reporting the
//! outcome through the notice bus. The busy flag is owned by the
//! in-flight save and reset by a drop guard, so it is guaranteed to clear
//! on success, failure, or panic alike.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use capability_bridge::files::FileSinkBridge;
use tracing::{debug, warn};

use crate::notices::NoticeBus;
use crate::platform::PlatformContext;

pub struct FileSaver {
    ctx: PlatformContext,
    native: Option<Arc<dyn FileSinkBridge>>,
    web: Option<Arc<dyn FileSinkBridge>>,
    notices: Option<NoticeBus>,
    busy: Arc<AtomicBool>,
}

struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl FileSaver {
    pub fn new(
        ctx: PlatformContext,
        native: Option<Arc<dyn FileSinkBridge>>,
        web: Option<Arc<dyn FileSinkBridge>>,
    ) -> Self {
        Self {
            ctx,
            native,
            web,
            notices: None,
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_notices(mut self, notices: NoticeBus) -> Self {
        self.notices = Some(notices);
        self
    }

    /// Whether a save is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Save `url` under `filename`. Returns whether the save succeeded;
    /// a second call while one is in flight is refused with `false`.
    pub async fn save(&self, url: &str, filename: &str) -> bool {
        if self.busy.swap(true, Ordering::SeqCst) {
            debug!(filename = filename, "save already in progress; refusing");
            return false;
        }
        let _busy = BusyGuard(Arc::clone(&self.busy));

        let saved = self.dispatch(url, filename).await;

        if let Some(notices) = &self.notices {
            if saved {
                notices.info(format!("Saved {filename}"));
            } else {
                notices.error(format!("Could not save {filename}"));
            }
        }
        saved
    }

    async fn dispatch(&self, url: &str, filename: &str) -> bool {
        let sink = if self.ctx.is_native() {
            self.native.as_ref()
        } else {
            self.web.as_ref()
        };
        let Some(sink) = sink else {
            warn!(filename = filename, "no file sink available on this platform");
            return false;
        };

        match sink.save_remote(url, filename).await {
            Ok(()) => {
                debug!(url = url, filename = filename, "file saved");
                true
            }
            Err(err) => {
                warn!(url = url, filename = filename, error = %err, "file save failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notices::NoticeLevel;
    use capability_bridge::error::{BridgeError, Result};
    use capability_bridge::Platform;

    struct FakeSink {
        fail: bool,
    }

    #[async_trait::async_trait]
    impl FileSinkBridge for FakeSink {
        async fn save_remote(&self, _url: &str, _filename: &str) -> Result<()> {
            if self.fail {
                Err(BridgeError::OperationFailed("fetch rejected".into()))
            } else {
                Ok(())
            }
        }
    }

    fn saver(fail: bool) -> FileSaver {
        FileSaver::new(
            PlatformContext::new(Platform::Web),
            None,
            Some(Arc::new(FakeSink { fail })),
        )
    }

    #[tokio::test]
    async fn busy_flag_clears_after_success() {
        let saver = saver(false);

        assert!(!saver.is_busy());
        assert!(saver.save("https://cdn.example/report.pdf", "report.pdf").await);
        assert!(!saver.is_busy());
    }

    #[tokio::test]
    async fn busy_flag_clears_after_forced_failure() {
        let saver = saver(true);

        assert!(!saver.save("https://cdn.example/report.pdf", "report.pdf").await);
        assert!(!saver.is_busy());
    }

    #[tokio::test]
    async fn notices_report_the_outcome() {
        let bus = NoticeBus::default();
        let mut notices = bus.subscribe();
        let saver = saver(true).with_notices(bus);

        saver.save("https://cdn.example/a.png", "a.png").await;

        let notice = notices.recv().await.unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.message.contains("a.png"));
    }

    #[tokio::test]
    async fn missing_sink_is_a_clean_failure() {
        let saver = FileSaver::new(PlatformContext::new(Platform::Ios), None, None);

        assert!(!saver.save("https://cdn.example/a.png", "a.png").await);
        assert!(!saver.is_busy());
    }
}
