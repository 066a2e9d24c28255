//! Process-wide platform detection.
//!
//! The platform is reported once by the host shell at startup and treated
//! as immutable for the life of the process. Every adapter consults this
//! module instead of probing the environment itself, so there is exactly
//! one answer to "are we native?" per process.

use std::sync::OnceLock;

use capability_bridge::Platform;
use tracing::warn;

/// Immutable snapshot of the execution environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformContext {
    platform: Platform,
}

impl PlatformContext {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    pub fn platform(self) -> Platform {
        self.platform
    }

    pub fn is_native(self) -> bool {
        self.platform.is_native()
    }
}

static CONTEXT: OnceLock<PlatformContext> = OnceLock::new();

/// Record the platform the host shell reports. First caller wins; later
/// calls are ignored with a warning since nothing may mutate the context
/// after initialization.
pub fn init_platform(platform: Platform) -> PlatformContext {
    let ctx = *CONTEXT.get_or_init(|| PlatformContext::new(platform));
    if ctx.platform() != platform {
        warn!(
            requested = platform.as_str(),
            active = ctx.platform().as_str(),
            "platform already initialized; keeping the first value"
        );
    }
    ctx
}

/// The current platform context. Defaults to [`Platform::Web`] when no
/// shell registered anything: a detection failure must read as "browser",
/// never as an error.
pub fn current_platform() -> PlatformContext {
    CONTEXT
        .get()
        .copied()
        .unwrap_or_else(|| PlatformContext::new(Platform::Web))
}

/// Synchronous, infallible check for the packaged shell.
pub fn is_native_platform() -> bool {
    current_platform().is_native()
}

#[cfg(test)]
mod tests {
    use super::*;

    // The OnceLock is process-global, so this is the only test in the lib
    // binary that touches init_platform.
    #[test]
    fn detection_is_total_and_sticky() {
        // Callable before any initialization without panicking.
        let _ = is_native_platform();
        assert_eq!(current_platform().platform(), Platform::Web);

        let ctx = init_platform(Platform::Web);
        assert!(!ctx.is_native());

        // A second init with a different value does not overwrite.
        let again = init_platform(Platform::Ios);
        assert_eq!(again.platform(), Platform::Web);
        assert!(!is_native_platform());
    }

    #[test]
    fn context_is_copyable() {
        let ctx = PlatformContext::new(Platform::Android);
        let copy = ctx;
        assert!(copy.is_native());
        assert_eq!(ctx, copy);
    }
}
