//! Clipboard and Share Sheet Bridges
//!
//! Both capabilities exist in two flavors: a native plugin on the packaged
//! shell and a browser API (`navigator.clipboard`, `navigator.share`) on
//! the web. The adapters in `capability-core` may try the native flavor
//! first and fall back to the web one, so both sides implement the same
//! trait.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::platform::PlatformSendSync;

/// Payload for the share sheet. All fields optional; an empty request is
/// legal and left to the host surface to reject or ignore.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareRequest {
    pub title: Option<String>,
    pub text: Option<String>,
    pub url: Option<String>,
}

impl ShareRequest {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// How a presented share sheet ended.
///
/// Dismissal by the user is an outcome, not an error: the sheet was
/// presented successfully and the user chose not to share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Dismissed,
}

/// Plain-text clipboard access.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait ClipboardBridge: PlatformSendSync {
    /// Replace the clipboard contents with `text`.
    async fn write_text(&self, text: &str) -> Result<()>;

    /// Read the current clipboard contents.
    ///
    /// Returns `Ok(None)` when the clipboard is empty or holds no text.
    async fn read_text(&self) -> Result<Option<String>>;
}

/// Share sheet presentation.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait ShareBridge: PlatformSendSync {
    /// Whether a share surface exists here at all.
    ///
    /// Must be synchronous and side-effect free so callers can gate UI on
    /// it (e.g. hide a share button).
    fn is_supported(&self) -> bool;

    /// Present the share sheet and wait for it to close.
    async fn share(&self, request: &ShareRequest) -> Result<ShareOutcome>;
}
