//! Soft-keyboard observation, an iOS-specific refinement.
//!
//! The watcher records keyboard visibility and height from shell events
//! and can scroll a focused input into centered view once the keyboard
//! animation has had a moment to start. The fixed delay trades animation
//! races for simplicity; it is not a correctness guarantee.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use capability_bridge::device::{KeyboardBridge, KeyboardEvent, ScrollTarget};
use capability_bridge::error::Result;
use capability_bridge::Platform;
use tracing::trace;

use crate::platform::PlatformContext;
use crate::time::sleep;

/// How long to wait for the native keyboard animation to begin before
/// scrolling the focused input into view.
pub const KEYBOARD_SETTLE_DELAY: Duration = Duration::from_millis(250);

/// Last observed keyboard geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KeyboardState {
    pub visible: bool,
    /// Height in pixels; zero while hidden.
    pub height: f64,
}

/// One instance per mounted observer; dropping it discards the state.
#[derive(Clone)]
pub struct KeyboardWatcher {
    ctx: PlatformContext,
    state: Arc<Mutex<KeyboardState>>,
}

impl KeyboardWatcher {
    pub fn new(ctx: PlatformContext) -> Self {
        Self {
            ctx,
            state: Arc::new(Mutex::new(KeyboardState::default())),
        }
    }

    pub fn state(&self) -> KeyboardState {
        *lock_state(&self.state)
    }

    /// Apply one shell event. Exposed so hosts without an event stream
    /// can forward events directly.
    pub fn handle_event(&self, event: KeyboardEvent) {
        apply(&self.state, event);
    }

    /// Subscribe to the shell's keyboard events and pump them into this
    /// watcher until the stream ends.
    pub async fn attach(&self, bridge: &dyn KeyboardBridge) -> Result<()> {
        let mut stream = bridge.subscribe().await?;
        let state = Arc::clone(&self.state);

        crate::lifecycle::spawn_pump(async move {
            while let Some(event) = stream.next().await {
                trace!(event = ?event, "keyboard event");
                apply(&state, event);
            }
        });

        Ok(())
    }

    /// Scroll the focused input into centered view after the keyboard
    /// animation has begun. No-op off iOS: other platforms resize the
    /// viewport themselves.
    pub async fn scroll_to_input(&self, target: &dyn ScrollTarget) {
        if self.ctx.platform() != Platform::Ios {
            return;
        }
        sleep(KEYBOARD_SETTLE_DELAY).await;
        target.scroll_into_view_centered();
    }
}

fn lock_state(state: &Mutex<KeyboardState>) -> std::sync::MutexGuard<'_, KeyboardState> {
    match state.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn apply(state: &Mutex<KeyboardState>, event: KeyboardEvent) {
    let mut state = lock_state(state);
    match event {
        KeyboardEvent::WillShow { height } => {
            state.visible = true;
            state.height = height;
        }
        KeyboardEvent::DidHide => {
            state.visible = false;
            state.height = 0.0;
        }
    }
}
