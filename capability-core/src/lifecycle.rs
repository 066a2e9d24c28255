//! App lifecycle state machine.
//!
//! Holds the single authoritative `Active`/`Background` value and turns
//! the shell's raw event stream into edge-triggered callbacks. Duplicate
//! events are suppressed so consumers never do redundant work (cache
//! refreshes in particular). `on_resume` means the app genuinely came
//! back from the background, not that something re-rendered.
//!
//! The current state has exactly one writer (the event pump); reads go
//! through [`LifecycleBridge::current_state`]. Web shells hand over a
//! stream that never yields, so on web the machine stays `Active`
//! forever.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use capability_bridge::error::Result;
use capability_bridge::lifecycle::{AppState, AppStateBridge};
use tracing::{debug, trace};

#[cfg(not(target_arch = "wasm32"))]
pub type LifecycleCallback = Arc<dyn Fn() + Send + Sync + 'static>;

#[cfg(target_arch = "wasm32")]
pub type LifecycleCallback = Arc<dyn Fn() + 'static>;

/// Callback set for one subscriber. Any subset may be provided.
#[derive(Default, Clone)]
pub struct LifecycleCallbacks {
    pub on_active: Option<LifecycleCallback>,
    pub on_background: Option<LifecycleCallback>,
    pub on_resume: Option<LifecycleCallback>,
}

impl LifecycleCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn on_active(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_active = Some(Arc::new(callback));
        self
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn on_background(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_background = Some(Arc::new(callback));
        self
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn on_resume(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_resume = Some(Arc::new(callback));
        self
    }

    #[cfg(target_arch = "wasm32")]
    pub fn on_active(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_active = Some(Arc::new(callback));
        self
    }

    #[cfg(target_arch = "wasm32")]
    pub fn on_background(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_background = Some(Arc::new(callback));
        self
    }

    #[cfg(target_arch = "wasm32")]
    pub fn on_resume(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_resume = Some(Arc::new(callback));
        self
    }
}

struct Inner {
    state: AppState,
    next_token: u64,
    subscribers: HashMap<u64, LifecycleCallbacks>,
}

/// Edge-triggered lifecycle dispatcher. Clones share state.
#[derive(Clone)]
pub struct LifecycleBridge {
    inner: Arc<Mutex<Inner>>,
}

impl LifecycleBridge {
    /// Initial state is `Active`: the process only exists because the app
    /// just came to the foreground.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: AppState::Active,
                next_token: 0,
                subscribers: HashMap::new(),
            })),
        }
    }

    pub fn current_state(&self) -> AppState {
        self.lock().state
    }

    /// Register a callback set; dropping the returned handle removes it.
    pub fn subscribe(&self, callbacks: LifecycleCallbacks) -> LifecycleSubscription {
        let mut inner = self.lock();
        let token = inner.next_token;
        inner.next_token += 1;
        inner.subscribers.insert(token, callbacks);
        LifecycleSubscription {
            token,
            inner: Arc::clone(&self.inner),
        }
    }

    /// Feed one shell event through the machine. Exposed so hosts and
    /// tests can drive transitions without an event stream.
    pub fn handle_transition(&self, next: AppState) {
        let fire: Vec<LifecycleCallbacks>;
        {
            let mut inner = self.lock();
            if inner.state == next {
                trace!(state = ?next, "duplicate app state event suppressed");
                return;
            }
            debug!(from = ?inner.state, to = ?next, "app state transition");
            inner.state = next;
            fire = inner.subscribers.values().cloned().collect();
        }

        // Callbacks run outside the lock so they may re-subscribe.
        match next {
            AppState::Background => {
                for callbacks in &fire {
                    if let Some(on_background) = &callbacks.on_background {
                        on_background();
                    }
                }
            }
            AppState::Active => {
                // Reaching Active here implies the previous state was
                // Background, so resume always accompanies activation.
                for callbacks in &fire {
                    if let Some(on_active) = &callbacks.on_active {
                        on_active();
                    }
                }
                for callbacks in &fire {
                    if let Some(on_resume) = &callbacks.on_resume {
                        on_resume();
                    }
                }
            }
        }
    }

    /// Subscribe to the shell's app-state events and pump them through
    /// [`handle_transition`] until the stream ends.
    ///
    /// [`handle_transition`]: LifecycleBridge::handle_transition
    pub async fn attach(&self, bridge: &dyn AppStateBridge) -> Result<()> {
        let mut stream = bridge.subscribe().await?;
        let machine = self.clone();

        spawn_pump(async move {
            while let Some(state) = stream.next().await {
                machine.handle_transition(state);
            }
        });

        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for LifecycleBridge {
    fn default() -> Self {
        Self::new()
    }
}

/// Unsubscribes on drop.
pub struct LifecycleSubscription {
    token: u64,
    inner: Arc<Mutex<Inner>>,
}

impl Drop for LifecycleSubscription {
    fn drop(&mut self) {
        let mut inner = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        inner.subscribers.remove(&self.token);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn spawn_pump<F>(future: F)
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    tokio::spawn(future);
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn spawn_pump<F>(future: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}
