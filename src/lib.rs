//! Workspace umbrella crate.
//!
//! Host shells can depend on `agora-core` and enable the feature flags that
//! map to the individual workspace crates instead of wiring each member by
//! hand. The capability layer itself lives in `capability-core`; the
//! reference native shell is behind the `desktop-shell` feature.

pub use capability_core as capability;

#[cfg(feature = "desktop-shell")]
pub use shell_desktop as desktop;
