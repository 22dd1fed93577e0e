//! Host-side binding layer for the Muralite script surface.
//!
//! Sits between the engine runtime and an embedded wallpaper script and
//! implements the contract's two directions:
//! - script→host: one-shot listener registrations stored in a
//!   [`ListenerRegistry`] (one callback per channel, last registration
//!   wins), plus per-property random-file requests
//! - host→script: a [`ScriptDispatcher`] driving the optional listener
//!   slots of a `WallpaperScript`, with changed-subset property merging,
//!   directory-mode routing, and once-per-plugin notification
//!
//! Every call on this layer is best-effort and non-throwing: dispatching
//! to a channel nobody registered is a silent no-op, and no call returns
//! an acknowledgement. Dispatch is single-threaded — the registry and
//! dispatcher take `&mut self` and never share callbacks across threads.

mod dispatch;
mod error;
mod led;
mod properties;
mod registry;

pub use dispatch::ScriptDispatcher;
pub use error::HostError;
pub use led::{LedTarget, PluginCommands};
pub use properties::PropertyCache;
pub use registry::{
    AudioListener, ListenerRegistry, MediaPlaybackListener, MediaPropertiesListener,
    MediaStatusListener, MediaThumbnailListener, MediaTimelineListener, RandomFileListener,
};
