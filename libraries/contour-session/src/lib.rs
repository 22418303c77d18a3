//! Contour Session
//!
//! The simulation loop for the Contour EQ editor: a single-threaded,
//! tick-driven [`EqSession`] that owns all mutable state and runs the
//! per-frame pipeline (bypass/solo resolution → spectrum simulation →
//! dynamics → display curve), publishing a [`TickFrame`] to the rendering
//! layer each tick.
//!
//! The session is completely platform-agnostic: scheduling (one `tick()`
//! per display refresh) and rendering are provided by the host. All editing
//! goes through explicit, clamping methods between ticks; UI sync happens
//! through drained [`SessionEvent`]s.
//!
//! # Example
//!
//! ```rust
//! use contour_core::BandPatch;
//! use contour_session::{EqSession, SessionConfig};
//!
//! let mut session = EqSession::new(SessionConfig::default());
//!
//! // Boost the 1 kHz band from a drag gesture
//! session.update_band(4, &BandPatch::new().gain(6.0));
//!
//! // One animation frame
//! let frame = session.tick().expect("session is active");
//! assert_eq!(frame.response.len(), 500);
//! assert_eq!(frame.spectrum.len(), 100);
//!
//! // Host teardown
//! session.shutdown();
//! assert!(session.tick().is_none());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod events;
pub mod session;
pub mod types;

pub use events::SessionEvent;
pub use session::EqSession;
pub use types::{SessionConfig, TickFrame, DEFAULT_SMOOTHING};
