//! Interaction controller for the chandra moon dial.
//!
//! This crate provides:
//! - `Dial`: owner of the selected date, viewed month, drag session and
//!   animation ticker; every external input arrives as a `DialEvent`
//! - Drag-to-rotate with snapping to one of 15 lunar days
//! - `AnimationTicker`: a single owned periodic timer driven by `Instant`s
//! - Scoped pointer capture (`CaptureRegistry` / `CaptureGuard`)
//! - `DialSnapshot`: every derived value, recomputed from the selected date
//! - `DialConfig`: tick period and scene geometry, loadable from TOML

pub mod capture;
pub mod clock;
pub mod config;
pub mod dial;
pub mod drag;
pub mod error;
pub mod event;
pub mod snapshot;
pub mod ticker;

pub use capture::{CaptureGuard, CaptureRegistry};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::DialConfig;
pub use dial::Dial;
pub use drag::{Annulus, DragSession};
pub use error::{ConfigError, DialError};
pub use event::{DialEvent, PointerSample, SceneRect};
pub use snapshot::{DialSnapshot, ICON_RADIUS, RingIcon};
pub use ticker::AnimationTicker;
