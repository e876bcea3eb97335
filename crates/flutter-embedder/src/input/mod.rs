//! Input subsystem.
//!
//! Public types are platform-agnostic. `platform` holds the toolkit
//! translation; `PointerTracker` turns button/cursor callbacks into engine
//! pointer events.

pub mod platform;
mod pointer;
mod types;

pub use pointer::{PointerState, PointerTracker};
pub use types::{
    ButtonState,
    Key,
    KeyState,
    MouseButton,
    PIXEL_RATIO,
    PointerEvent,
    PointerPhase,
    WindowMetrics,
};
