//! Time subsystem.
//!
//! Timestamps for engine-bound input events. One `EventClock` per window so
//! pointer event ordering is preserved per event stream.

mod event_clock;

pub use event_clock::EventClock;
