//! Core embedder contracts.
//!
//! Defines the handler interface the runtime drives (`EmbedderEvents`), the
//! engine-facing sink (`EventSink`) and the per-window context that ties them
//! together.

mod events;
mod ctx;

pub use events::{EmbedderEvents, EventSink};
pub use ctx::EmbedderContext;
