//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, the GL surface and the running
//! engine, and wires window events to the embedder context.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
