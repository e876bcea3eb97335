//! Flutter embedder crate.
//!
//! Hosts the Flutter engine in a `winit` window: resolves runtime resources,
//! bridges the engine's OpenGL callbacks to a `glutin` context, and forwards
//! window metrics and pointer input to the engine.

pub mod core;
pub mod engine;
pub mod input;
pub mod render;
pub mod resources;
pub mod time;
pub mod window;

pub mod logging;
