//! Renderer bridge between the engine's OpenGL callbacks and the window's
//! GL context.

mod bridge;
mod gl;

pub use bridge::{DEFAULT_FBO, RenderSurface, opengl_renderer_config};
pub use gl::GlWindowSurface;
