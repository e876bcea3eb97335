use std::ffi::{CStr, c_char, c_void};

use crate::engine::abi;

/// Default framebuffer; the engine renders straight into the window surface.
pub const DEFAULT_FBO: u32 = 0;

/// GL operations the engine's OpenGL renderer needs from the host.
///
/// The engine calls these from its own raster thread, one at a time.
/// Implementations must not block.
pub trait RenderSurface: Send + Sync {
    /// Binds the surface's context to the calling thread.
    fn make_current(&self);

    /// Unbinds whatever context is current on the calling thread.
    fn clear_current(&self);

    /// Swaps front and back buffers.
    fn present(&self);

    /// Framebuffer the engine should draw into.
    fn fbo_id(&self) -> u32 {
        DEFAULT_FBO
    }

    /// Resolves a GL entry point; null when the symbol is unknown.
    fn proc_address(&self, name: &CStr) -> *const c_void;
}

/// Renderer configuration whose callbacks dispatch to `S`.
///
/// The `user_data` given to `FlutterEngineRun` alongside this configuration
/// must be a `*const S` that outlives the engine.
pub fn opengl_renderer_config<S: RenderSurface>() -> abi::FlutterRendererConfig {
    abi::FlutterRendererConfig {
        type_: abi::K_OPENGL,
        backend: abi::FlutterRendererConfigBackend {
            open_gl: abi::FlutterOpenGLRendererConfig {
                struct_size: std::mem::size_of::<abi::FlutterOpenGLRendererConfig>(),
                make_current: Some(make_current::<S>),
                clear_current: Some(clear_current::<S>),
                present: Some(present::<S>),
                fbo_callback: Some(fbo_callback::<S>),
                make_resource_current: None,
                fbo_reset_after_present: false,
                surface_transformation: None,
                gl_proc_resolver: Some(gl_proc_resolver::<S>),
                gl_external_texture_frame_callback: None,
            },
        },
    }
}

/// # Safety
///
/// `user_data` must be the `*const S` registered with the engine.
unsafe fn surface<'a, S: RenderSurface>(user_data: *mut c_void) -> &'a S {
    unsafe { &*(user_data as *const S) }
}

unsafe extern "C" fn make_current<S: RenderSurface>(user_data: *mut c_void) -> bool {
    unsafe { surface::<S>(user_data) }.make_current();
    true
}

unsafe extern "C" fn clear_current<S: RenderSurface>(user_data: *mut c_void) -> bool {
    unsafe { surface::<S>(user_data) }.clear_current();
    true
}

unsafe extern "C" fn present<S: RenderSurface>(user_data: *mut c_void) -> bool {
    unsafe { surface::<S>(user_data) }.present();
    true
}

unsafe extern "C" fn fbo_callback<S: RenderSurface>(user_data: *mut c_void) -> u32 {
    unsafe { surface::<S>(user_data) }.fbo_id()
}

unsafe extern "C" fn gl_proc_resolver<S: RenderSurface>(
    user_data: *mut c_void,
    name: *const c_char,
) -> *mut c_void {
    if name.is_null() {
        return std::ptr::null_mut();
    }

    let name = unsafe { CStr::from_ptr(name) };
    let address = unsafe { surface::<S>(user_data) }.proc_address(name);
    if address.is_null() {
        log::error!("tried unsuccessfully to resolve {}", name.to_string_lossy());
    }
    address as *mut c_void
}
