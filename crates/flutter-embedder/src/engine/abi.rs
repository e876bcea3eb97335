//! `#[repr(C)]` mirror of the parts of `flutter_embedder.h` this crate uses.
//!
//! Structs that carry a `struct_size` field may be declared as a prefix of the
//! engine's current definition: the engine only reads fields that lie inside
//! the advertised size and falls back to defaults for the rest.

#![allow(non_camel_case_types)]

use std::ffi::{c_char, c_int, c_void};

/// Embedder ABI version this crate is written against.
pub const FLUTTER_ENGINE_VERSION: usize = 1;

const _: () = assert!(FLUTTER_ENGINE_VERSION == 1);

/// Opaque engine handle (`FLUTTER_API_SYMBOL(FlutterEngine)`).
pub type FlutterEngine = *mut c_void;

/// `FlutterEngineResult`.
pub type FlutterEngineResult = c_int;
pub const K_SUCCESS: FlutterEngineResult = 0;
pub const K_INVALID_LIBRARY_VERSION: FlutterEngineResult = 1;
pub const K_INVALID_ARGUMENTS: FlutterEngineResult = 2;
pub const K_INTERNAL_INCONSISTENCY: FlutterEngineResult = 3;

/// `FlutterRendererType`.
pub type FlutterRendererType = c_int;
pub const K_OPENGL: FlutterRendererType = 0;

/// `FlutterPointerPhase`.
pub type FlutterPointerPhase = c_int;
pub const K_UP: FlutterPointerPhase = 1;
pub const K_DOWN: FlutterPointerPhase = 2;
pub const K_MOVE: FlutterPointerPhase = 3;

/// `FlutterPointerSignalKind`.
pub type FlutterPointerSignalKind = c_int;
pub const K_FLUTTER_POINTER_SIGNAL_KIND_NONE: FlutterPointerSignalKind = 0;

/// `FlutterPointerDeviceKind`.
pub type FlutterPointerDeviceKind = c_int;
pub const K_FLUTTER_POINTER_DEVICE_KIND_MOUSE: FlutterPointerDeviceKind = 1;

/// `FlutterPointerMouseButtons`.
pub const K_FLUTTER_POINTER_BUTTON_MOUSE_PRIMARY: i64 = 1 << 0;

pub type BoolCallback = Option<unsafe extern "C" fn(user_data: *mut c_void) -> bool>;
pub type UIntCallback = Option<unsafe extern "C" fn(user_data: *mut c_void) -> u32>;
pub type ProcResolver =
    Option<unsafe extern "C" fn(user_data: *mut c_void, name: *const c_char) -> *mut c_void>;
pub type TransformationCallback =
    Option<unsafe extern "C" fn(user_data: *mut c_void) -> FlutterTransformation>;
pub type TextureFrameCallback = Option<
    unsafe extern "C" fn(
        user_data: *mut c_void,
        texture_id: i64,
        width: usize,
        height: usize,
        texture_out: *mut c_void,
    ) -> bool,
>;

/// Row-major 3x3 surface transformation.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FlutterTransformation {
    pub scale_x: f64,
    pub skew_x: f64,
    pub trans_x: f64,
    pub skew_y: f64,
    pub scale_y: f64,
    pub trans_y: f64,
    pub pers0: f64,
    pub pers1: f64,
    pub pers2: f64,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub struct FlutterOpenGLRendererConfig {
    pub struct_size: usize,
    pub make_current: BoolCallback,
    pub clear_current: BoolCallback,
    pub present: BoolCallback,
    pub fbo_callback: UIntCallback,
    pub make_resource_current: BoolCallback,
    pub fbo_reset_after_present: bool,
    pub surface_transformation: TransformationCallback,
    pub gl_proc_resolver: ProcResolver,
    pub gl_external_texture_frame_callback: TextureFrameCallback,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub union FlutterRendererConfigBackend {
    pub open_gl: FlutterOpenGLRendererConfig,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub struct FlutterRendererConfig {
    pub type_: FlutterRendererType,
    pub backend: FlutterRendererConfigBackend,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct FlutterProjectArgs {
    pub struct_size: usize,
    pub assets_path: *const c_char,
    pub main_path_unused: *const c_char,
    pub packages_path_unused: *const c_char,
    pub icu_data_path: *const c_char,
    pub command_line_argc: c_int,
    pub command_line_argv: *const *const c_char,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FlutterWindowMetricsEvent {
    pub struct_size: usize,
    pub width: usize,
    pub height: usize,
    pub pixel_ratio: f64,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FlutterPointerEvent {
    pub struct_size: usize,
    pub phase: FlutterPointerPhase,
    /// Microseconds.
    pub timestamp: usize,
    pub x: f64,
    pub y: f64,
    pub device: i32,
    pub signal_kind: FlutterPointerSignalKind,
    pub scroll_delta_x: f64,
    pub scroll_delta_y: f64,
    pub device_kind: FlutterPointerDeviceKind,
    pub buttons: i64,
}

pub type FlutterEngineRunFn = unsafe extern "C" fn(
    version: usize,
    config: *const FlutterRendererConfig,
    args: *const FlutterProjectArgs,
    user_data: *mut c_void,
    engine_out: *mut FlutterEngine,
) -> FlutterEngineResult;

pub type FlutterEngineShutdownFn = unsafe extern "C" fn(engine: FlutterEngine) -> FlutterEngineResult;

pub type FlutterEngineSendWindowMetricsEventFn = unsafe extern "C" fn(
    engine: FlutterEngine,
    event: *const FlutterWindowMetricsEvent,
) -> FlutterEngineResult;

pub type FlutterEngineSendPointerEventFn = unsafe extern "C" fn(
    engine: FlutterEngine,
    events: *const FlutterPointerEvent,
    events_count: usize,
) -> FlutterEngineResult;
