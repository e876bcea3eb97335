//! Toolkit event translation.

mod winit;

pub use self::winit::{dispatch_window_event, map_key, map_mouse_button};
