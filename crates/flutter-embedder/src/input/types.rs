use std::fmt;

use crate::engine::abi;

/// Pixel ratio reported with every window-metrics event.
pub const PIXEL_RATIO: f64 = 1.0;

/// Keyboard key identifier.
///
/// The embedder reacts to Escape only; every other key is carried through as
/// `Other` with the platform key code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Other(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    /// Auto-repeat while the key stays down.
    Repeated,
    Released,
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

impl MouseButton {
    /// The button that drives down/move/up pointer events.
    pub const PRIMARY: MouseButton = MouseButton::Left;
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// Phase of a pointer event sent to the engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

impl PointerPhase {
    pub fn to_raw(self) -> abi::FlutterPointerPhase {
        match self {
            PointerPhase::Down => abi::K_DOWN,
            PointerPhase::Move => abi::K_MOVE,
            PointerPhase::Up => abi::K_UP,
        }
    }
}

/// Pointer event in window-local physical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub x: f64,
    pub y: f64,
    /// Microseconds on the monotonic event clock.
    pub timestamp_us: u64,
}

impl PointerEvent {
    pub fn to_raw(&self) -> abi::FlutterPointerEvent {
        // Button mask reflects the state after this event.
        let buttons = match self.phase {
            PointerPhase::Down | PointerPhase::Move => abi::K_FLUTTER_POINTER_BUTTON_MOUSE_PRIMARY,
            PointerPhase::Up => 0,
        };

        abi::FlutterPointerEvent {
            struct_size: std::mem::size_of::<abi::FlutterPointerEvent>(),
            phase: self.phase.to_raw(),
            timestamp: self.timestamp_us as usize,
            x: self.x,
            y: self.y,
            device: 0,
            signal_kind: abi::K_FLUTTER_POINTER_SIGNAL_KIND_NONE,
            scroll_delta_x: 0.0,
            scroll_delta_y: 0.0,
            device_kind: abi::K_FLUTTER_POINTER_DEVICE_KIND_MOUSE,
            buttons,
        }
    }
}

/// Window size in physical pixels plus the device pixel ratio.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WindowMetrics {
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f64,
}

impl WindowMetrics {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixel_ratio: PIXEL_RATIO,
        }
    }

    pub fn to_raw(&self) -> abi::FlutterWindowMetricsEvent {
        abi::FlutterWindowMetricsEvent {
            struct_size: std::mem::size_of::<abi::FlutterWindowMetricsEvent>(),
            width: self.width as usize,
            height: self.height as usize,
            pixel_ratio: self.pixel_ratio,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_phases_map_to_engine_values() {
        assert_eq!(PointerPhase::Up.to_raw(), 1);
        assert_eq!(PointerPhase::Down.to_raw(), 2);
        assert_eq!(PointerPhase::Move.to_raw(), 3);
    }

    #[test]
    fn raw_pointer_event_is_a_mouse_with_primary_held_until_up() {
        let down = PointerEvent {
            phase: PointerPhase::Down,
            x: 1.5,
            y: 2.5,
            timestamp_us: 7,
        };
        let raw = down.to_raw();
        assert_eq!(raw.struct_size, std::mem::size_of::<abi::FlutterPointerEvent>());
        assert_eq!(raw.timestamp, 7);
        assert_eq!((raw.x, raw.y), (1.5, 2.5));
        assert_eq!(raw.device_kind, abi::K_FLUTTER_POINTER_DEVICE_KIND_MOUSE);
        assert_eq!(raw.buttons, abi::K_FLUTTER_POINTER_BUTTON_MOUSE_PRIMARY);

        let up = PointerEvent { phase: PointerPhase::Up, ..down };
        assert_eq!(up.to_raw().buttons, 0);
    }

    #[test]
    fn metrics_use_fixed_pixel_ratio() {
        let raw = WindowMetrics::new(1024, 768).to_raw();
        assert_eq!((raw.width, raw.height), (1024, 768));
        assert_eq!(raw.pixel_ratio, 1.0);
    }
}
