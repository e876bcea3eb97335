use ::winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};
use ::winit::keyboard::{KeyCode, PhysicalKey};
use ::winit::platform::scancode::PhysicalKeyExtScancode;

use crate::core::EmbedderEvents;
use crate::input::{ButtonState, Key, KeyState, MouseButton};

/// Delivers a winit `WindowEvent` to `handler`.
///
/// Returns `false` for events the embedder does not handle. Close requests
/// and redraws are left to the runtime.
pub fn dispatch_window_event<H: EmbedderEvents>(handler: &mut H, event: &WindowEvent) -> bool {
    match event {
        WindowEvent::Resized(size) => {
            handler.on_resize(size.width, size.height);
            true
        }

        // Physical pixels, matching the fixed pixel ratio of the metrics.
        WindowEvent::CursorMoved { position, .. } => {
            handler.on_cursor_move(position.x, position.y);
            true
        }

        WindowEvent::MouseInput { state, button, .. } => {
            handler.on_mouse_button(map_mouse_button(*button), map_button_state(*state));
            true
        }

        WindowEvent::KeyboardInput { event, .. } => {
            let state = match (event.state, event.repeat) {
                (ElementState::Pressed, false) => KeyState::Pressed,
                (ElementState::Pressed, true) => KeyState::Repeated,
                (ElementState::Released, _) => KeyState::Released,
            };
            handler.on_key(map_key(event.physical_key), state);
            true
        }

        _ => false,
    }
}

fn map_button_state(state: ElementState) -> ButtonState {
    match state {
        ElementState::Pressed => ButtonState::Pressed,
        ElementState::Released => ButtonState::Released,
    }
}

pub fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

pub fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(KeyCode::Escape) => Key::Escape,
        // Platform scancode; 0 when winit has no mapping for the key.
        other => Key::Other(other.to_scancode().unwrap_or(0)),
    }
}

#[cfg(test)]
mod tests {
    use ::winit::dpi::PhysicalSize;

    use super::*;

    #[derive(Default)]
    struct Calls(Vec<String>);

    impl EmbedderEvents for Calls {
        fn on_resize(&mut self, width: u32, height: u32) {
            self.0.push(format!("resize {width}x{height}"));
        }

        fn on_cursor_move(&mut self, x: f64, y: f64) {
            self.0.push(format!("move {x},{y}"));
        }

        fn on_mouse_button(&mut self, button: MouseButton, state: ButtonState) {
            self.0.push(format!("button {button:?} {state:?}"));
        }

        fn on_key(&mut self, key: Key, state: KeyState) {
            self.0.push(format!("key {key} {state:?}"));
        }
    }

    #[test]
    fn resize_is_forwarded_in_physical_pixels() {
        let mut calls = Calls::default();
        let handled = dispatch_window_event(
            &mut calls,
            &WindowEvent::Resized(PhysicalSize::new(1024, 768)),
        );

        assert!(handled);
        assert_eq!(calls.0, ["resize 1024x768"]);
    }

    #[test]
    fn unrelated_events_are_not_handled() {
        let mut calls = Calls::default();
        assert!(!dispatch_window_event(&mut calls, &WindowEvent::CloseRequested));
        assert!(!dispatch_window_event(&mut calls, &WindowEvent::Focused(true)));
        assert!(calls.0.is_empty());
    }

    #[test]
    fn escape_is_the_only_named_key() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Escape)), Key::Escape);
        assert!(matches!(map_key(PhysicalKey::Code(KeyCode::KeyA)), Key::Other(_)));
        assert!(matches!(map_key(PhysicalKey::Code(KeyCode::Enter)), Key::Other(_)));
    }

    #[test]
    fn left_button_is_primary() {
        assert_eq!(map_mouse_button(WinitMouseButton::Left), MouseButton::PRIMARY);
        assert_eq!(map_mouse_button(WinitMouseButton::Other(9)), MouseButton::Other(9));
    }
}
