use crate::engine::EngineError;
use crate::input::{ButtonState, Key, KeyState, MouseButton, PointerEvent, WindowMetrics};

/// Window/input callbacks the runtime delivers to the embedder.
///
/// The runtime translates toolkit events into these calls, one at a time, on
/// the event loop thread.
pub trait EmbedderEvents {
    /// Window inner size changed (physical pixels).
    fn on_resize(&mut self, width: u32, height: u32);

    /// Cursor moved to window-local `(x, y)`.
    fn on_cursor_move(&mut self, x: f64, y: f64);

    fn on_mouse_button(&mut self, button: MouseButton, state: ButtonState);

    fn on_key(&mut self, key: Key, state: KeyState);
}

/// Destination for engine-bound events.
pub trait EventSink {
    fn send_pointer_event(&mut self, event: PointerEvent) -> Result<(), EngineError>;

    fn send_window_metrics(&mut self, metrics: WindowMetrics) -> Result<(), EngineError>;
}
