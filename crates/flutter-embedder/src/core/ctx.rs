use crate::input::{
    ButtonState, Key, KeyState, MouseButton, PointerEvent, PointerTracker, WindowMetrics,
};

use super::events::{EmbedderEvents, EventSink};

/// Per-window embedder state: the engine association, the pointer state
/// machine and the close flag.
///
/// Owned by the runtime session and handed to the event translator by
/// reference; the engine is reached through `sink`, never through a window
/// user-data slot.
pub struct EmbedderContext<S: EventSink> {
    sink: S,
    pointer: PointerTracker,
    close_requested: bool,
}

impl<S: EventSink> EmbedderContext<S> {
    /// Attaches `sink` and immediately reports `initial_size` so the engine
    /// has valid metrics before the first real resize.
    pub fn new(sink: S, initial_size: (u32, u32)) -> Self {
        let mut ctx = Self {
            sink,
            pointer: PointerTracker::new(),
            close_requested: false,
        };
        ctx.on_resize(initial_size.0, initial_size.1);
        ctx
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Sets the close flag; the runtime tears the window down once it is set.
    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    fn forward_pointer(&mut self, event: Option<PointerEvent>) {
        let Some(event) = event else {
            return;
        };

        log::trace!("pointer {:?} at ({}, {})", event.phase, event.x, event.y);
        if let Err(e) = self.sink.send_pointer_event(event) {
            log::error!("failed to send pointer event: {e}");
        }
    }
}

impl<S: EventSink> EmbedderEvents for EmbedderContext<S> {
    fn on_resize(&mut self, width: u32, height: u32) {
        log::trace!("window metrics {width}x{height}");
        if let Err(e) = self.sink.send_window_metrics(WindowMetrics::new(width, height)) {
            log::error!("failed to send window metrics: {e}");
        }
    }

    fn on_cursor_move(&mut self, x: f64, y: f64) {
        let event = self.pointer.cursor_moved(x, y);
        self.forward_pointer(event);
    }

    fn on_mouse_button(&mut self, button: MouseButton, state: ButtonState) {
        let event = self.pointer.button(button, state);
        self.forward_pointer(event);
    }

    fn on_key(&mut self, key: Key, state: KeyState) {
        if key == Key::Escape && state == KeyState::Pressed {
            log::debug!("escape pressed; closing window");
            self.request_close();
        }
    }
}
