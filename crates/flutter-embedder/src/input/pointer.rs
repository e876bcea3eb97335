use super::types::{ButtonState, MouseButton, PointerEvent, PointerPhase};
use crate::time::EventClock;

/// Whether the primary button is held.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum PointerState {
    #[default]
    Idle,
    Dragging,
}

/// Primary-button pointer state machine for one window.
///
/// The cursor position is tracked on every move so presses and releases can
/// be reported where the cursor currently is. Moves are only turned into
/// engine events while dragging.
#[derive(Debug, Default)]
pub struct PointerTracker {
    state: PointerState,
    cursor: (f64, f64),
    clock: EventClock,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    /// Last known cursor position in window-local pixels.
    pub fn cursor(&self) -> (f64, f64) {
        self.cursor
    }

    /// Records a cursor move; returns a move event while dragging.
    pub fn cursor_moved(&mut self, x: f64, y: f64) -> Option<PointerEvent> {
        self.cursor = (x, y);
        match self.state {
            PointerState::Dragging => Some(self.event(PointerPhase::Move)),
            PointerState::Idle => None,
        }
    }

    /// Applies a button transition; returns down/up events for the primary button.
    pub fn button(&mut self, button: MouseButton, state: ButtonState) -> Option<PointerEvent> {
        if button != MouseButton::PRIMARY {
            return None;
        }

        match (self.state, state) {
            (PointerState::Idle, ButtonState::Pressed) => {
                self.state = PointerState::Dragging;
                Some(self.event(PointerPhase::Down))
            }
            (PointerState::Dragging, ButtonState::Released) => {
                self.state = PointerState::Idle;
                Some(self.event(PointerPhase::Up))
            }
            _ => None,
        }
    }

    fn event(&mut self, phase: PointerPhase) -> PointerEvent {
        let (x, y) = self.cursor;
        PointerEvent {
            phase,
            x,
            y,
            timestamp_us: self.clock.now_us(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_moves_are_tracked_but_not_forwarded() {
        let mut p = PointerTracker::new();
        assert_eq!(p.cursor_moved(3.0, 4.0), None);
        assert_eq!(p.cursor(), (3.0, 4.0));
        assert_eq!(p.state(), PointerState::Idle);
    }

    #[test]
    fn press_reports_down_at_current_cursor() {
        let mut p = PointerTracker::new();
        p.cursor_moved(10.0, 20.0);

        let down = p.button(MouseButton::Left, ButtonState::Pressed).unwrap();
        assert_eq!(down.phase, PointerPhase::Down);
        assert_eq!((down.x, down.y), (10.0, 20.0));
        assert_eq!(p.state(), PointerState::Dragging);
    }

    #[test]
    fn drag_reports_moves_then_up() {
        let mut p = PointerTracker::new();
        p.cursor_moved(10.0, 20.0);
        p.button(MouseButton::Left, ButtonState::Pressed);

        let mv = p.cursor_moved(15.0, 25.0).unwrap();
        assert_eq!(mv.phase, PointerPhase::Move);

        let up = p.button(MouseButton::Left, ButtonState::Released).unwrap();
        assert_eq!(up.phase, PointerPhase::Up);
        assert_eq!((up.x, up.y), (15.0, 25.0));
        assert_eq!(p.state(), PointerState::Idle);

        assert_eq!(p.cursor_moved(30.0, 30.0), None);
    }

    #[test]
    fn release_while_idle_is_ignored() {
        let mut p = PointerTracker::new();
        assert_eq!(p.button(MouseButton::Left, ButtonState::Released), None);
    }

    #[test]
    fn repeated_press_while_dragging_is_ignored() {
        let mut p = PointerTracker::new();
        p.button(MouseButton::Left, ButtonState::Pressed);
        assert_eq!(p.button(MouseButton::Left, ButtonState::Pressed), None);
        assert_eq!(p.state(), PointerState::Dragging);
    }

    #[test]
    fn non_primary_buttons_do_nothing() {
        let mut p = PointerTracker::new();
        assert_eq!(p.button(MouseButton::Right, ButtonState::Pressed), None);
        assert_eq!(p.button(MouseButton::Middle, ButtonState::Pressed), None);
        assert_eq!(p.state(), PointerState::Idle);
    }
}
