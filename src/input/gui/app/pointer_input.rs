use std::time::Instant;

use winit::event::{ElementState, MouseButton, MouseScrollDelta};

use crate::controllers::interactive::ExplorerSession;

/// Session call produced by one window event. Positions are physical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerAction {
    None,
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
    Leave,
    Wheel { delta_y: f64, x: f64, y: f64 },
}

impl PointerAction {
    pub fn apply(self, session: &mut ExplorerSession, now: Instant) {
        match self {
            Self::None => {}
            Self::Down { x, y } => session.pointer_down(x, y),
            Self::Move { x, y } => session.pointer_move(x, y, now),
            Self::Up { x, y } => session.pointer_up(x, y),
            Self::Leave => session.pointer_leave(),
            Self::Wheel { delta_y, x, y } => session.wheel(delta_y, x, y),
        }
    }
}

/// Tracks the cursor and the left button between winit events, which report
/// them separately.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerInputState {
    cursor: Option<(f64, f64)>,
    left_held: bool,
}

impl PointerInputState {
    pub fn cursor_moved(&mut self, x: f64, y: f64) -> PointerAction {
        self.cursor = Some((x, y));
        PointerAction::Move { x, y }
    }

    pub fn cursor_left(&mut self) -> PointerAction {
        self.cursor = None;
        self.left_held = false;
        PointerAction::Leave
    }

    pub fn mouse_input(&mut self, button: MouseButton, state: ElementState) -> PointerAction {
        if button != MouseButton::Left {
            return PointerAction::None;
        }

        let Some((x, y)) = self.cursor else {
            return PointerAction::None;
        };

        match state {
            ElementState::Pressed if !self.left_held => {
                self.left_held = true;
                PointerAction::Down { x, y }
            }
            ElementState::Released if self.left_held => {
                self.left_held = false;
                PointerAction::Up { x, y }
            }
            _ => PointerAction::None,
        }
    }

    /// winit reports scrolling up as positive; the session expects the
    /// opposite sign for zooming in.
    pub fn mouse_wheel(&self, delta: MouseScrollDelta) -> PointerAction {
        let Some((x, y)) = self.cursor else {
            return PointerAction::None;
        };

        let delta_y = match delta {
            MouseScrollDelta::LineDelta(_, lines) => -f64::from(lines),
            MouseScrollDelta::PixelDelta(position) => -position.y,
        };

        if delta_y == 0.0 {
            return PointerAction::None;
        }

        PointerAction::Wheel { delta_y, x, y }
    }

    #[must_use]
    pub fn is_left_held(&self) -> bool {
        self.left_held
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn press_without_cursor_does_nothing() {
        let mut input = PointerInputState::default();

        let action = input.mouse_input(MouseButton::Left, ElementState::Pressed);

        assert_eq!(action, PointerAction::None);
        assert!(!input.is_left_held());
    }

    #[test]
    fn left_press_and_release_use_last_cursor_position() {
        let mut input = PointerInputState::default();
        input.cursor_moved(120.0, 80.0);

        let down = input.mouse_input(MouseButton::Left, ElementState::Pressed);
        input.cursor_moved(130.0, 90.0);
        let up = input.mouse_input(MouseButton::Left, ElementState::Released);

        assert_eq!(down, PointerAction::Down { x: 120.0, y: 80.0 });
        assert_eq!(up, PointerAction::Up { x: 130.0, y: 90.0 });
        assert!(!input.is_left_held());
    }

    #[test]
    fn repeated_press_reports_a_single_down() {
        let mut input = PointerInputState::default();
        input.cursor_moved(10.0, 10.0);

        let first = input.mouse_input(MouseButton::Left, ElementState::Pressed);
        let second = input.mouse_input(MouseButton::Left, ElementState::Pressed);

        assert!(matches!(first, PointerAction::Down { .. }));
        assert_eq!(second, PointerAction::None);
    }

    #[test]
    fn other_buttons_are_ignored() {
        let mut input = PointerInputState::default();
        input.cursor_moved(10.0, 10.0);

        assert_eq!(
            input.mouse_input(MouseButton::Right, ElementState::Pressed),
            PointerAction::None
        );
        assert!(!input.is_left_held());
    }

    #[test]
    fn leaving_releases_the_button() {
        let mut input = PointerInputState::default();
        input.cursor_moved(10.0, 10.0);
        input.mouse_input(MouseButton::Left, ElementState::Pressed);

        assert_eq!(input.cursor_left(), PointerAction::Leave);
        assert!(!input.is_left_held());
        assert_eq!(
            input.mouse_input(MouseButton::Left, ElementState::Released),
            PointerAction::None
        );
    }

    #[test]
    fn scrolling_up_becomes_a_negative_wheel_delta() {
        let mut input = PointerInputState::default();
        input.cursor_moved(400.0, 300.0);

        let lines = input.mouse_wheel(MouseScrollDelta::LineDelta(0.0, 1.0));
        let pixels = input.mouse_wheel(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -24.0)));

        assert_eq!(lines, PointerAction::Wheel { delta_y: -1.0, x: 400.0, y: 300.0 });
        assert_eq!(pixels, PointerAction::Wheel { delta_y: 24.0, x: 400.0, y: 300.0 });
    }

    #[test]
    fn horizontal_scroll_is_ignored() {
        let mut input = PointerInputState::default();
        input.cursor_moved(400.0, 300.0);

        assert_eq!(
            input.mouse_wheel(MouseScrollDelta::LineDelta(1.0, 0.0)),
            PointerAction::None
        );
    }
}
