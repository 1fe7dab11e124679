use glam::Vec2;
use winit::event::{ElementState, MouseButton, WindowEvent};

/// A pointer event in screen pixel coordinates, already reduced to the three
/// transitions the gesture machine cares about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { position: Vec2 },
    Move { position: Vec2 },
    Up { position: Vec2 },
}

impl PointerEvent {
    pub fn position(&self) -> Vec2 {
        match self {
            PointerEvent::Down { position }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position } => *position,
        }
    }
}

/// Adapts winit window events into pointer events. Button events carry no
/// position in winit, so the tracker remembers the last cursor location and
/// stamps it onto Down/Up transitions.
#[derive(Debug, Default)]
pub struct PointerTracker {
    cursor: Option<Vec2>,
    left_down: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(self.cursor_moved(position.x as f32, position.y as f32))
            }
            WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                self.left_button(*state == ElementState::Pressed)
            }
            _ => None,
        }
    }

    fn cursor_moved(&mut self, x: f32, y: f32) -> PointerEvent {
        let position = Vec2::new(x, y);
        self.cursor = Some(position);
        PointerEvent::Move { position }
    }

    fn left_button(&mut self, pressed: bool) -> Option<PointerEvent> {
        // A press before any cursor position has no place to land.
        let position = self.cursor?;
        if pressed == self.left_down {
            return None;
        }
        self.left_down = pressed;
        Some(if pressed { PointerEvent::Down { position } } else { PointerEvent::Up { position } })
    }
}
