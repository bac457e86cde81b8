use macroquad::prelude::*;

use crate::application::Intent;

/// Pointer readings for one frame
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerFrame {
    pub position: Vec2,
    pub paint_pressed: bool,
    pub paint_down: bool,
    pub pan_down: bool,
    pub wheel: f32,
}

/// Gesture tracking carried between frames
#[derive(Debug, Default)]
pub struct InputState {
    last_pan_position: Option<Vec2>,
    paint_was_down: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate pointer readings into intents: camera first, then painting
    pub fn pointer_intents(&mut self, frame: PointerFrame) -> Vec<Intent> {
        let mut intents = Vec::new();

        match (frame.pan_down, self.last_pan_position) {
            (true, None) => intents.push(Intent::PanStart),
            (true, Some(last)) if last != frame.position => {
                intents.push(Intent::PanMove(frame.position - last));
            }
            (false, Some(_)) => intents.push(Intent::PanEnd),
            _ => {}
        }
        self.last_pan_position = frame.pan_down.then_some(frame.position);

        if frame.wheel != 0.0 {
            intents.push(Intent::Zoom { anchor: frame.position, wheel: frame.wheel });
        }

        if frame.paint_pressed {
            intents.push(Intent::PaintBegin(frame.position));
        } else if frame.paint_down {
            intents.push(Intent::PaintMove(frame.position));
        } else if self.paint_was_down {
            intents.push(Intent::PaintEnd);
        }
        self.paint_was_down = frame.paint_down;

        intents
    }

    /// Poll macroquad for this frame's intents
    pub fn poll(&mut self) -> Vec<Intent> {
        let (x, y) = mouse_position();
        let frame = PointerFrame {
            position: vec2(x, y),
            paint_pressed: is_mouse_button_pressed(MouseButton::Left),
            paint_down: is_mouse_button_down(MouseButton::Left),
            pan_down: is_mouse_button_down(MouseButton::Right) || is_mouse_button_down(MouseButton::Middle),
            wheel: normalize_wheel(mouse_wheel().1),
        };
        let mut intents = self.pointer_intents(frame);
        intents.extend(keyboard_intents(frame.position));
        intents
    }
}

/// One notch per event regardless of platform scroll scale
fn normalize_wheel(raw: f32) -> f32 {
    if raw > 0.0 {
        1.0
    } else if raw < 0.0 {
        -1.0
    } else {
        0.0
    }
}

const PATTERN_KEYS: [KeyCode; 10] = [
    KeyCode::Key1, KeyCode::Key2, KeyCode::Key3, KeyCode::Key4, KeyCode::Key5,
    KeyCode::Key6, KeyCode::Key7, KeyCode::Key8, KeyCode::Key9, KeyCode::Key0,
];

fn keyboard_intents(pointer: Vec2) -> Vec<Intent> {
    let actions: [(KeyCode, Intent); 6] = [
        (KeyCode::Space, Intent::TogglePause),
        (KeyCode::S, Intent::StepOnce),
        (KeyCode::Up, Intent::Faster),
        (KeyCode::Down, Intent::Slower),
        (KeyCode::R, Intent::Reset),
        (KeyCode::N, Intent::Randomize),
    ];

    let stamps = PATTERN_KEYS
        .iter()
        .enumerate()
        .filter(|(_, key)| is_key_pressed(**key))
        .map(|(index, _)| Intent::StampPattern { index, at: pointer });

    actions
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, intent)| *intent)
        .chain(stamps)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f32, y: f32) -> PointerFrame {
        PointerFrame { position: vec2(x, y), ..Default::default() }
    }

    #[test]
    fn test_pan_lifecycle() {
        let mut input = InputState::new();
        let down = |x, y| PointerFrame { pan_down: true, ..at(x, y) };

        assert_eq!(input.pointer_intents(down(10.0, 10.0)), vec![Intent::PanStart]);
        assert_eq!(input.pointer_intents(down(15.0, 7.0)), vec![Intent::PanMove(vec2(5.0, -3.0))]);
        assert!(input.pointer_intents(down(15.0, 7.0)).is_empty());
        assert_eq!(input.pointer_intents(at(15.0, 7.0)), vec![Intent::PanEnd]);
        assert!(input.pointer_intents(at(15.0, 7.0)).is_empty());
    }

    #[test]
    fn test_paint_lifecycle() {
        let mut input = InputState::new();
        let pressed = PointerFrame { paint_pressed: true, paint_down: true, ..at(1.0, 2.0) };
        let held = PointerFrame { paint_down: true, ..at(3.0, 4.0) };

        assert_eq!(input.pointer_intents(pressed), vec![Intent::PaintBegin(vec2(1.0, 2.0))]);
        assert_eq!(input.pointer_intents(held), vec![Intent::PaintMove(vec2(3.0, 4.0))]);
        assert_eq!(input.pointer_intents(at(3.0, 4.0)), vec![Intent::PaintEnd]);
        assert!(input.pointer_intents(at(3.0, 4.0)).is_empty());
    }

    #[test]
    fn test_wheel_zooms_at_pointer() {
        let mut input = InputState::new();
        let frame = PointerFrame { wheel: -1.0, ..at(40.0, 60.0) };
        assert_eq!(
            input.pointer_intents(frame),
            vec![Intent::Zoom { anchor: vec2(40.0, 60.0), wheel: -1.0 }]
        );
    }

    #[test]
    fn test_normalize_wheel() {
        assert_eq!(normalize_wheel(120.0), 1.0);
        assert_eq!(normalize_wheel(-0.5), -1.0);
        assert_eq!(normalize_wheel(0.0), 0.0);
    }
}
