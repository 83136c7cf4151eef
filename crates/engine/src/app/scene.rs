use super::input::{ActionStates, InputAction};
use crate::anim::Frame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCommand {
    None,
    Quit,
}

/// Input for one simulation tick. `is_down` reports held keys; `was_pressed`
/// reports keys that went down since the previous tick and is true for
/// exactly one tick per press.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    quit_requested: bool,
    held: ActionStates,
    pressed: ActionStates,
}

impl InputSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn new(quit_requested: bool, held: ActionStates, pressed: ActionStates) -> Self {
        Self {
            quit_requested,
            held,
            pressed,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn is_down(&self, action: InputAction) -> bool {
        self.held.is_down(action)
    }

    pub fn was_pressed(&self, action: InputAction) -> bool {
        self.pressed.is_down(action)
    }

    pub fn with_action_down(mut self, action: InputAction, is_down: bool) -> Self {
        self.held.set(action, is_down);
        self
    }

    /// Marks a fresh press; the key also counts as held.
    pub fn with_action_pressed(mut self, action: InputAction) -> Self {
        self.pressed.set(action, true);
        self.held.set(action, true);
        self
    }

    pub fn with_quit_requested(mut self, quit_requested: bool) -> Self {
        self.quit_requested = quit_requested;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    Center,
}

/// One frame blitted at a field position. Draws are painted in list order.
#[derive(Debug, Clone)]
pub struct SpriteDraw {
    pub frame: Frame,
    pub x: i32,
    pub y: i32,
    pub anchor: Anchor,
}

impl SpriteDraw {
    pub fn top_left(frame: Frame, x: i32, y: i32) -> Self {
        Self {
            frame,
            x,
            y,
            anchor: Anchor::TopLeft,
        }
    }

    pub fn centered(frame: Frame, x: i32, y: i32) -> Self {
        Self {
            frame,
            x,
            y,
            anchor: Anchor::Center,
        }
    }

    /// Top-left corner in field pixels.
    pub fn origin(&self) -> (i32, i32) {
        match self.anchor {
            Anchor::TopLeft => (self.x, self.y),
            Anchor::Center => (
                self.x - (self.frame.width() / 2) as i32,
                self.y - (self.frame.height() / 2) as i32,
            ),
        }
    }
}

pub trait Scene {
    fn load(&mut self);
    fn update(&mut self, fixed_dt_seconds: f32, input: &InputSnapshot) -> SceneCommand;
    fn draw(&self, draws: &mut Vec<SpriteDraw>);
    fn unload(&mut self);
    /// Static backdrop painted under every draw, read once after `load`.
    fn background(&self) -> Option<Frame> {
        None
    }
    fn entity_count(&self) -> usize {
        0
    }
    fn debug_title(&self) -> Option<String> {
        None
    }
}
