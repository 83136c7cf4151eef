#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    MoveLeft,
    MoveRight,
    Shoot,
    EvadeLeft,
    EvadeRight,
    SpawnHostile,
    ClearDead,
    Quit,
}

const ACTION_COUNT: usize = 8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ActionStates {
    down: [bool; ACTION_COUNT],
}

impl ActionStates {
    pub(crate) fn set(&mut self, action: InputAction, is_down: bool) {
        self.down[action.index()] = is_down;
    }

    pub(crate) fn is_down(&self, action: InputAction) -> bool {
        self.down[action.index()]
    }

    pub(crate) fn clear(&mut self) {
        self.down = [false; ACTION_COUNT];
    }
}

impl InputAction {
    pub const ALL: [InputAction; ACTION_COUNT] = [
        InputAction::MoveLeft,
        InputAction::MoveRight,
        InputAction::Shoot,
        InputAction::EvadeLeft,
        InputAction::EvadeRight,
        InputAction::SpawnHostile,
        InputAction::ClearDead,
        InputAction::Quit,
    ];

    const fn index(self) -> usize {
        match self {
            InputAction::MoveLeft => 0,
            InputAction::MoveRight => 1,
            InputAction::Shoot => 2,
            InputAction::EvadeLeft => 3,
            InputAction::EvadeRight => 4,
            InputAction::SpawnHostile => 5,
            InputAction::ClearDead => 6,
            InputAction::Quit => 7,
        }
    }
}
