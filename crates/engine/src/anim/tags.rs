use std::fmt;

/// One kind of action an actor can play. The asset key doubles as the sheet
/// file stem (`attack_1.png`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionTag {
    Idle,
    Walk,
    Attack1,
    Attack2,
    Attack3,
    Shot1,
    Shot2,
    Evasion,
    Hurt,
    Dead,
}

impl ActionTag {
    pub const COUNT: usize = 10;

    pub const ALL: [ActionTag; Self::COUNT] = [
        ActionTag::Idle,
        ActionTag::Walk,
        ActionTag::Attack1,
        ActionTag::Attack2,
        ActionTag::Attack3,
        ActionTag::Shot1,
        ActionTag::Shot2,
        ActionTag::Evasion,
        ActionTag::Hurt,
        ActionTag::Dead,
    ];

    pub(crate) const fn index(self) -> usize {
        match self {
            ActionTag::Idle => 0,
            ActionTag::Walk => 1,
            ActionTag::Attack1 => 2,
            ActionTag::Attack2 => 3,
            ActionTag::Attack3 => 4,
            ActionTag::Shot1 => 5,
            ActionTag::Shot2 => 6,
            ActionTag::Evasion => 7,
            ActionTag::Hurt => 8,
            ActionTag::Dead => 9,
        }
    }

    pub const fn as_key(self) -> &'static str {
        match self {
            ActionTag::Idle => "idle",
            ActionTag::Walk => "walk",
            ActionTag::Attack1 => "attack_1",
            ActionTag::Attack2 => "attack_2",
            ActionTag::Attack3 => "attack_3",
            ActionTag::Shot1 => "shot_1",
            ActionTag::Shot2 => "shot_2",
            ActionTag::Evasion => "evasion",
            ActionTag::Hurt => "hurt",
            ActionTag::Dead => "dead",
        }
    }

    /// Idle, walk and evasion may be abandoned mid-playthrough; everything
    /// else runs to its last frame before another intent is admitted.
    pub const fn is_interruptible(self) -> bool {
        matches!(self, ActionTag::Idle | ActionTag::Walk | ActionTag::Evasion)
    }

    pub const fn is_offensive(self) -> bool {
        matches!(
            self,
            ActionTag::Attack1
                | ActionTag::Attack2
                | ActionTag::Attack3
                | ActionTag::Shot1
                | ActionTag::Shot2
        )
    }

    /// Tags that displace the actor by its move step on every tick.
    pub const fn moves(self) -> bool {
        matches!(self, ActionTag::Walk | ActionTag::Evasion)
    }
}

impl fmt::Display for ActionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    #[default]
    Right,
}

impl Direction {
    pub(crate) const fn index(self) -> usize {
        match self {
            Direction::Right => 0,
            Direction::Left => 1,
        }
    }

    /// Sign applied to horizontal movement.
    pub const fn sign(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => f.write_str("left"),
            Direction::Right => f.write_str("right"),
        }
    }
}
