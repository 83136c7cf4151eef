use std::fmt;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::ActorKind;
use crate::anim::{ActionTag, Direction, Frame};
use crate::combat::Projectile;
use crate::geometry::{Position, Rect};

/// What the state machine knows about a sequence that just played its last
/// frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub kind: ActorKind,
    pub tag: ActionTag,
    pub direction: Direction,
    pub bounds: Rect,
}

#[derive(Debug, Clone)]
pub enum ActorEffect {
    SpawnProjectile(Projectile),
}

/// Runs once per playthrough, on the tick a sequence first reaches its end.
pub trait CompletionHook: fmt::Debug {
    fn on_complete(&mut self, completion: &Completion) -> Option<ActorEffect>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoCompletionEffect;

impl CompletionHook for NoCompletionEffect {
    fn on_complete(&mut self, _completion: &Completion) -> Option<ActorEffect> {
        None
    }
}

/// Looses a projectile from the actor's centre when an attack or shot
/// finishes.
#[derive(Debug, Clone)]
pub struct RangedAttackHook {
    right: Frame,
    left: Frame,
    speed: u32,
}

impl RangedAttackHook {
    pub fn new(right: Frame, speed: u32) -> Self {
        let left = right.mirrored();
        Self { right, left, speed }
    }
}

impl CompletionHook for RangedAttackHook {
    fn on_complete(&mut self, completion: &Completion) -> Option<ActorEffect> {
        if !completion.tag.is_offensive() {
            return None;
        }
        let frame = match completion.direction {
            Direction::Right => self.right.clone(),
            Direction::Left => self.left.clone(),
        };
        let origin: Position = completion.bounds.center();
        Some(ActorEffect::SpawnProjectile(Projectile::new(
            origin,
            completion.direction,
            self.speed,
            frame,
        )))
    }
}

/// Chooses the concrete tag an `attack` intent plays.
pub trait AttackPicker: fmt::Debug {
    fn pick(&mut self, choices: &[ActionTag]) -> Option<ActionTag>;
}

/// Uniform choice from the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomAttackPicker;

impl AttackPicker for RandomAttackPicker {
    fn pick(&mut self, choices: &[ActionTag]) -> Option<ActionTag> {
        choices.choose(&mut rand::thread_rng()).copied()
    }
}

/// Uniform choice from a seeded generator, for reproducible runs.
#[derive(Debug, Clone)]
pub struct SeededAttackPicker {
    rng: ChaCha8Rng,
}

impl SeededAttackPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl AttackPicker for SeededAttackPicker {
    fn pick(&mut self, choices: &[ActionTag]) -> Option<ActionTag> {
        choices.choose(&mut self.rng).copied()
    }
}
