use thiserror::Error;
use tracing::{debug, trace};

use super::hooks::{
    ActorEffect, AttackPicker, Completion, CompletionHook, NoCompletionEffect, RandomAttackPicker,
    RangedAttackHook,
};
use super::table::SequenceTable;
use super::{ActorKind, ActorProfile};
use crate::anim::{ActionTag, AnimationSequence, Direction, EmptySequence, Frame};
use crate::assets::{AssetError, FrameSource};
use crate::geometry::{Position, Rect};

/// One externally decided action for the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Idle,
    MoveLeft,
    MoveRight,
    Attack,
    EvadeLeft,
    EvadeRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    Hurt { remaining_hit_points: u32 },
    Killed,
    /// The actor was already dead.
    Ignored,
}

#[derive(Debug, Error)]
pub enum ActorBuildError {
    #[error("failed to load '{tag}' frames for {kind}: {source}")]
    TagLoad {
        kind: ActorKind,
        tag: ActionTag,
        #[source]
        source: AssetError,
    },
    #[error("{kind} profile uses '{tag}' but does not declare it")]
    UndeclaredTag { kind: ActorKind, tag: ActionTag },
    #[error("failed to load projectile frames for {kind}: {source}")]
    ProjectileLoad {
        kind: ActorKind,
        #[source]
        source: AssetError,
    },
    #[error(transparent)]
    EmptySequence(#[from] EmptySequence),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Motion {
    Stay,
    Step,
}

/// Animation-driven state machine for one actor.
///
/// Intents are admitted only while the active sequence is interruptible or
/// has finished its playthrough; everything else is a silent no-op. A dead
/// actor admits nothing and only plays out its death sequence.
#[derive(Debug)]
pub struct Actor {
    kind: ActorKind,
    hostile: bool,
    sequences: SequenceTable,
    attack_tags: &'static [ActionTag],
    cell_width: u32,
    cell_height: u32,
    position: Position,
    direction: Direction,
    tag: ActionTag,
    move_step: i32,
    hit_points: u32,
    stepped_this_tick: bool,
    completion_pending: bool,
    hook: Box<dyn CompletionHook>,
    picker: Box<dyn AttackPicker>,
}

impl Actor {
    pub fn apply_intent(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::Idle => self.idle(),
            Intent::MoveLeft => self.move_left(),
            Intent::MoveRight => self.move_right(),
            Intent::Attack => self.attack(),
            Intent::EvadeLeft => self.evade_left(),
            Intent::EvadeRight => self.evade_right(),
        }
    }

    pub fn idle(&mut self) -> bool {
        self.request(ActionTag::Idle, self.direction, Motion::Stay)
    }

    pub fn move_left(&mut self) -> bool {
        self.request(ActionTag::Walk, Direction::Left, Motion::Step)
    }

    pub fn move_right(&mut self) -> bool {
        self.request(ActionTag::Walk, Direction::Right, Motion::Step)
    }

    pub fn attack(&mut self) -> bool {
        if !self.can_interrupt() {
            self.trace_ignored("attack");
            return false;
        }
        let Some(tag) = self.picker.pick(self.attack_tags) else {
            return false;
        };
        self.request(tag, self.direction, Motion::Stay)
    }

    pub fn evade_left(&mut self) -> bool {
        self.evade(Direction::Left)
    }

    pub fn evade_right(&mut self) -> bool {
        self.evade(Direction::Right)
    }

    fn evade(&mut self, direction: Direction) -> bool {
        if !self.sequences.contains(ActionTag::Evasion) {
            trace!(kind = %self.kind, "evade_unsupported");
            return false;
        }
        self.request(ActionTag::Evasion, direction, Motion::Step)
    }

    /// Takes one hit. Not gated by interruptibility: a living actor always
    /// flinches or dies.
    pub fn hit(&mut self) -> HitOutcome {
        if !self.is_alive() {
            return HitOutcome::Ignored;
        }
        self.hit_points = self.hit_points.saturating_sub(1);
        if self.hit_points == 0 {
            self.enter(ActionTag::Dead, self.direction);
            debug!(kind = %self.kind, x = self.position.x, "actor_killed");
            HitOutcome::Killed
        } else {
            self.enter(ActionTag::Hurt, self.direction);
            HitOutcome::Hurt {
                remaining_hit_points: self.hit_points,
            }
        }
    }

    /// Advances the active sequence by one frame. Returns the completion
    /// hook's effect on the tick the sequence first reaches its end.
    pub fn update(&mut self) -> Option<ActorEffect> {
        if self.tag.moves() && !self.stepped_this_tick {
            self.step();
        }
        self.stepped_this_tick = false;

        let finished = {
            let sequence = self.active_mut();
            sequence.advance();
            sequence.finished()
        };
        if !finished || !self.completion_pending {
            return None;
        }
        self.completion_pending = false;

        let completion = Completion {
            kind: self.kind,
            tag: self.tag,
            direction: self.direction,
            bounds: self.bounds(),
        };
        let effect = self.hook.on_complete(&completion);
        if effect.is_some() {
            debug!(
                kind = %self.kind,
                tag = %self.tag,
                direction = %self.direction,
                "completion_effect"
            );
        }
        effect
    }

    pub fn current_frame(&self) -> &Frame {
        self.active().current()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_top_left(self.position, self.cell_width, self.cell_height)
    }

    pub fn is_alive(&self) -> bool {
        self.tag != ActionTag::Dead
    }

    pub fn is_hostile(&self) -> bool {
        self.hostile
    }

    /// True once a dead actor has played its death sequence through.
    pub fn is_spent(&self) -> bool {
        !self.is_alive() && self.active().finished()
    }

    pub fn kind(&self) -> ActorKind {
        self.kind
    }

    pub fn current_tag(&self) -> ActionTag {
        self.tag
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn hit_points(&self) -> u32 {
        self.hit_points
    }

    pub fn move_step(&self) -> i32 {
        self.move_step
    }

    pub fn cursor(&self) -> usize {
        self.active().cursor()
    }

    pub fn active_finished(&self) -> bool {
        self.active().finished()
    }

    pub fn sequence(&self, tag: ActionTag, direction: Direction) -> Option<&AnimationSequence> {
        self.sequences.get(tag, direction)
    }

    fn can_interrupt(&self) -> bool {
        if !self.is_alive() {
            return false;
        }
        let active = self.active();
        active.interruptible() || active.finished()
    }

    fn request(&mut self, tag: ActionTag, direction: Direction, motion: Motion) -> bool {
        if !self.can_interrupt() {
            self.trace_ignored(tag.as_key());
            return false;
        }
        if (tag, direction) != (self.tag, self.direction) {
            trace!(kind = %self.kind, from = %self.tag, to = %tag, %direction, "actor_transition");
            self.enter(tag, direction);
            if motion == Motion::Step {
                self.step();
                self.stepped_this_tick = true;
            }
        } else if self.active().finished() {
            self.restart_active();
        }
        true
    }

    fn enter(&mut self, tag: ActionTag, direction: Direction) {
        self.tag = tag;
        self.direction = direction;
        self.restart_active();
    }

    fn restart_active(&mut self) {
        self.active_mut().reset();
        self.completion_pending = true;
    }

    fn step(&mut self) {
        self.position.x = self
            .position
            .x
            .saturating_add(self.direction.sign().saturating_mul(self.move_step));
    }

    fn trace_ignored(&self, requested: &str) {
        trace!(
            kind = %self.kind,
            active = %self.tag,
            requested,
            "intent_ignored"
        );
    }

    fn active(&self) -> &AnimationSequence {
        let (tag, direction) = (self.tag, self.direction);
        self.sequences
            .get(tag, direction)
            .unwrap_or_else(|| panic!("{} has no '{tag}' sequence loaded", self.kind))
    }

    fn active_mut(&mut self) -> &mut AnimationSequence {
        let (kind, tag, direction) = (self.kind, self.tag, self.direction);
        self.sequences
            .get_mut(tag, direction)
            .unwrap_or_else(|| panic!("{kind} has no '{tag}' sequence loaded"))
    }
}

/// Builds an [`Actor`] from a variant profile. The completion hook defaults
/// to a ranged hook when the profile has a projectile and to no effect
/// otherwise; the attack picker defaults to uniform random choice.
#[derive(Debug)]
pub struct ActorBuilder {
    profile: ActorProfile,
    position: Position,
    direction: Direction,
    projectile_speed: u32,
    hook: Option<Box<dyn CompletionHook>>,
    picker: Option<Box<dyn AttackPicker>>,
}

impl ActorBuilder {
    pub fn new(kind: ActorKind) -> Self {
        Self::from_profile(kind.profile())
    }

    pub fn from_profile(profile: ActorProfile) -> Self {
        Self {
            profile,
            position: Position::default(),
            direction: Direction::Right,
            projectile_speed: super::ARROW_SPEED,
            hook: None,
            picker: None,
        }
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn facing(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn move_step(mut self, move_step: i32) -> Self {
        self.profile.move_step = move_step;
        self
    }

    pub fn hit_points(mut self, hit_points: u32) -> Self {
        self.profile.hit_points = hit_points.max(1);
        self
    }

    pub fn projectile_speed(mut self, speed: u32) -> Self {
        self.projectile_speed = speed;
        self
    }

    pub fn completion_hook(mut self, hook: impl CompletionHook + 'static) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    pub fn attack_picker(mut self, picker: impl AttackPicker + 'static) -> Self {
        self.picker = Some(Box::new(picker));
        self
    }

    pub fn build(self, source: &mut dyn FrameSource) -> Result<Actor, ActorBuildError> {
        let profile = self.profile;
        if let Some(tag) = profile.first_undeclared_tag() {
            return Err(ActorBuildError::UndeclaredTag {
                kind: profile.kind,
                tag,
            });
        }
        let sequences = SequenceTable::load(&profile, source)?;
        let hook = match (self.hook, profile.projectile) {
            (Some(hook), _) => hook,
            (None, Some(projectile)) => {
                let frames = source
                    .load_frames(
                        projectile.asset,
                        projectile.sheet,
                        projectile.width,
                        projectile.height,
                    )
                    .map_err(|source| ActorBuildError::ProjectileLoad {
                        kind: profile.kind,
                        source,
                    })?;
                let Some(frame) = frames.into_iter().next() else {
                    return Err(ActorBuildError::ProjectileLoad {
                        kind: profile.kind,
                        source: AssetError::Missing {
                            asset: projectile.asset.to_string(),
                            sheet: projectile.sheet.to_string(),
                        },
                    });
                };
                Box::new(RangedAttackHook::new(frame, self.projectile_speed))
            }
            (None, None) => Box::new(NoCompletionEffect),
        };

        debug!(
            kind = %profile.kind,
            x = self.position.x,
            y = self.position.y,
            tags = profile.tags.len(),
            "actor_built"
        );
        Ok(Actor {
            kind: profile.kind,
            hostile: profile.hostile,
            sequences,
            attack_tags: profile.attack_tags,
            cell_width: profile.cell_width,
            cell_height: profile.cell_height,
            position: self.position,
            direction: self.direction,
            tag: ActionTag::Idle,
            move_step: profile.move_step,
            hit_points: profile.hit_points.max(1),
            stepped_this_tick: false,
            completion_pending: true,
            hook,
            picker: self
                .picker
                .unwrap_or_else(|| Box::new(RandomAttackPicker)),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::assets::MemoryFrameSource;

    const FRAMES: u32 = 4;

    #[derive(Debug)]
    struct FixedPicker(ActionTag);

    impl AttackPicker for FixedPicker {
        fn pick(&mut self, choices: &[ActionTag]) -> Option<ActionTag> {
            choices.contains(&self.0).then_some(self.0)
        }
    }

    #[derive(Debug, Default, Clone)]
    struct CountingHook {
        fired: Rc<Cell<u32>>,
    }

    impl CompletionHook for CountingHook {
        fn on_complete(&mut self, _completion: &Completion) -> Option<ActorEffect> {
            self.fired.set(self.fired.get() + 1);
            None
        }
    }

    fn builder(kind: ActorKind) -> (ActorBuilder, MemoryFrameSource) {
        let profile = kind.profile();
        let source = MemoryFrameSource::placeholder_for(&profile, FRAMES);
        let builder = ActorBuilder::new(kind).attack_picker(FixedPicker(profile.attack_tags[0]));
        (builder, source)
    }

    fn actor(kind: ActorKind) -> Actor {
        let (builder, mut source) = builder(kind);
        builder.build(&mut source).expect("actor")
    }

    fn play_through(actor: &mut Actor) -> Vec<ActorEffect> {
        let mut effects = Vec::new();
        for _ in 0..FRAMES {
            effects.extend(actor.update());
        }
        assert!(actor.active_finished());
        effects
    }

    #[test]
    fn starts_idle_facing_right_at_spawn() {
        let (builder, mut source) = builder(ActorKind::Zombie);
        let zombie = builder
            .at(Position::new(640, 500))
            .build(&mut source)
            .expect("zombie");

        assert_eq!(zombie.current_tag(), ActionTag::Idle);
        assert_eq!(zombie.direction(), Direction::Right);
        assert_eq!(zombie.position(), Position::new(640, 500));
        assert_eq!(zombie.bounds(), Rect::new(640, 500, 96, 96));
        assert_eq!(zombie.cursor(), 0);
        assert!(zombie.is_alive());
        assert!(zombie.is_hostile());
    }

    #[test]
    fn uninterruptible_attack_rejects_intents_until_finished() {
        let mut archer = actor(ActorKind::Archer);
        assert!(archer.attack());
        assert_eq!(archer.current_tag(), ActionTag::Shot1);

        archer.update();
        let before = (archer.current_tag(), archer.direction(), archer.position());
        for intent in [
            Intent::Idle,
            Intent::MoveLeft,
            Intent::MoveRight,
            Intent::Attack,
            Intent::EvadeLeft,
        ] {
            assert!(!archer.apply_intent(intent), "intent={intent:?}");
            assert_eq!(
                (archer.current_tag(), archer.direction(), archer.position()),
                before
            );
        }
        assert_eq!(archer.cursor(), 1);

        for _ in 1..FRAMES {
            archer.update();
        }
        assert!(archer.move_left());
        assert_eq!(archer.current_tag(), ActionTag::Walk);
        assert_eq!(archer.direction(), Direction::Left);
    }

    #[test]
    fn interruptible_walk_yields_immediately() {
        let mut archer = actor(ActorKind::Archer);
        assert!(archer.move_right());
        archer.update();
        assert!(archer.attack());
        assert_eq!(archer.current_tag(), ActionTag::Shot1);
        assert_eq!(archer.cursor(), 0);
    }

    #[test]
    fn idle_while_idle_and_finished_restarts_the_cycle() {
        let mut zombie = actor(ActorKind::Zombie);
        play_through(&mut zombie);
        assert_eq!(zombie.cursor(), FRAMES as usize);

        assert!(zombie.idle());
        assert_eq!(zombie.cursor(), 0);
        assert!(zombie.idle());
        assert_eq!(zombie.cursor(), 0);
        assert_eq!(zombie.current_tag(), ActionTag::Idle);
    }

    #[test]
    fn idle_mid_cycle_keeps_playing() {
        let mut zombie = actor(ActorKind::Zombie);
        zombie.update();
        zombie.update();
        assert!(zombie.idle());
        assert_eq!(zombie.cursor(), 2);
    }

    #[test]
    fn ranged_completion_spawns_exactly_one_projectile_per_playthrough() {
        let mut archer = actor(ActorKind::Archer);
        assert!(archer.attack());

        let mut effects = play_through(&mut archer);
        for _ in 0..5 {
            effects.extend(archer.update());
        }
        assert_eq!(effects.len(), 1);
        let ActorEffect::SpawnProjectile(projectile) = &effects[0];
        assert_eq!(projectile.direction(), Direction::Right);
        assert_eq!(projectile.position(), archer.bounds().center());

        assert!(archer.attack());
        assert_eq!(play_through(&mut archer).len(), 1);
    }

    #[test]
    fn completion_hook_fires_once_even_for_looping_tags() {
        let hook = CountingHook::default();
        let fired = Rc::clone(&hook.fired);
        let (builder, mut source) = builder(ActorKind::Skeleton);
        let mut skeleton = builder
            .completion_hook(hook)
            .build(&mut source)
            .expect("skeleton");

        play_through(&mut skeleton);
        skeleton.update();
        skeleton.update();
        assert_eq!(fired.get(), 1);

        assert!(skeleton.idle());
        play_through(&mut skeleton);
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn melee_attack_completion_has_no_effect() {
        let mut zombie = actor(ActorKind::Zombie);
        assert!(zombie.attack());
        assert_eq!(zombie.current_tag(), ActionTag::Attack1);
        assert!(play_through(&mut zombie).is_empty());
    }

    #[test]
    fn walking_steps_once_per_tick_including_the_transition_tick() {
        let mut zombie = actor(ActorKind::Zombie);
        let step = zombie.move_step();

        assert!(zombie.move_right());
        assert_eq!(zombie.position().x, step);
        zombie.update();
        assert_eq!(zombie.position().x, step);
        zombie.update();
        assert_eq!(zombie.position().x, 2 * step);

        assert!(zombie.move_right());
        zombie.update();
        assert_eq!(zombie.position().x, 3 * step);

        assert!(zombie.move_left());
        assert_eq!(zombie.position().x, 2 * step);
        zombie.update();
        assert_eq!(zombie.position().x, 2 * step);
    }

    #[test]
    fn walking_saturates_at_the_coordinate_limits() {
        let (right_builder, mut source) = builder(ActorKind::Zombie);
        let mut zombie = right_builder
            .at(Position::new(i32::MAX - 1, 0))
            .build(&mut source)
            .expect("zombie");

        assert!(zombie.move_right());
        zombie.update();
        zombie.update();
        assert_eq!(zombie.position().x, i32::MAX);

        let (left_builder, mut source) = builder(ActorKind::Zombie);
        let mut zombie = left_builder
            .at(Position::new(i32::MIN + 1, 0))
            .facing(Direction::Left)
            .build(&mut source)
            .expect("zombie");

        assert!(zombie.move_left());
        zombie.update();
        assert_eq!(zombie.position().x, i32::MIN);
    }

    #[test]
    fn idle_does_not_move() {
        let mut zombie = actor(ActorKind::Zombie);
        for _ in 0..10 {
            zombie.idle();
            zombie.update();
        }
        assert_eq!(zombie.position(), Position::default());
    }

    #[test]
    fn left_sequences_are_mirrors_of_right_ones() {
        let archer = actor(ActorKind::Archer);
        for &tag in ActorKind::Archer.profile().tags {
            let right = archer.sequence(tag, Direction::Right).expect("right");
            let left = archer.sequence(tag, Direction::Left).expect("left");
            assert_eq!(right.frame_count(), left.frame_count(), "tag={tag}");
            for (r, l) in right.frames().iter().zip(left.frames()) {
                assert_eq!(&r.mirrored(), l, "tag={tag}");
            }
        }
    }

    #[test]
    fn turning_around_displays_left_frames() {
        let mut archer = actor(ActorKind::Archer);
        assert!(archer.move_left());
        archer.update();
        let expected = archer
            .sequence(ActionTag::Walk, Direction::Left)
            .expect("left walk")
            .frames()[0]
            .clone();
        assert_eq!(archer.current_frame(), &expected);
    }

    #[test]
    fn evasion_moves_and_is_interruptible() {
        let mut archer = actor(ActorKind::Archer);
        assert!(archer.evade_left());
        assert_eq!(archer.current_tag(), ActionTag::Evasion);
        assert_eq!(archer.position().x, -archer.move_step());
        archer.update();
        archer.update();
        assert_eq!(archer.position().x, -2 * archer.move_step());
        assert!(archer.move_right());
        assert_eq!(archer.current_tag(), ActionTag::Walk);
    }

    #[test]
    fn variants_without_evasion_ignore_evade() {
        let mut zombie = actor(ActorKind::Zombie);
        assert!(!zombie.evade_right());
        assert_eq!(zombie.current_tag(), ActionTag::Idle);
        assert_eq!(zombie.position(), Position::default());
    }

    #[test]
    fn hits_hurt_then_kill_and_the_dead_stay_inert() {
        let mut zombie = actor(ActorKind::Zombie);
        assert_eq!(
            zombie.hit(),
            HitOutcome::Hurt {
                remaining_hit_points: 1
            }
        );
        assert_eq!(zombie.current_tag(), ActionTag::Hurt);
        assert!(!zombie.move_left());

        assert_eq!(zombie.hit(), HitOutcome::Killed);
        assert_eq!(zombie.current_tag(), ActionTag::Dead);
        assert!(!zombie.is_alive());
        assert_eq!(zombie.hit(), HitOutcome::Ignored);

        play_through(&mut zombie);
        assert!(zombie.is_spent());
        for intent in [Intent::Idle, Intent::MoveRight, Intent::Attack] {
            assert!(!zombie.apply_intent(intent));
        }
        assert_eq!(zombie.current_tag(), ActionTag::Dead);
    }

    #[test]
    fn hit_lands_mid_attack() {
        let mut zombie = actor(ActorKind::Zombie);
        zombie.attack();
        zombie.update();
        assert!(matches!(zombie.hit(), HitOutcome::Hurt { .. }));
        assert_eq!(zombie.current_tag(), ActionTag::Hurt);
        assert_eq!(zombie.cursor(), 0);
    }

    #[test]
    fn missing_sheet_fails_construction_with_the_tag() {
        let (builder, mut source) = builder(ActorKind::Zombie);
        source.remove("zombie", "hurt");

        let error = builder.build(&mut source).expect_err("missing hurt");

        match error {
            ActorBuildError::TagLoad { kind, tag, .. } => {
                assert_eq!(kind, ActorKind::Zombie);
                assert_eq!(tag, ActionTag::Hurt);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn profile_that_uses_an_undeclared_tag_is_rejected() {
        let profile = ActorProfile {
            tags: &[ActionTag::Idle, ActionTag::Walk, ActionTag::Hurt],
            ..ActorKind::Zombie.profile()
        };
        let mut source = MemoryFrameSource::placeholder_for(&profile, FRAMES);

        let error = ActorBuilder::from_profile(profile)
            .build(&mut source)
            .expect_err("dead is undeclared");

        assert!(matches!(
            error,
            ActorBuildError::UndeclaredTag {
                tag: ActionTag::Dead,
                ..
            }
        ));
    }

    #[test]
    fn missing_projectile_sheet_fails_construction() {
        let (builder, mut source) = builder(ActorKind::Archer);
        source.remove("archer", "arrow");

        let error = builder.build(&mut source).expect_err("arrow missing");

        assert!(matches!(error, ActorBuildError::ProjectileLoad { .. }));
    }
}
