mod hooks;
mod machine;
mod table;
mod variants;

pub use hooks::{
    ActorEffect, AttackPicker, Completion, CompletionHook, NoCompletionEffect, RandomAttackPicker,
    RangedAttackHook, SeededAttackPicker,
};
pub use machine::{Actor, ActorBuildError, ActorBuilder, HitOutcome, Intent};
pub use variants::{
    ActorKind, ActorProfile, ProjectileProfile, ARROW_SPEED, HERO_STEP, ZOMBIE_STEP,
};
