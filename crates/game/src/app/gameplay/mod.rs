use actor_engine::{
    Actor, ActorBuildError, ActorBuilder, ActorEffect, ActorKind, Direction, FieldBounds, Frame,
    FrameSource, InputAction, InputSnapshot, Intent, Position, ProjectileSet, RandomAttackPicker,
    Scene, SceneCommand, SeededAttackPicker, SpriteDraw,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use super::config::GameConfig;

include!("types.rs");
include!("systems.rs");
include!("scene_impl.rs");
