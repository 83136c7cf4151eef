/// What the hero's tick turns into once input priority is applied. Spawning
/// and clearing zombies use the hero's turn, so the hero gets no intent then.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeroCommand {
    SpawnZombie,
    ClearDead,
    Act(Intent),
}

/// The slice of `GameConfig` the scene reads every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SceneSettings {
    pub(crate) field: FieldBounds,
    pub(crate) ground_y: i32,
    pub(crate) hero_spawn_x: i32,
    pub(crate) hero_step: i32,
    pub(crate) zombie_step: i32,
    pub(crate) arrow_speed: u32,
    pub(crate) initial_zombies: u32,
    pub(crate) zombie_hit_points: u32,
    pub(crate) zombie_reach: i32,
    pub(crate) attack_seed: Option<u64>,
    pub(crate) spawn_seed: Option<u64>,
}

impl SceneSettings {
    pub(crate) fn from_config(config: &GameConfig) -> Self {
        Self {
            field: config.field(),
            ground_y: config.ground_y,
            hero_spawn_x: config.hero_spawn_x,
            hero_step: config.hero_step,
            zombie_step: config.zombie_step,
            arrow_speed: config.arrow_speed,
            initial_zombies: config.initial_zombies,
            zombie_hit_points: config.zombie_hit_points,
            zombie_reach: config.zombie_reach,
            attack_seed: config.attack_seed,
            spawn_seed: config.spawn_seed,
        }
    }
}

/// One archer against a growing crowd of zombies.
pub(crate) struct ZombieLandScene {
    settings: SceneSettings,
    frames: Box<dyn FrameSource>,
    hero: Actor,
    zombies: Vec<Actor>,
    projectiles: ProjectileSet,
    spawn_rng: StdRng,
    background: Option<Frame>,
    actors_built: u64,
    tick: u64,
    total_kills: usize,
}
