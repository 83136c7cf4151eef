fn hero_command(input: &InputSnapshot) -> HeroCommand {
    if input.was_pressed(InputAction::SpawnHostile) {
        HeroCommand::SpawnZombie
    } else if input.was_pressed(InputAction::ClearDead) {
        HeroCommand::ClearDead
    } else if input.is_down(InputAction::Shoot) {
        HeroCommand::Act(Intent::Attack)
    } else if input.is_down(InputAction::MoveRight) {
        HeroCommand::Act(Intent::MoveRight)
    } else if input.is_down(InputAction::MoveLeft) {
        HeroCommand::Act(Intent::MoveLeft)
    } else if input.is_down(InputAction::EvadeRight) {
        HeroCommand::Act(Intent::EvadeRight)
    } else if input.is_down(InputAction::EvadeLeft) {
        HeroCommand::Act(Intent::EvadeLeft)
    } else {
        HeroCommand::Act(Intent::Idle)
    }
}

/// Zombies shamble toward the hero and swing once they are within `reach`
/// and facing the right way.
fn zombie_intent(zombie: &Actor, hero: &Actor, reach: i32) -> Intent {
    let dx = hero.bounds().center().x - zombie.bounds().center().x;
    let toward = if dx < 0 {
        Direction::Left
    } else {
        Direction::Right
    };
    if dx.abs() <= reach && zombie.direction() == toward {
        Intent::Attack
    } else {
        walk(toward)
    }
}

fn walk(direction: Direction) -> Intent {
    match direction {
        Direction::Left => Intent::MoveLeft,
        Direction::Right => Intent::MoveRight,
    }
}

/// Top-left position that puts an actor's feet on the ground line.
fn standing_position(x: i32, ground_y: i32, kind: ActorKind) -> Position {
    Position::new(x, ground_y - kind.profile().cell_height as i32)
}

/// Random left edge in the right half of the field, keeping the whole cell
/// on screen when the field is wide enough.
fn spawn_x_in_right_half(rng: &mut impl Rng, field: FieldBounds, cell_width: u32) -> i32 {
    let low = field.width / 2;
    let high = field.width.saturating_sub(cell_width).max(low);
    rng.gen_range(low..=high) as i32
}

fn build_actor(
    frames: &mut dyn FrameSource,
    settings: &SceneSettings,
    serial: u64,
    kind: ActorKind,
    position: Position,
    facing: Direction,
) -> Result<Actor, ActorBuildError> {
    let mut builder = ActorBuilder::new(kind)
        .at(position)
        .facing(facing)
        .projectile_speed(settings.arrow_speed);
    builder = match kind {
        ActorKind::Zombie => builder
            .move_step(settings.zombie_step)
            .hit_points(settings.zombie_hit_points),
        ActorKind::Archer | ActorKind::Skeleton => builder.move_step(settings.hero_step),
    };
    builder = match settings.attack_seed {
        Some(seed) => builder.attack_picker(SeededAttackPicker::new(seed.wrapping_add(serial))),
        None => builder.attack_picker(RandomAttackPicker),
    };
    builder.build(frames)
}
