impl ZombieLandScene {
    /// Builds the hero and the opening wave. Any missing sheet fails here,
    /// before a window is opened.
    pub(crate) fn new(
        settings: SceneSettings,
        mut frames: Box<dyn FrameSource>,
        background: Option<Frame>,
    ) -> Result<Self, ActorBuildError> {
        let hero = build_actor(
            frames.as_mut(),
            &settings,
            0,
            ActorKind::Archer,
            standing_position(settings.hero_spawn_x, settings.ground_y, ActorKind::Archer),
            Direction::Right,
        )?;
        let spawn_rng = match settings.spawn_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut scene = Self {
            settings,
            frames,
            hero,
            zombies: Vec::new(),
            projectiles: ProjectileSet::new(),
            spawn_rng,
            background,
            actors_built: 1,
            tick: 0,
            total_kills: 0,
        };
        for _ in 0..settings.initial_zombies {
            scene.spawn_zombie()?;
        }
        Ok(scene)
    }

    fn spawn_zombie(&mut self) -> Result<(), ActorBuildError> {
        let cell_width = ActorKind::Zombie.profile().cell_width;
        let x = spawn_x_in_right_half(&mut self.spawn_rng, self.settings.field, cell_width);
        let zombie = build_actor(
            self.frames.as_mut(),
            &self.settings,
            self.actors_built,
            ActorKind::Zombie,
            standing_position(x, self.settings.ground_y, ActorKind::Zombie),
            Direction::Left,
        )?;
        self.actors_built += 1;
        self.zombies.push(zombie);
        info!(x, zombie_count = self.zombies.len(), "zombie_spawned");
        Ok(())
    }

    fn clear_dead(&mut self) -> usize {
        let before = self.zombies.len();
        self.zombies.retain(Actor::is_alive);
        before - self.zombies.len()
    }

    fn advance_tick(&mut self, input: &InputSnapshot) -> SceneCommand {
        if input.quit_requested() {
            return SceneCommand::Quit;
        }
        self.tick += 1;
        self.remove_finished_zombies();

        match hero_command(input) {
            HeroCommand::SpawnZombie => {
                if let Err(error) = self.spawn_zombie() {
                    warn!(error = %error, "zombie_spawn_failed");
                }
            }
            HeroCommand::ClearDead => {
                let cleared = self.clear_dead();
                info!(cleared, "dead_zombies_cleared");
            }
            HeroCommand::Act(intent) => {
                self.hero.apply_intent(intent);
            }
        }

        let reach = self.settings.zombie_reach;
        for zombie in self.zombies.iter_mut().filter(|zombie| zombie.is_alive()) {
            let intent = zombie_intent(zombie, &self.hero, reach);
            zombie.apply_intent(intent);
        }

        let mut effects: Vec<ActorEffect> = self.hero.update().into_iter().collect();
        for zombie in &mut self.zombies {
            effects.extend(zombie.update());
        }
        for effect in effects {
            match effect {
                ActorEffect::SpawnProjectile(projectile) => self.projectiles.spawn(projectile),
            }
        }

        let report = self.projectiles.tick(self.settings.field, &mut self.zombies);
        if report.kills > 0 {
            self.total_kills += report.kills;
            info!(
                kills = report.kills,
                total_kills = self.total_kills,
                tick = self.tick,
                "zombies_killed"
            );
        }

        if report.pruned > 0 {
            debug!(pruned = report.pruned, tick = self.tick, "projectiles_pruned");
        }
        SceneCommand::None
    }

    /// Drops zombies whose death sequence finished on an earlier tick, so the
    /// last death frame is drawn at least once, along with any that left the field.
    fn remove_finished_zombies(&mut self) {
        let field = self.settings.field;
        let before = self.zombies.len();
        self.zombies
            .retain(|zombie| !zombie.is_spent() && !field.is_outside_horizontally(&zombie.bounds()));
        let removed = before - self.zombies.len();
        if removed > 0 {
            debug!(removed, tick = self.tick, "zombies_removed");
        }
    }

    fn living_zombies(&self) -> usize {
        self.zombies.iter().filter(|zombie| zombie.is_alive()).count()
    }
}

impl Scene for ZombieLandScene {
    fn load(&mut self) {
        info!(
            zombies = self.zombies.len(),
            hero_x = self.hero.position().x,
            ground_y = self.settings.ground_y,
            "zombie_land_loaded"
        );
    }

    fn update(&mut self, _fixed_dt_seconds: f32, input: &InputSnapshot) -> SceneCommand {
        self.advance_tick(input)
    }

    fn draw(&self, draws: &mut Vec<SpriteDraw>) {
        let hero = self.hero.position();
        draws.push(SpriteDraw::top_left(
            self.hero.current_frame().clone(),
            hero.x,
            hero.y,
        ));
        for zombie in &self.zombies {
            let position = zombie.position();
            draws.push(SpriteDraw::top_left(
                zombie.current_frame().clone(),
                position.x,
                position.y,
            ));
        }
        for projectile in self.projectiles.live_projectiles() {
            let position = projectile.position();
            draws.push(SpriteDraw::centered(
                projectile.frame().clone(),
                position.x,
                position.y,
            ));
        }
    }

    fn unload(&mut self) {
        self.projectiles.clear();
        info!(
            ticks = self.tick,
            total_kills = self.total_kills,
            "zombie_land_unloaded"
        );
    }

    fn background(&self) -> Option<Frame> {
        self.background.clone()
    }

    fn entity_count(&self) -> usize {
        1 + self.zombies.len() + self.projectiles.len()
    }

    fn debug_title(&self) -> Option<String> {
        Some(format!(
            "Zombie Land | zombies: {} | kills: {}",
            self.living_zombies(),
            self.total_kills
        ))
    }
}
