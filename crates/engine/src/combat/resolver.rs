use tracing::debug;

use super::Projectile;
use crate::actor::{Actor, HitOutcome};
use crate::geometry::FieldBounds;

/// What one collision tick did, for logging and scene bookkeeping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub hits: usize,
    pub kills: usize,
    pub pruned: usize,
}

/// Live projectiles in spawn order.
#[derive(Debug, Default, Clone)]
pub struct ProjectileSet {
    projectiles: Vec<Projectile>,
}

impl ProjectileSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, projectile: Projectile) {
        self.projectiles.push(projectile);
    }

    /// Moves every projectile, then tests each live one against the living
    /// hostiles in `actors`. A projectile lands on the first hostile it
    /// overlaps and is consumed; anything no longer alive is dropped.
    pub fn tick(&mut self, field: FieldBounds, actors: &mut [Actor]) -> TickReport {
        let mut report = TickReport::default();
        for projectile in &mut self.projectiles {
            projectile.update(field);
        }

        for projectile in self.projectiles.iter_mut().filter(|p| p.is_alive()) {
            let target = actors
                .iter_mut()
                .filter(|actor| actor.is_hostile() && actor.is_alive())
                .find(|actor| projectile.hit_test(actor));
            let Some(target) = target else {
                continue;
            };
            let outcome = target.hit();
            projectile.consume();
            report.hits += 1;
            if outcome == HitOutcome::Killed {
                report.kills += 1;
            }
            debug!(
                kind = %target.kind(),
                x = projectile.position().x,
                ?outcome,
                "projectile_hit"
            );
        }

        let before = self.projectiles.len();
        self.projectiles.retain(Projectile::is_alive);
        report.pruned = before - self.projectiles.len() - report.hits;
        report
    }

    pub fn live_projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }

    pub fn clear(&mut self) {
        self.projectiles.clear();
    }
}
