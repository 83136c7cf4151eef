//! Projectiles and the per-tick collision scan against hostile actors.

mod projectile;
mod resolver;

pub use projectile::Projectile;
pub use resolver::{ProjectileSet, TickReport};
