use crate::actor::Actor;
use crate::anim::{Direction, Frame};
use crate::geometry::{FieldBounds, Position, Rect};

/// A straight-flying shot. `position` is the centre of its frame.
#[derive(Debug, Clone)]
pub struct Projectile {
    position: Position,
    direction: Direction,
    speed: u32,
    frame: Frame,
    alive: bool,
}

impl Projectile {
    pub fn new(position: Position, direction: Direction, speed: u32, frame: Frame) -> Self {
        Self {
            position,
            direction,
            speed,
            frame,
            alive: true,
        }
    }

    /// Moves one tick and retires the projectile once it is clear of the
    /// field by its own width plus one tick of travel.
    pub fn update(&mut self, field: FieldBounds) {
        if !self.alive {
            return;
        }
        let travel = i32::try_from(self.speed).unwrap_or(i32::MAX);
        self.position.x = self
            .position
            .x
            .saturating_add(self.direction.sign().saturating_mul(travel));
        if self.is_past(field) {
            self.alive = false;
        }
    }

    fn is_past(&self, field: FieldBounds) -> bool {
        let margin = i64::from(self.frame.width()) + i64::from(self.speed);
        let x = i64::from(self.position.x);
        match self.direction {
            Direction::Right => x > i64::from(field.width) + margin,
            Direction::Left => x < -margin,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::centered_on(self.position, self.frame.width(), self.frame.height())
    }

    pub fn hit_test(&self, actor: &Actor) -> bool {
        self.bounds().intersects(&actor.bounds())
    }

    pub fn consume(&mut self) {
        self.alive = false;
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }
}
