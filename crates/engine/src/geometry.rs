/// Pixel position in field space. Actors use it as their top-left corner,
/// projectiles as their centre point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle; `x`/`y` is the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_top_left(top_left: Position, width: u32, height: u32) -> Self {
        Self::new(top_left.x, top_left.y, width, height)
    }

    pub fn centered_on(center: Position, width: u32, height: u32) -> Self {
        Self::new(
            center.x - (width / 2) as i32,
            center.y - (height / 2) as i32,
            width,
            height,
        )
    }

    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    pub fn center(&self) -> Position {
        Position::new(
            self.x + (self.width / 2) as i32,
            self.y + (self.height / 2) as i32,
        )
    }

    /// Strict overlap: rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Size of the visible play field in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldBounds {
    pub width: u32,
    pub height: u32,
}

impl FieldBounds {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when no part of `rect` is inside the field horizontally.
    pub fn is_outside_horizontally(&self, rect: &Rect) -> bool {
        rect.right() <= 0 || rect.x >= self.width as i32
    }
}
