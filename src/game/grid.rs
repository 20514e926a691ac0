use super::direction::Direction;

/// A position on the game grid, in tile units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position one tile away in the given direction
    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Playable bounds in tile units. Valid coordinates run from (0, 0) to
/// (max_col, max_row) inclusive; a head strictly beyond either maximum
/// (or below zero) has left the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cols: i32,
    rows: i32,
}

impl Grid {
    pub fn new(cols: i32, rows: i32) -> Self {
        debug_assert!(cols > 0 && rows > 0);
        Self { cols, rows }
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn max_col(&self) -> i32 {
        self.cols - 1
    }

    pub fn max_row(&self) -> i32 {
        self.rows - 1
    }

    /// Center tile, where a fresh snake is placed
    pub fn center(&self) -> Position {
        Position::new(self.cols / 2, self.rows / 2)
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x <= self.max_col() && pos.y >= 0 && pos.y <= self.max_row()
    }

    /// Total number of tiles on the field
    pub fn tile_count(&self) -> usize {
        (self.cols * self.rows) as usize
    }

    /// Iterate every tile position, row-major
    pub fn tiles(&self) -> impl Iterator<Item = Position> + '_ {
        let cols = self.cols;
        (0..self.rows).flat_map(move |y| (0..cols).map(move |x| Position::new(x, y)))
    }
}
