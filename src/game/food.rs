use rand::seq::SliceRandom;
use rand::Rng;

use super::grid::{Grid, Position};
use super::snake::Snake;

/// Pick a food tile uniformly at random among tiles the snake does not
/// occupy. The full occupancy set is excluded up front, so food can never
/// land on the head or any segment. Returns `None` when the snake covers
/// the whole field; the caller skips the spawn and retries next tick.
pub fn spawn<R: Rng + ?Sized>(rng: &mut R, grid: Grid, snake: &Snake) -> Option<Position> {
    let free: Vec<Position> = grid.tiles().filter(|&p| !snake.occupies(p)).collect();
    free.choose(rng).copied()
}
