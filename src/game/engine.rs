use rand::rngs::ThreadRng;

use super::collision;
use super::config::GameConfig;
use super::direction::{Command, Direction};
use super::food;
use super::grid::{Grid, Position};
use super::snake::Snake;

/// Phase of one round. `Lost` is terminal for the round; only the mode
/// layer's restart leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Menu,
    Running,
    Lost,
}

/// What ended the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    Border,
    SelfHit,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// The collision that ended the round, if any
    pub collision: Option<CollisionKind>,
}

/// The game state machine. Owns the snake and the food for one round and
/// advances them one fixed timestep at a time; whoever owns the cadence
/// calls `tick` and stops calling it once the phase is `Lost`.
pub struct Game {
    grid: Grid,
    phase: GamePhase,
    snake: Snake,
    food: Option<Position>,
    score: u32,
    ticks: u32,
    rng: ThreadRng,
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        let grid = Grid::new(config.grid_cols, config.grid_rows);
        Self {
            grid,
            phase: GamePhase::Menu,
            snake: Snake::new(grid.center(), Direction::Right),
            food: None,
            score: 0,
            ticks: 0,
            rng: rand::thread_rng(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Position> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Feed one command into the state machine. Unrecognized or
    /// out-of-phase commands are ignored, never surfaced.
    pub fn handle(&mut self, command: Command) {
        match (self.phase, command) {
            (GamePhase::Menu, Command::Start) => self.start_round(),
            (GamePhase::Running, Command::Turn(direction)) => {
                self.snake.set_pending_direction(direction);
            }
            _ => {}
        }
    }

    /// Return to the menu with a fresh round ready to start
    pub fn reset(&mut self) {
        self.phase = GamePhase::Menu;
        self.snake = Snake::new(self.grid.center(), Direction::Right);
        self.food = None;
        self.score = 0;
        self.ticks = 0;
    }

    fn start_round(&mut self) {
        self.snake = Snake::new(self.grid.center(), Direction::Right);
        self.food = None;
        self.score = 0;
        self.ticks = 0;
        self.phase = GamePhase::Running;
    }

    /// Advance the simulation by one fixed timestep. Order is load-bearing:
    /// buffered input applies first, then the snake moves, then collisions
    /// are checked against the post-move state; eating never happens on a
    /// collision tick, and food eaten this tick respawns on the next one.
    pub fn tick(&mut self) -> TickReport {
        if self.phase != GamePhase::Running {
            return TickReport::default();
        }

        self.snake.apply_pending_direction();
        self.snake.advance();
        self.ticks += 1;

        let head = self.snake.head_position();
        if let Some(kind) = self.check_collision(head) {
            self.phase = GamePhase::Lost;
            return TickReport {
                ate_food: false,
                collision: Some(kind),
            };
        }

        if self.food.is_none() {
            self.food = food::spawn(&mut self.rng, self.grid, &self.snake);
        }

        let mut ate_food = false;
        if self.food == Some(head) {
            self.snake.grow();
            self.food = None;
            self.score += 1;
            ate_food = true;
        }

        TickReport {
            ate_food,
            collision: None,
        }
    }

    fn check_collision(&self, head: Position) -> Option<CollisionKind> {
        if collision::hits_border(head, self.grid) {
            return Some(CollisionKind::Border);
        }
        if collision::hits_self(head, self.snake.segments()) {
            return Some(CollisionKind::SelfHit);
        }
        None
    }

    /// Drop food directly in front of the head; test hook
    #[cfg(test)]
    fn place_food_ahead(&mut self) -> Position {
        let target = self.snake.head_position().step(self.snake.direction());
        self.food = Some(target);
        target
    }
}
