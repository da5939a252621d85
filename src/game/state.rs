use super::direction::Direction;
use super::food::Food;
use super::snake::Snake;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one cell in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// Check if the position lies within a square grid of the given size
    pub fn is_in_bounds(&self, grid_size: usize) -> bool {
        self.x >= 0 && self.x < grid_size as i32 && self.y >= 0 && self.y < grid_size as i32
    }
}

/// Lifecycle of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Snake exists but has not received its first directional input
    NotStarted,
    /// Ticks advance the simulation
    Running,
    /// Terminal state after a wall or self collision
    GameOver,
}

/// Complete game state for one session
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub grid_size: usize,
    pub phase: GamePhase,
}

impl GameState {
    pub fn new(snake: Snake, food: Food, grid_size: usize) -> Self {
        Self {
            snake,
            food,
            grid_size,
            phase: GamePhase::NotStarted,
        }
    }

    /// Feed a directional input to the snake.
    ///
    /// The first accepted input starts the session. Inputs after game over
    /// are ignored.
    pub fn steer(&mut self, requested: Direction) {
        if self.phase == GamePhase::GameOver {
            return;
        }

        self.snake.set_direction(requested);

        if self.phase == GamePhase::NotStarted && self.snake.started() {
            self.phase = GamePhase::Running;
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
