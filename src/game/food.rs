use rand::Rng;

use super::snake::Snake;
use super::state::Position;

/// The food item.
///
/// A session has exactly one food cell; it is relocated, not recreated,
/// each time it is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Spawn food on a random free cell
    pub fn spawn<R: Rng>(grid_size: usize, snake: &Snake, rng: &mut R) -> Self {
        let mut food = Self::new(Position::new(0, 0));
        food.relocate(grid_size, snake, rng);
        food
    }

    /// Move the food to a uniformly random cell not occupied by the snake
    pub fn relocate<R: Rng>(&mut self, grid_size: usize, snake: &Snake, rng: &mut R) {
        loop {
            let x = rng.gen_range(0..grid_size) as i32;
            let y = rng.gen_range(0..grid_size) as i32;
            let pos = Position::new(x, y);

            if !snake.occupies(pos) {
                self.position = pos;
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_spawn_is_in_bounds() {
        let snake = Snake::new(Position::new(2, 2));
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let food = Food::spawn(5, &snake, &mut rng);
            assert!(food.position.is_in_bounds(5));
        }
    }

    #[test]
    fn test_relocate_avoids_snake() {
        // Snake pinned on (0,0); on a 2x2 grid the food must land on one of
        // the three free cells every time
        let snake = Snake::new(Position::new(0, 0));
        let mut rng = StdRng::seed_from_u64(42);
        let mut food = Food::new(Position::new(1, 1));

        for _ in 0..100 {
            food.relocate(2, &snake, &mut rng);
            assert_ne!(food.position, Position::new(0, 0));
        }
    }
}
