use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use super::{
    config::GameConfig,
    food::Food,
    snake::{CollisionType, Snake},
    state::{GamePhase, GameState},
};
use crate::score::ScoreStore;

/// Score surface shown to the player, emitted at session start and on every
/// score change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusUpdate {
    pub score: u32,
    pub high_score: u32,
}

/// Result of a simulation tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Terminal collision, if one occurred
    pub collision: Option<CollisionType>,
    /// New status surface, if the score changed
    pub status: Option<StatusUpdate>,
}

impl TickResult {
    fn idle() -> Self {
        Self {
            ate_food: false,
            collision: None,
            status: None,
        }
    }
}

/// The game engine: advances the simulation one tick at a time and keeps
/// the high score in sync with the injected store.
pub struct GameEngine<S: ScoreStore> {
    config: GameConfig,
    store: S,
    rng: StdRng,
    high_score: u32,
}

impl<S: ScoreStore> GameEngine<S> {
    /// Create an engine; the persisted high score is loaded once, here
    pub fn new(config: GameConfig, store: S) -> Self {
        Self::with_rng(config, store, StdRng::from_entropy())
    }

    /// Create an engine with a fixed random seed, for deterministic runs
    pub fn with_seed(config: GameConfig, store: S, seed: u64) -> Self {
        Self::with_rng(config, store, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, store: S, rng: StdRng) -> Self {
        let high_score = store.load();
        Self {
            config,
            store,
            rng,
            high_score,
        }
    }

    /// The best score seen so far, persisted or in-session
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Start a fresh session: a one-segment snake on the centre cell,
    /// food on a random free cell, no movement until the first input.
    pub fn new_session(&mut self) -> (GameState, StatusUpdate) {
        let snake = Snake::new(self.config.start_position());
        let food = Food::spawn(self.config.grid_size, &snake, &mut self.rng);
        let state = GameState::new(snake, food, self.config.grid_size);

        let status = StatusUpdate {
            score: 0,
            high_score: self.high_score,
        };
        (state, status)
    }

    /// Advance the simulation by exactly one cell.
    ///
    /// Strictly in order: apply the buffered direction and move; check for
    /// a terminal collision against the post-move state; otherwise resolve
    /// food consumption (growth, score, high-score persistence, food
    /// relocation). Ticks outside the running phase do nothing.
    pub fn tick(&mut self, state: &mut GameState) -> TickResult {
        if state.phase != GamePhase::Running {
            return TickResult::idle();
        }

        state.snake.advance();

        if let Some(collision) = state.snake.check_collision(state.grid_size) {
            state.phase = GamePhase::GameOver;
            self.store.save(state.snake.score);

            return TickResult {
                ate_food: false,
                collision: Some(collision),
                status: None,
            };
        }

        if state.snake.head() != state.food.position {
            return TickResult::idle();
        }

        state.snake.grow();
        state.snake.score += 1;

        if state.snake.score > self.high_score {
            self.high_score = state.snake.score;
            info!(high_score = self.high_score, "new high score");
            self.store.save(self.high_score);
        }

        state
            .food
            .relocate(state.grid_size, &state.snake, &mut self.rng);

        TickResult {
            ate_food: true,
            collision: None,
            status: Some(StatusUpdate {
                score: state.snake.score,
                high_score: self.high_score,
            }),
        }
    }

    /// Persist the session score as a candidate high score. Called when the
    /// player quits; a no-op for the store unless the score beats it.
    pub fn end_session(&mut self, state: &GameState) {
        self.store.save(state.snake.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Position};
    use crate::score::MemoryScoreStore;

    fn test_engine(high_score: u32) -> GameEngine<MemoryScoreStore> {
        GameEngine::with_seed(
            GameConfig::default(),
            MemoryScoreStore::with_high_score(high_score),
            13,
        )
    }

    #[test]
    fn test_new_session() {
        let mut engine = test_engine(4);
        let (state, status) = engine.new_session();

        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), Position::new(7, 7));
        assert!(!state.snake.occupies(state.food.position));
        assert!(state.food.position.is_in_bounds(15));
        assert_eq!(
            status,
            StatusUpdate {
                score: 0,
                high_score: 4
            }
        );
    }

    #[test]
    fn test_tick_before_start_is_idle() {
        let mut engine = test_engine(0);
        let (mut state, _) = engine.new_session();

        let result = engine.tick(&mut state);
        assert_eq!(result, TickResult::idle());
        assert_eq!(state.snake.head(), Position::new(7, 7));
        assert_eq!(state.phase, GamePhase::NotStarted);
    }

    #[test]
    fn test_wall_collision_on_eighth_advance() {
        // From (7,7) heading Right on a 15x15 grid: seven ticks reach
        // x = 14, the eighth leaves the grid
        let mut engine = test_engine(0);
        let (mut state, _) = engine.new_session();
        state.food.position = Position::new(0, 0);
        state.steer(Direction::Right);

        for i in 1..=7 {
            let result = engine.tick(&mut state);
            assert_eq!(result.collision, None);
            assert_eq!(state.snake.head(), Position::new(7 + i, 7));
        }

        let result = engine.tick(&mut state);
        assert_eq!(result.collision, Some(CollisionType::Wall));
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_ticks_halt_after_game_over() {
        let mut engine = test_engine(0);
        let (mut state, _) = engine.new_session();
        state.food.position = Position::new(0, 0);
        state.steer(Direction::Right);

        for _ in 0..8 {
            engine.tick(&mut state);
        }
        assert!(state.is_over());

        let snapshot = state.clone();
        let result = engine.tick(&mut state);
        assert_eq!(result, TickResult::idle());
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_food_consumption() {
        let mut engine = test_engine(0);
        let (mut state, _) = engine.new_session();
        state.steer(Direction::Right);
        state.food.position = Position::new(8, 7);
        let old_food = state.food.position;

        let result = engine.tick(&mut state);

        assert!(result.ate_food);
        assert_eq!(state.snake.score, 1);
        assert_eq!(state.snake.len(), 2);
        assert_ne!(state.food.position, old_food);
        assert!(!state.snake.occupies(state.food.position));
        assert_eq!(
            result.status,
            Some(StatusUpdate {
                score: 1,
                high_score: 1
            })
        );
    }

    #[test]
    fn test_high_score_not_beaten_is_not_saved() {
        let mut engine = test_engine(5);
        let (mut state, _) = engine.new_session();
        state.steer(Direction::Right);
        state.food.position = Position::new(8, 7);

        let result = engine.tick(&mut state);

        assert_eq!(
            result.status,
            Some(StatusUpdate {
                score: 1,
                high_score: 5
            })
        );
        assert_eq!(engine.high_score(), 5);
        assert_eq!(engine.store.load(), 5);
    }

    #[test]
    fn test_high_score_persisted_when_surpassed() {
        let mut engine = test_engine(1);
        let (mut state, _) = engine.new_session();
        state.steer(Direction::Right);

        // Eat three food items in a straight line
        for i in 1..=3 {
            state.food.position = Position::new(7 + i, 7);
            let result = engine.tick(&mut state);
            assert!(result.ate_food);
        }

        assert_eq!(state.snake.score, 3);
        assert_eq!(engine.high_score(), 3);
        assert_eq!(engine.store.load(), 3);
    }

    #[test]
    fn test_game_over_saves_candidate_score() {
        let mut engine = test_engine(0);
        let (mut state, _) = engine.new_session();
        state.steer(Direction::Right);
        state.food.position = Position::new(8, 7);

        engine.tick(&mut state);
        assert_eq!(engine.store.load(), 1);

        // Run into the right wall; the final save must not lower the store
        while !state.is_over() {
            engine.tick(&mut state);
        }
        assert_eq!(engine.store.load(), 1);
    }

    #[test]
    fn test_end_session_saves_candidate_score() {
        let mut engine = test_engine(0);
        let (mut state, _) = engine.new_session();
        state.steer(Direction::Right);
        state.food.position = Position::new(8, 7);
        engine.tick(&mut state);

        engine.end_session(&state);
        assert_eq!(engine.store.load(), 1);
    }

    #[test]
    fn test_fresh_session_down_scenario() {
        let mut engine = test_engine(0);
        let (mut state, _) = engine.new_session();
        state.food.position = Position::new(0, 0);

        state.steer(Direction::Down);
        assert!(state.snake.started());
        assert_eq!(state.snake.direction(), Some(Direction::Down));

        engine.tick(&mut state);
        assert_eq!(state.snake.head(), Position::new(7, 8));
        assert_eq!(state.snake.len(), 1);
    }

    #[test]
    fn test_collision_skips_food_check() {
        // Food sits just outside the wall the snake crashes into; the crash
        // must not count as a meal
        let mut engine = test_engine(0);
        let (mut state, _) = engine.new_session();
        state.steer(Direction::Right);
        state.food.position = Position::new(14, 7);

        for _ in 0..7 {
            engine.tick(&mut state);
        }
        assert_eq!(state.snake.score, 1);

        state.food.position = Position::new(15, 7);
        let result = engine.tick(&mut state);
        assert_eq!(result.collision, Some(CollisionType::Wall));
        assert!(!result.ate_food);
        assert_eq!(state.snake.score, 1);
    }
}
