use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stdout, stdout};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{GameConfig, GameEngine, GameState, StatusUpdate};
use crate::input::{InputHandler, KeyAction};
use crate::render::Renderer;
use crate::score::ScoreStore;

/// Interactive play: one session per process, driven by a fixed-cadence
/// simulation tick.
pub struct PlayMode<S: ScoreStore> {
    engine: GameEngine<S>,
    state: GameState,
    status: StatusUpdate,
    renderer: Renderer,
    input_handler: InputHandler,
    tick_interval: Duration,
    should_quit: bool,
}

impl<S: ScoreStore> PlayMode<S> {
    pub fn new(config: GameConfig, store: S) -> Self {
        let tick_interval = config.tick_interval();
        let mut engine = GameEngine::new(config, store);
        let (state, status) = engine.new_session();

        Self {
            engine,
            state,
            status,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            tick_interval,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // The quit signal ends the loop only after the candidate score has
        // been offered to the store
        self.engine.end_session(&self.state);

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Simulation advances one cell per tick, wall-clock drift ignored
        let mut tick_timer = interval(self.tick_interval);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    if self.state.is_running() {
                        let result = self.engine.tick(&mut self.state);
                        if let Some(status) = result.status {
                            self.status = status;
                        }
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.status);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(direction) => {
                    self.state.steer(direction);
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, GamePhase};
    use crate::score::MemoryScoreStore;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn test_mode() -> PlayMode<MemoryScoreStore> {
        PlayMode::new(GameConfig::default(), MemoryScoreStore::with_high_score(3))
    }

    #[test]
    fn test_initial_session() {
        let mode = test_mode();
        assert_eq!(mode.state.phase, GamePhase::NotStarted);
        assert_eq!(
            mode.status,
            StatusUpdate {
                score: 0,
                high_score: 3
            }
        );
        assert!(!mode.should_quit);
    }

    #[test]
    fn test_key_event_steers_snake() {
        let mut mode = test_mode();
        let down = Event::Key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));

        mode.handle_event(down);
        assert_eq!(mode.state.phase, GamePhase::Running);
        assert_eq!(mode.state.snake.direction(), Some(Direction::Down));
    }

    #[test]
    fn test_quit_key_stops_loop() {
        let mut mode = test_mode();
        let q = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));

        mode.handle_event(q);
        assert!(mode.should_quit);
    }
}
