//! Snake Arcade - a grid-based real-time snake game
//!
//! This library provides:
//! - Core game logic (game module): snake movement, direction buffering,
//!   collision detection, food placement and the per-tick engine
//! - High-score persistence (score module)
//! - Keyboard input mapping (input module)
//! - TUI rendering (render module)
//! - The interactive play loop (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
pub mod score;
