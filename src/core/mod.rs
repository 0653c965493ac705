//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and spawn
//! logic. It has no dependencies on rendering or terminal I/O:
//!
//! - **Deterministic**: same seed and action sequence replay identically
//! - **Testable**: every rule is exercised without a timer or render harness
//! - **Single-writer**: all mutation flows through [`GameEngine::apply`]
//!
//! # Module Structure
//!
//! - [`board`]: grid geometry derived from the terminal viewport
//! - [`engine`]: action application - start, direction changes, ticks
//! - [`rng`]: seedable LCG for food/power-up placement
//! - [`snapshot`]: the read-only view handed to the renderer
//! - [`state`]: the plain value types the engine operates on
//! - [`store`]: injected high-score persistence

pub mod board;
pub mod engine;
pub mod rng;
pub mod snapshot;
pub mod state;
pub mod store;

// Re-export commonly used types for convenience
pub use board::Board;
pub use engine::GameEngine;
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
pub use state::{Coord, GameState, PowerUp, Snake};
pub use store::{FileScoreStore, MemoryScoreStore, ScoreStore};
