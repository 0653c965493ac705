//! Input module - keyboard and mouse handling for game controls

pub mod handler;

pub use handler::{direction_for_key, is_start_key, should_quit, SwipeEvent, SwipeTracker};
