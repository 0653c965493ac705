//! TUI Snake.
//!
//! A real-time grid snake game for the terminal: deterministic core engine
//! under `core`, input mapping under `input`, and crossterm rendering under
//! `term`. The binary in `main.rs` is the host shell that owns the timers
//! and serializes all action dispatch.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
