//! Renderable snapshot of a game state.
//!
//! The rendering side never touches `GameState` directly; it gets one of
//! these per frame and reads it. Bundles the board dimensions so the view
//! lays cells out with the same geometry the engine used.

use crate::core::board::Board;
use crate::core::state::{Coord, GameState, PowerUp};
use crate::types::Speed;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub cols: i16,
    pub rows: i16,
    pub snake: Vec<Coord>,
    pub food: Coord,
    pub power_up: Option<PowerUp>,
    pub points: u32,
    pub high_score: u32,
    pub speed: Speed,
    pub invincible_ticks: u32,
    pub double_points_ticks: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn capture(state: &GameState, board: Board) -> Self {
        Self {
            cols: board.cols(),
            rows: board.rows(),
            snake: state.snake.segments().to_vec(),
            food: state.food,
            power_up: state.power_up,
            points: state.points,
            high_score: state.high_score,
            speed: state.speed,
            invincible_ticks: state.invincible_ticks,
            double_points_ticks: state.double_points_ticks,
            game_over: state.game_over,
        }
    }

    pub fn invincible(&self) -> bool {
        self.invincible_ticks > 0
    }
}
