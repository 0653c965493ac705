//! Game engine module - applies actions to game state
//!
//! The engine is the single writer: every mutation of the game goes through
//! `apply`, which consumes a settled state and returns the next one without
//! touching its input. The host serializes all dispatch, so each action
//! observes a fully-settled prior state.
//!
//! The engine owns the RNG (spawn placement) and the injected score store
//! (high-score persistence). It holds no timers: the tick cadence and the
//! fast-speed revert deadline belong to the host, which feeds them in as
//! `Tick` and `ResetSpeed` actions.

use crate::core::board::Board;
use crate::core::rng::SimpleRng;
use crate::core::state::{Coord, GameState, PowerUp, Snake};
use crate::core::store::ScoreStore;
use crate::types::{
    Direction, GameAction, PowerUpKind, Speed, POWERUP_CHANCE_PCT, POWERUP_DURATION_TICKS,
};

/// The game engine: rules, spawns, and high-score persistence
pub struct GameEngine {
    rng: SimpleRng,
    store: Box<dyn ScoreStore>,
}

impl GameEngine {
    /// Create an engine with the given RNG seed and score store
    pub fn new(seed: u32, store: Box<dyn ScoreStore>) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            store,
        }
    }

    /// The boot state: snake centered, food placed, high score read from the
    /// store, game-over posture until the first `Start`.
    pub fn initial_state(&mut self, board: Board) -> GameState {
        let snake = Snake::new(board.center());
        let food = self.free_cell(&snake, board);
        GameState::fresh(snake, food, self.store.load())
    }

    /// Apply one action and return the resulting state.
    ///
    /// Pure with respect to `state`: the input is never mutated. Invalid
    /// inputs (reverse direction, ticks while game-over) return the state
    /// unchanged; nothing here panics for any reachable input.
    pub fn apply(&mut self, state: &GameState, board: Board, action: GameAction) -> GameState {
        match action {
            GameAction::Start => self.start(state, board),
            GameAction::ChangeDirection(requested) => Self::change_direction(state, requested),
            GameAction::Tick => self.tick(state, board),
            GameAction::ResetSpeed => {
                let mut next = state.clone();
                next.speed = Speed::Normal;
                next
            }
        }
    }

    /// Begin a new game, folding the ended game's points into the high score
    fn start(&mut self, state: &GameState, board: Board) -> GameState {
        if state.points > state.high_score {
            // Persistence is best-effort: a failed write never blocks a new game.
            let _ = self.store.save(state.points);
        }
        let high_score = state.high_score.max(state.points);

        let snake = Snake::new(board.center());
        let food = self.free_cell(&snake, board);
        let mut next = GameState::fresh(snake, food, high_score);
        next.game_over = false;
        next
    }

    /// Buffer a direction change; reversals are rejected
    fn change_direction(state: &GameState, requested: Direction) -> GameState {
        if requested.is_opposite(state.direction) {
            return state.clone();
        }
        let mut next = state.clone();
        next.direction = requested;
        next
    }

    /// Advance the game by one tick
    fn tick(&mut self, state: &GameState, board: Board) -> GameState {
        if state.game_over {
            return state.clone();
        }

        let mut next = state.clone();
        let mut head = next.snake.head().moved(next.direction);

        // Collisions are evaluated against the pre-move snake, tail included.
        let wall_hit = !board.contains(head);
        let self_hit = next.snake.contains(head);

        if !next.invincible() && (wall_hit || self_hit) {
            next.game_over = true;
            next.speed = Speed::Normal;
            return next;
        }

        if next.invincible() && wall_hit {
            head = board.wrap(head);
        }

        let ate = head == next.food;
        next.snake.advance(head, ate);

        if ate {
            next.points += if next.double_points() { 2 } else { 1 };
            next.food = self.free_cell(&next.snake, board);

            // Spawn check runs before the pickup check below: a power-up
            // consumed this same tick does not free the slot for a new one.
            if next.power_up.is_none() && self.rng.chance_pct(POWERUP_CHANCE_PCT) {
                next.power_up = Some(PowerUp {
                    pos: self.free_cell(&next.snake, board),
                    kind: self.random_kind(),
                });
            }
        }

        next.invincible_ticks = next.invincible_ticks.saturating_sub(1);
        next.double_points_ticks = next.double_points_ticks.saturating_sub(1);

        if let Some(power_up) = next.power_up {
            if power_up.pos == head {
                match power_up.kind {
                    // The host schedules a wall-clock ResetSpeed for this.
                    PowerUpKind::Speed => next.speed = Speed::Fast,
                    PowerUpKind::Invincible => next.invincible_ticks = POWERUP_DURATION_TICKS,
                    PowerUpKind::Double => next.double_points_ticks = POWERUP_DURATION_TICKS,
                }
                next.power_up = None;
            }
        }

        next
    }

    /// Rejection-sample a cell not occupied by the snake
    fn free_cell(&mut self, snake: &Snake, board: Board) -> Coord {
        loop {
            let pos = Coord::new(
                self.rng.next_range(board.cols() as u32) as i16,
                self.rng.next_range(board.rows() as u32) as i16,
            );
            if !snake.contains(pos) {
                return pos;
            }
        }
    }

    fn random_kind(&mut self) -> PowerUpKind {
        match self.rng.next_range(3) {
            0 => PowerUpKind::Speed,
            1 => PowerUpKind::Invincible,
            _ => PowerUpKind::Double,
        }
    }
}
