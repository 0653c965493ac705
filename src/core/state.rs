//! Game state module - the value types the engine operates on
//!
//! Everything here is plain data, cheap to clone. The engine produces a new
//! `GameState` for every accepted action; nothing outside the engine mutates
//! one.

use crate::types::{Direction, PowerUpKind, Speed};

/// A cell position on the grid.
///
/// `i16` so that one-step out-of-bounds positions stay representable while
/// collisions are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i16,
    pub y: i16,
}

impl Coord {
    pub fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The neighboring cell one step in `direction`
    pub fn moved(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The snake: body segments with the head at index 0
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    segments: Vec<Coord>,
}

impl Snake {
    /// A length-1 snake at the given cell
    pub fn new(head: Coord) -> Self {
        Self {
            segments: vec![head],
        }
    }

    /// Build a snake from explicit segments, head first.
    ///
    /// Panics on an empty list; a snake always has a head.
    pub fn from_segments(segments: Vec<Coord>) -> Self {
        assert!(!segments.is_empty());
        Self { segments }
    }

    pub fn head(&self) -> Coord {
        self.segments[0]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> &[Coord] {
        &self.segments
    }

    /// Check if any segment occupies `pos`
    pub fn contains(&self, pos: Coord) -> bool {
        self.segments.contains(&pos)
    }

    /// Advance by prepending the new head; the tail stays when growing
    pub fn advance(&mut self, new_head: Coord, grow: bool) {
        self.segments.insert(0, new_head);
        if !grow {
            self.segments.pop();
        }
    }
}

/// An active map pickup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerUp {
    pub pos: Coord,
    pub kind: PowerUpKind,
}

/// Complete game state
///
/// Lifecycle: created in a game-over posture, active after `Start`, back to
/// game-over on a fatal collision. The high score is carried across games
/// and only advances at `Start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub snake: Snake,
    pub direction: Direction,
    pub food: Coord,
    pub power_up: Option<PowerUp>,
    pub points: u32,
    pub high_score: u32,
    pub speed: Speed,
    pub invincible_ticks: u32,
    pub double_points_ticks: u32,
    pub game_over: bool,
}

impl GameState {
    /// A freshly spawned state in the not-yet-started (game-over) posture.
    /// `Start` clears the flag; everything else is already at game defaults.
    pub fn fresh(snake: Snake, food: Coord, high_score: u32) -> Self {
        Self {
            snake,
            direction: Direction::Right,
            food,
            power_up: None,
            points: 0,
            high_score,
            speed: Speed::Normal,
            invincible_ticks: 0,
            double_points_ticks: 0,
            game_over: true,
        }
    }

    /// Nonzero timer means the effect is active this tick
    pub fn invincible(&self) -> bool {
        self.invincible_ticks > 0
    }

    pub fn double_points(&self) -> bool {
        self.double_points_ticks > 0
    }
}
