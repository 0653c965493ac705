//! Keyboard mapping and mouse swipe detection.
//!
//! Input sources produce engine actions; they never touch game state. The
//! host decides when a start request is meaningful (only while game-over,
//! matching the tap-to-restart overlay).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::types::{Direction, SWIPE_THRESHOLD_COLS};

/// Map a key to a direction change (arrows and WASD)
pub fn direction_for_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        _ => None,
    }
}

/// Keys that request a new game
pub fn is_start_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Enter | KeyCode::Char(' '))
}

/// Check if key should quit the game
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Gesture recognized from a press-drag-release sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeEvent {
    /// Drag whose dominant axis exceeded the threshold
    Swipe(Direction),
    /// Sub-threshold release, i.e. a click
    Tap,
}

/// Tracks one mouse gesture at a time.
///
/// Terminal rows are roughly twice as tall as columns are wide, so vertical
/// travel is weighted double when comparing against the column threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    origin: Option<(u16, u16)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a mouse event; emits a gesture on button release
    pub fn handle_mouse(&mut self, event: MouseEvent) -> Option<SwipeEvent> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.origin = Some((event.column, event.row));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (ox, oy) = self.origin.take()?;
                let dx = event.column as i32 - ox as i32;
                let dy = event.row as i32 - oy as i32;

                let x_travel = dx.unsigned_abs();
                let y_travel = dy.unsigned_abs() * 2;
                if x_travel < SWIPE_THRESHOLD_COLS as u32 && y_travel < SWIPE_THRESHOLD_COLS as u32
                {
                    return Some(SwipeEvent::Tap);
                }

                let direction = if x_travel >= y_travel {
                    if dx < 0 {
                        Direction::Left
                    } else {
                        Direction::Right
                    }
                } else if dy < 0 {
                    Direction::Up
                } else {
                    Direction::Down
                };
                Some(SwipeEvent::Swipe(direction))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_direction_keys() {
        assert_eq!(direction_for_key(KeyCode::Up), Some(Direction::Up));
        assert_eq!(direction_for_key(KeyCode::Char('w')), Some(Direction::Up));
        assert_eq!(direction_for_key(KeyCode::Down), Some(Direction::Down));
        assert_eq!(direction_for_key(KeyCode::Char('s')), Some(Direction::Down));
        assert_eq!(direction_for_key(KeyCode::Left), Some(Direction::Left));
        assert_eq!(direction_for_key(KeyCode::Char('a')), Some(Direction::Left));
        assert_eq!(direction_for_key(KeyCode::Right), Some(Direction::Right));
        assert_eq!(direction_for_key(KeyCode::Char('d')), Some(Direction::Right));
        assert_eq!(direction_for_key(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_start_keys() {
        assert!(is_start_key(KeyCode::Enter));
        assert!(is_start_key(KeyCode::Char(' ')));
        assert!(!is_start_key(KeyCode::Char('r')));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_horizontal_swipe() {
        let mut tracker = SwipeTracker::new();
        assert_eq!(
            tracker.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 5)),
            None
        );
        assert_eq!(
            tracker.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 3, 5)),
            Some(SwipeEvent::Swipe(Direction::Left))
        );
    }

    #[test]
    fn test_vertical_swipe_weighted_for_aspect() {
        let mut tracker = SwipeTracker::new();
        tracker.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 5));
        // 2 rows of travel counts as 4 columns, above the threshold.
        assert_eq!(
            tracker.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 10, 7)),
            Some(SwipeEvent::Swipe(Direction::Down))
        );
    }

    #[test]
    fn test_sub_threshold_release_is_tap() {
        let mut tracker = SwipeTracker::new();
        tracker.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 5));
        assert_eq!(
            tracker.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 11, 5)),
            Some(SwipeEvent::Tap)
        );
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut tracker = SwipeTracker::new();
        assert_eq!(
            tracker.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 10, 5)),
            None
        );
    }

    #[test]
    fn test_drag_events_between_press_and_release_are_ignored() {
        let mut tracker = SwipeTracker::new();
        tracker.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 5));
        assert_eq!(
            tracker.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 12, 5)),
            None
        );
        assert_eq!(
            tracker.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 20, 5)),
            Some(SwipeEvent::Swipe(Direction::Right))
        );
    }
}
