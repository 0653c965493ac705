//! End-to-end render checks: engine state through the pure view.

use tui_snake::core::{Board, GameEngine, GameSnapshot, MemoryScoreStore};
use tui_snake::term::{GameView, Viewport};
use tui_snake::types::GameAction;

#[test]
fn test_render_active_game_places_snake_head() {
    let board = Board::new(10, 8);
    let mut engine = GameEngine::new(21, Box::new(MemoryScoreStore::new(0)));
    let initial = engine.initial_state(board);
    let state = engine.apply(&initial, board, GameAction::Start);

    let snap = GameSnapshot::capture(&state, board);
    let fb = GameView.render(&snap, Viewport::new(38, 10));

    // Head at the board center (5, 4) maps to framebuffer (11, 5).
    assert_eq!(fb.get(11, 5).unwrap().ch, '█');
}

#[test]
fn test_render_survives_tiny_viewports() {
    let board = Board::new(10, 8);
    let mut engine = GameEngine::new(21, Box::new(MemoryScoreStore::new(0)));
    let state = engine.initial_state(board);
    let snap = GameSnapshot::capture(&state, board);

    // Smaller than the frame: rendering clips, never panics.
    for (w, h) in [(0, 0), (1, 1), (5, 3), (20, 4), (38, 2)] {
        let fb = GameView.render(&snap, Viewport::new(w, h));
        assert_eq!(fb.width(), w);
        assert_eq!(fb.height(), h);
    }
}

#[test]
fn test_render_game_over_posture_shows_overlay() {
    let board = Board::new(10, 8);
    let mut engine = GameEngine::new(21, Box::new(MemoryScoreStore::new(0)));
    let state = engine.initial_state(board);
    assert!(state.game_over);

    let fb = GameView.render(&GameSnapshot::capture(&state, board), Viewport::new(38, 10));
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    assert!(all.contains("GAME OVER"));
}
