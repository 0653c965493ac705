//! Integration tests for the game lifecycle and persistence.

use tui_snake::core::{
    Board, Coord, FileScoreStore, GameEngine, GameSnapshot, MemoryScoreStore, ScoreStore, Snake,
};
use tui_snake::types::{Direction, GameAction};

fn board() -> Board {
    Board::new(12, 12)
}

#[test]
fn test_game_lifecycle() {
    let mut engine = GameEngine::new(7, Box::new(MemoryScoreStore::new(0)));
    let initial = engine.initial_state(board());
    assert!(initial.game_over);

    let state = engine.apply(&initial, board(), GameAction::Start);
    assert!(!state.game_over);
    assert_eq!(state.snake.len(), 1);

    // Play a few ticks; the game stays consistent.
    let mut state = state;
    for _ in 0..4 {
        state = engine.apply(&state, board(), GameAction::Tick);
        assert!(board().contains(state.snake.head()));
        assert!(!state.snake.contains(state.food));
    }
}

#[test]
fn test_high_score_survives_engine_restart() {
    let path =
        std::env::temp_dir().join(format!("tui-snake-restart-{}.json", std::process::id()));
    let _ = std::fs::remove_file(&path);

    {
        let mut engine = GameEngine::new(1, Box::new(FileScoreStore::new(&path)));
        let mut state = engine.initial_state(board());
        state = engine.apply(&state, board(), GameAction::Start);
        state.points = 17;
        // Starting a new game folds the ended score into the store.
        let _ = engine.apply(&state, board(), GameAction::Start);
    }

    // A new engine (a "new process") reads the persisted value.
    let mut engine = GameEngine::new(2, Box::new(FileScoreStore::new(&path)));
    let state = engine.initial_state(board());
    assert_eq!(state.high_score, 17);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_persisted_high_score_is_monotonic() {
    let path =
        std::env::temp_dir().join(format!("tui-snake-monotonic-{}.json", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let mut engine = GameEngine::new(1, Box::new(FileScoreStore::new(&path)));
    let mut state = engine.initial_state(board());

    let mut last_stored = 0;
    for points in [5_u32, 12, 3, 12, 20, 1] {
        state = engine.apply(&state, board(), GameAction::Start);
        state.points = points;
        state = engine.apply(&state, board(), GameAction::Start);

        let stored = FileScoreStore::new(&path).load();
        assert!(stored >= last_stored, "store regressed: {stored}");
        assert_eq!(stored, state.high_score);
        last_stored = stored;
    }
    assert_eq!(last_stored, 20);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_snapshot_round_through_play() {
    let mut engine = GameEngine::new(11, Box::new(MemoryScoreStore::new(4)));
    let mut state = engine.initial_state(board());
    state = engine.apply(&state, board(), GameAction::Start);
    state = engine.apply(&state, board(), GameAction::ChangeDirection(Direction::Down));
    state = engine.apply(&state, board(), GameAction::Tick);

    let snap = GameSnapshot::capture(&state, board());
    assert_eq!(snap.snake, state.snake.segments());
    assert_eq!(snap.high_score, 4);
    assert_eq!(snap.cols, 12);
    assert!(!snap.game_over);
}

#[test]
fn test_full_game_to_wall_death_and_restart() {
    let mut engine = GameEngine::new(3, Box::new(MemoryScoreStore::new(0)));
    let mut state = engine.initial_state(board());
    state = engine.apply(&state, board(), GameAction::Start);
    state.snake = Snake::from_segments(vec![Coord::new(10, 6)]);
    state.food = Coord::new(0, 0);

    // Run right into the wall: one tick to (11,6), the next is fatal.
    state = engine.apply(&state, board(), GameAction::Tick);
    assert!(!state.game_over);
    state = engine.apply(&state, board(), GameAction::Tick);
    assert!(state.game_over);

    let fresh = engine.apply(&state, board(), GameAction::Start);
    assert!(!fresh.game_over);
    assert_eq!(fresh.snake.head(), Coord::new(6, 6));
}
