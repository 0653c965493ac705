//! Terminal snake runner.
//!
//! The host shell: it owns the two timers (tick cadence and the one-shot
//! fast-speed revert), feeds input and timer events into the engine as
//! actions, and hands each resulting snapshot to the renderer. The engine
//! itself never touches a clock.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;

use tui_snake::core::{Board, FileScoreStore, GameEngine, GameSnapshot, GameState};
use tui_snake::input::{direction_for_key, is_start_key, should_quit, SwipeEvent, SwipeTracker};
use tui_snake::term::{GameView, TerminalRenderer, Viewport};
use tui_snake::types::{
    GameAction, PowerUpKind, Speed, FAST_SPEED_DURATION_MS, PANEL_COLS, TILE_H, TILE_W,
};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Derive the playable grid and viewport from the live terminal size.
///
/// The viewport is clamped so the board is never degenerate; wall collision
/// and spawn logic always see the current geometry.
fn current_geometry() -> (Board, Viewport) {
    let (w, h) = terminal::size().unwrap_or((80, 24));
    let avail_w = w.saturating_sub(PANEL_COLS + 2).max(TILE_W);
    let avail_h = h.saturating_sub(2).max(TILE_H);
    (Board::from_area(avail_w, avail_h), Viewport::new(w, h))
}

fn time_seed() -> u32 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let store = FileScoreStore::at_default_path();
    let mut engine = GameEngine::new(time_seed(), Box::new(store));

    let (board, _) = current_geometry();
    let mut state = engine.initial_state(board);

    let view = GameView;
    let mut swipe = SwipeTracker::new();

    let mut last_tick = Instant::now();
    // One-shot deadline for reverting a speed boost; wall-clock, not ticks.
    let mut fast_revert_at: Option<Instant> = None;

    loop {
        let (board, viewport) = current_geometry();

        let fb = view.render(&GameSnapshot::capture(&state, board), viewport);
        term.draw(&fb)?;

        // Input with timeout until the next tick. The interval is re-read
        // from the current speed every pass, so a speed change or game over
        // replaces the cadence without a stale interval firing.
        let interval = Duration::from_millis(state.speed.interval_ms());
        let timeout = interval
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(direction) = direction_for_key(key.code) {
                        state = engine.apply(&state, board, GameAction::ChangeDirection(direction));
                    } else if is_start_key(key.code) && state.game_over {
                        state = engine.apply(&state, board, GameAction::Start);
                        last_tick = Instant::now();
                    }
                }
                Event::Mouse(mouse) => match swipe.handle_mouse(mouse) {
                    Some(SwipeEvent::Swipe(direction)) => {
                        state = engine.apply(&state, board, GameAction::ChangeDirection(direction));
                    }
                    Some(SwipeEvent::Tap) if state.game_over => {
                        state = engine.apply(&state, board, GameAction::Start);
                        last_tick = Instant::now();
                    }
                    _ => {}
                },
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Fire the pending speed revert once its deadline passes.
        if let Some(at) = fast_revert_at {
            if Instant::now() >= at {
                state = engine.apply(&state, board, GameAction::ResetSpeed);
                fast_revert_at = None;
            }
        }

        if !state.game_over && last_tick.elapsed() >= interval {
            last_tick = Instant::now();
            let before = state.clone();
            state = engine.apply(&state, board, GameAction::Tick);
            if speed_boost_granted(&before, &state) {
                // Re-arming replaces any pending revert.
                fast_revert_at =
                    Some(Instant::now() + Duration::from_millis(FAST_SPEED_DURATION_MS));
            }
        }

        // A revert is only meaningful while the boost is live.
        if state.speed == Speed::Normal {
            fast_revert_at = None;
        }
    }
}

/// A speed power-up was consumed on this tick (including re-grants while
/// already fast, which must push the revert deadline out).
fn speed_boost_granted(before: &GameState, after: &GameState) -> bool {
    let was_speed_pickup = matches!(
        before.power_up,
        Some(p) if p.kind == PowerUpKind::Speed
    );
    was_speed_pickup && after.power_up.is_none() && after.speed == Speed::Fast
}
