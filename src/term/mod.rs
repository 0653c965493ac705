//! Terminal rendering: framebuffer, pure game view, and the crossterm
//! renderer that flushes frames with diffing.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
