//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: views draw into a plain
//! framebuffer, and a terminal backend flushes it with diff redraws.
//! No widget/layout framework involved.
//!
//! Goals:
//! - Keep `core` deterministic and testable (views are pure functions)
//! - Redraw only the cell runs that changed between frames
//! - Precise control over cell aspect ratio (2 chars wide per grid cell)

pub mod fb;
pub mod life_view;
pub mod renderer;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use fb::{Cell, FrameBuffer, Rgb, Style};
pub use life_view::{LifeView, Viewport};
pub use renderer::TerminalRenderer;
