//! Terminal input module.
//!
//! Maps `crossterm` key events into [`tui_life_types::SimAction`]. The
//! mapping is stateless: every simulation control is a discrete key press,
//! and mouse positions are resolved to cells by the view layer, which owns
//! the board geometry.

pub mod map;

pub use tui_life_types as types;

pub use map::{map_key_event, should_quit};
