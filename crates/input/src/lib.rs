//! Terminal input module.
//!
//! Maps `crossterm` events into [`crate::types::GameAction`]s: left mouse
//! presses become reveals at the pressed cell, `r` deals a new round, and
//! `q`/`Esc`/`Ctrl-C` quit. Mouse capture must be enabled by the renderer for
//! press events to arrive.

pub mod map;

pub use tui_memory_types as types;

pub use map::{handle_key_event, handle_mouse_event, should_quit, translate, InputEvent};
