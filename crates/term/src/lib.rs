//! Terminal "game renderer" module.
//!
//! A small rendering layer for the memory board. It avoids widget toolkits and
//! renders into a plain framebuffer that is diffed and flushed to the terminal.
//!
//! - [`fb`]: cells, styles and drawing primitives
//! - [`game_view`]: snapshot to framebuffer, no I/O
//! - [`renderer`]: terminal setup, mouse capture and diffed output

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::GameView;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
