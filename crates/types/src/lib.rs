//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (board logic, layout, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The board is always square. The grid size is the number of rows (and columns):
//!
//! - **Default**: 4x4, i.e. 8 matching pairs
//! - **Allowed**: even sizes from [`MIN_GRID_SIZE`] to [`MAX_GRID_SIZE`]
//!
//! Positions are `(row, col)` with `(0, 0)` in the top-left corner.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed frame interval (~60 FPS) |
//! | `MISMATCH_DELAY_MS` | 1000 | How long a mismatched pair stays visible |
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{CellView, ContentId, Position, Rect, Point};
//!
//! let pos = Position::new(1, 2);
//! assert_eq!(pos.index(4), 6);
//! assert_eq!(Position::from_index(6, 4), pos);
//!
//! let rect = Rect::new(10, 4, 5, 3);
//! assert!(rect.contains(Point::new(14, 6)));
//! assert!(!rect.contains(Point::new(15, 6)));
//!
//! assert!(CellView::Showing(ContentId(3)).is_face_up());
//! assert!(!CellView::Hidden.is_face_up());
//! ```

/// Grid size used when nothing else is configured (4x4, 8 pairs).
pub const DEFAULT_GRID_SIZE: u8 = 4;
/// Smallest playable grid (a single row of two pairs).
pub const MIN_GRID_SIZE: u8 = 2;
/// Largest grid the terminal view is laid out for.
pub const MAX_GRID_SIZE: u8 = 8;

/// Frame interval (milliseconds).
pub const TICK_MS: u32 = 16;
/// Mismatched tiles stay face-up this long before flipping back (milliseconds).
pub const MISMATCH_DELAY_MS: u32 = 1000;
/// Upper bound accepted for a configured mismatch delay (milliseconds).
pub const MAX_MISMATCH_DELAY_MS: u32 = 10_000;

/// Columns reserved on the right of the viewport for the score panel.
pub const SCORE_PANEL_WIDTH: u16 = 12;
/// Glyph shown on every face-down tile.
pub const FACE_DOWN_GLYPH: char = '?';
/// File stem of the face-down placeholder image; never dealt as a tile.
pub const FACE_DOWN_ASSET_STEM: &str = "image0";

/// A tile slot on the board, `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row-major index for a square grid of `size` columns.
    pub const fn index(self, size: u8) -> usize {
        (self.row as usize) * (size as usize) + (self.col as usize)
    }

    /// Inverse of [`Position::index`].
    pub const fn from_index(index: usize, size: u8) -> Self {
        let size = size as usize;
        Self {
            row: (index / size) as u8,
            col: (index % size) as u8,
        }
    }

    pub const fn is_within(self, size: u8) -> bool {
        self.row < size && self.col < size
    }
}

/// Opaque identifier of the content hidden behind a tile.
///
/// Every id is dealt exactly twice per round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentId(pub u16);

/// A screen position in terminal cells (column, row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Center cell, rounded towards the top-left.
    pub const fn center(&self) -> Point {
        Point {
            x: self.x + self.width.saturating_sub(1) / 2,
            y: self.y + self.height.saturating_sub(1) / 2,
        }
    }
}

/// What a renderer should draw for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellView {
    /// Face-down placeholder.
    #[default]
    Hidden,
    /// Revealed this turn, not yet resolved.
    Showing(ContentId),
    /// Permanently matched.
    Matched(ContentId),
}

impl CellView {
    pub const fn is_face_up(self) -> bool {
        !matches!(self, CellView::Hidden)
    }

    pub const fn content(self) -> Option<ContentId> {
        match self {
            CellView::Hidden => None,
            CellView::Showing(id) | CellView::Matched(id) => Some(id),
        }
    }
}

/// Game actions produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Pointer press at a screen position.
    Reveal(Point),
    /// Deal a fresh round.
    Restart,
}

impl GameAction {
    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Reveal(_) => "reveal",
            GameAction::Restart => "restart",
        }
    }
}
