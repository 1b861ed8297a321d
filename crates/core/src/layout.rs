//! Layout - maps grid cells to screen rectangles and back.
//!
//! The viewport is split into a board area on the left and a fixed score panel
//! ([`SCORE_PANEL_WIDTH`] columns) on the right. Tiles share the board area
//! evenly; leftover columns/rows on the right and bottom belong to no cell.
//!
//! Rendering and hit testing both go through [`Layout`], so a point inside the
//! rectangle drawn for a cell always maps back to that cell.

use crate::types::{Point, Position, Rect, Viewport, SCORE_PANEL_WIDTH};

/// Cell geometry for one grid size and viewport. Pure; recompute on resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    grid_size: u8,
    tile_w: u16,
    tile_h: u16,
    panel: Rect,
}

impl Layout {
    pub fn new(grid_size: u8, viewport: Viewport) -> Self {
        let board_w = viewport.width.saturating_sub(SCORE_PANEL_WIDTH);
        let board_h = viewport.height;
        let (tile_w, tile_h) = if grid_size == 0 {
            (0, 0)
        } else {
            (board_w / grid_size as u16, board_h / grid_size as u16)
        };
        let panel_x = viewport.width.saturating_sub(SCORE_PANEL_WIDTH);
        Self {
            grid_size,
            tile_w,
            tile_h,
            panel: Rect::new(panel_x, 0, viewport.width - panel_x, viewport.height),
        }
    }

    pub fn grid_size(&self) -> u8 {
        self.grid_size
    }

    /// Width and height of a single tile rectangle.
    pub fn tile_size(&self) -> (u16, u16) {
        (self.tile_w, self.tile_h)
    }

    /// Area covered by all tiles.
    pub fn board_rect(&self) -> Rect {
        let n = self.grid_size as u16;
        Rect::new(0, 0, self.tile_w * n, self.tile_h * n)
    }

    /// Right-hand panel reserved for the score.
    pub fn panel_rect(&self) -> Rect {
        self.panel
    }

    /// Whether every tile has at least one cell of area.
    pub fn is_usable(&self) -> bool {
        self.tile_w > 0 && self.tile_h > 0
    }

    /// Rectangle for `position`, `None` if it lies outside the grid.
    pub fn cell_rect(&self, position: Position) -> Option<Rect> {
        if !position.is_within(self.grid_size) {
            return None;
        }
        Some(Rect::new(
            position.col as u16 * self.tile_w,
            position.row as u16 * self.tile_h,
            self.tile_w,
            self.tile_h,
        ))
    }

    /// Cell under `point`, `None` for the score panel, leftover strips, or when
    /// the viewport is too small to hold the grid.
    pub fn hit_test(&self, point: Point) -> Option<Position> {
        if !self.is_usable() {
            return None;
        }
        let col = point.x / self.tile_w;
        let row = point.y / self.tile_h;
        let n = self.grid_size as u16;
        if col >= n || row >= n {
            return None;
        }
        Some(Position::new(row as u8, col as u8))
    }

    /// All `(position, rect)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Rect)> + '_ {
        let count = self.grid_size as usize * self.grid_size as usize;
        (0..count).filter_map(move |i| {
            let position = Position::from_index(i, self.grid_size);
            self.cell_rect(position).map(|rect| (position, rect))
        })
    }
}
