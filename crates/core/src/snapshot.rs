use crate::types::{CellView, Position};

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SessionSnapshot {
    pub grid_size: u8,
    /// Row-major cell views.
    pub cells: Vec<CellView>,
    pub score: u32,
    pub attempts: u32,
    pub pairs_found: u16,
    pub pairs_total: u16,
    pub round: u32,
    pub game_over: bool,
    pub input_blocked: bool,
}

impl SessionSnapshot {
    pub fn cell(&self, position: Position) -> Option<CellView> {
        if !position.is_within(self.grid_size) {
            return None;
        }
        self.cells.get(position.index(self.grid_size)).copied()
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.input_blocked
    }
}
