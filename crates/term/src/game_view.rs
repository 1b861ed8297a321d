//! GameView: maps a [`SessionSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). Cell rectangles come from [`Layout`], the same
//! geometry the session uses for hit testing, so a click always lands on the
//! tile that was drawn under it.

use crate::core::{Deck, Layout, SessionSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CellView, Rect, Viewport, FACE_DOWN_GLYPH};

const BG: Rgb = Rgb::new(0, 0, 0);
const TABLE: Rgb = Rgb::new(20, 40, 30);

/// Border, fill and glyph style for one tile state.
#[derive(Debug, Clone, Copy)]
struct TileStyle {
    border: CellStyle,
    fill: CellStyle,
    glyph: CellStyle,
}

const HIDDEN: TileStyle = TileStyle {
    border: CellStyle::new(Rgb::new(110, 110, 130), TABLE),
    fill: CellStyle::new(Rgb::new(60, 60, 80), TABLE),
    glyph: CellStyle::new(Rgb::new(150, 150, 170), TABLE).dim(),
};

const SHOWING: TileStyle = TileStyle {
    border: CellStyle::new(Rgb::new(240, 240, 240), TABLE).bold(),
    fill: CellStyle::new(Rgb::new(240, 240, 240), TABLE),
    glyph: CellStyle::new(Rgb::new(250, 220, 90), TABLE).bold(),
};

const MISMATCHED: TileStyle = TileStyle {
    border: CellStyle::new(Rgb::new(220, 80, 80), TABLE).bold(),
    fill: CellStyle::new(Rgb::new(220, 80, 80), TABLE),
    glyph: CellStyle::new(Rgb::new(240, 120, 120), TABLE).bold(),
};

const MATCHED: TileStyle = TileStyle {
    border: CellStyle::new(Rgb::new(80, 160, 100), TABLE),
    fill: CellStyle::new(Rgb::new(80, 160, 100), TABLE),
    glyph: CellStyle::new(Rgb::new(110, 220, 130), TABLE),
};

const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), BG).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), BG);
const HINT: CellStyle = CellStyle::new(Rgb::new(160, 160, 160), BG).dim();
const BANNER: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(40, 90, 60)).bold();

const KEY_HINT: &str = "r:new q:quit";

/// Terminal view of the memory board and the score panel.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    key_hint: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self { key_hint: true }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show or hide the key reminder at the bottom of the panel.
    pub fn with_key_hint(mut self, key_hint: bool) -> Self {
        self.key_hint = key_hint;
        self
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport when needed.
    pub fn render_into(
        &self,
        snap: &SessionSnapshot,
        deck: &Deck,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(VALUE.fg, BG).into_cell(' '));

        let layout = Layout::new(snap.grid_size, viewport);
        if !layout.is_usable() {
            let bounds = fb.bounds();
            fb.put_str_centered(bounds, bounds.height / 2, "terminal too small", LABEL);
            return;
        }

        for (position, rect) in layout.cells() {
            let view = snap.cell(position).unwrap_or_default();
            self.draw_tile(fb, rect, view, deck, snap.input_blocked);
        }

        self.draw_panel(fb, snap, layout.panel_rect());

        if snap.game_over {
            self.draw_banner(fb, layout.board_rect(), snap.score);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, deck: &Deck, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, deck, viewport, &mut fb);
        fb
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        rect: Rect,
        view: CellView,
        deck: &Deck,
        input_blocked: bool,
    ) {
        let (glyph, style) = match view {
            CellView::Hidden => (FACE_DOWN_GLYPH, HIDDEN),
            // While input is blocked the face-up unmatched tiles are the mismatched pair.
            CellView::Showing(id) if input_blocked => (deck.label(id), MISMATCHED),
            CellView::Showing(id) => (deck.label(id), SHOWING),
            CellView::Matched(id) => (deck.label(id), MATCHED),
        };

        fb.fill_rect(rect, ' ', style.fill);
        if rect.width >= 3 && rect.height >= 3 {
            fb.draw_border(rect, style.border);
        }
        let center = rect.center();
        fb.put_char(center.x, center.y, glyph, style.glyph);
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, panel: Rect) {
        let x = panel.x.saturating_add(1);
        let right = panel.right();

        // Elapsed seconds, pinned to the top-right corner.
        fb.put_str(x, 0, "TIME", LABEL);
        fb.put_u32_right(right, 0, snap.score, VALUE);

        let rows: [(&str, u16); 3] = [("PAIRS", 2), ("TRIES", 5), ("ROUND", 8)];
        for (label, y) in rows {
            fb.put_str(x, y, label, LABEL);
        }

        fb.put_u32(x, 3, snap.pairs_found as u32, VALUE);
        let found_w = digits(snap.pairs_found as u32);
        fb.put_char(x.saturating_add(found_w), 3, '/', VALUE);
        fb.put_u32(x.saturating_add(found_w + 1), 3, snap.pairs_total as u32, VALUE);

        fb.put_u32(x, 6, snap.attempts, VALUE);
        fb.put_u32(x, 9, snap.round, VALUE);

        if self.key_hint && panel.height > 11 {
            fb.put_str_right(right, panel.bottom() - 1, KEY_HINT, HINT);
        }
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, board: Rect, score: u32) {
        let mid = board.y + board.height / 2;
        let text = format!(" CLEARED IN {score}s ");
        fb.put_str_centered(board, mid, &text, BANNER);
        if self.key_hint {
            fb.put_str_centered(board, mid.saturating_add(1), " r to play again ", BANNER);
        }
    }
}

fn digits(mut value: u32) -> u16 {
    let mut n = 1;
    while value >= 10 {
        value /= 10;
        n += 1;
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ContentId, Position};

    fn snapshot(cells: Vec<CellView>) -> SessionSnapshot {
        SessionSnapshot {
            grid_size: 2,
            cells,
            pairs_total: 2,
            round: 1,
            ..SessionSnapshot::default()
        }
    }

    fn deck() -> Deck {
        use crate::core::{AssetProvider, GlyphDeck};
        GlyphDeck.load(2).unwrap()
    }

    #[test]
    fn hidden_tiles_show_placeholder_at_center() {
        let snap = snapshot(vec![CellView::Hidden; 4]);
        let fb = GameView::new().render(&snap, &deck(), Viewport::new(32, 10));

        // 20 board columns / 2 = 10 wide, 10 rows / 2 = 5 high.
        let layout = Layout::new(2, Viewport::new(32, 10));
        for (_, rect) in layout.cells() {
            let c = rect.center();
            assert_eq!(fb.get(c.x, c.y).map(|cell| cell.ch), Some(FACE_DOWN_GLYPH));
        }
        assert_eq!(fb.get(0, 0).map(|cell| cell.ch), Some('┌'));
    }

    #[test]
    fn revealed_tile_shows_deck_label() {
        let deck = deck();
        let snap = snapshot(vec![
            CellView::Showing(ContentId(1)),
            CellView::Hidden,
            CellView::Hidden,
            CellView::Hidden,
        ]);
        let fb = GameView::new().render(&snap, &deck, Viewport::new(32, 10));
        let rect = Layout::new(2, Viewport::new(32, 10))
            .cell_rect(Position::new(0, 0))
            .unwrap();
        let c = rect.center();
        assert_eq!(fb.get(c.x, c.y).map(|cell| cell.ch), Some(deck.label(ContentId(1))));
    }

    #[test]
    fn mismatched_pair_is_styled_differently() {
        let mut snap = snapshot(vec![
            CellView::Showing(ContentId(0)),
            CellView::Showing(ContentId(1)),
            CellView::Hidden,
            CellView::Hidden,
        ]);
        let view = GameView::new();
        let calm = view.render(&snap, &deck(), Viewport::new(32, 10));
        snap.input_blocked = true;
        let blocked = view.render(&snap, &deck(), Viewport::new(32, 10));
        assert_ne!(calm.get(0, 0), blocked.get(0, 0));
        assert_eq!(calm.get(0, 0).map(|c| c.ch), blocked.get(0, 0).map(|c| c.ch));
    }

    #[test]
    fn score_sits_in_top_right_corner() {
        let mut snap = snapshot(vec![CellView::Hidden; 4]);
        snap.score = 137;
        let fb = GameView::new().render(&snap, &deck(), Viewport::new(32, 10));
        assert!(fb.row_text(0).ends_with("137"));
    }

    #[test]
    fn panel_shows_pair_progress() {
        let mut snap = snapshot(vec![
            CellView::Matched(ContentId(0)),
            CellView::Hidden,
            CellView::Hidden,
            CellView::Matched(ContentId(0)),
        ]);
        snap.pairs_found = 1;
        snap.attempts = 3;
        let fb = GameView::new().render(&snap, &deck(), Viewport::new(32, 14));
        assert!(fb.row_text(3).contains("1/2"));
        assert!(fb.row_text(6).trim_end().ends_with('3'));
        assert!(fb.row_text(13).ends_with(KEY_HINT));
    }

    #[test]
    fn cleared_round_shows_banner() {
        let mut snap = snapshot(vec![CellView::Matched(ContentId(0)); 4]);
        snap.game_over = true;
        snap.score = 9;
        let fb = GameView::new().render(&snap, &deck(), Viewport::new(40, 10));
        assert!((0..10).any(|y| fb.row_text(y).contains("CLEARED IN 9s")));
    }

    #[test]
    fn tiny_terminal_shows_message() {
        let snap = snapshot(vec![CellView::Hidden; 4]);
        let fb = GameView::new().render(&snap, &deck(), Viewport::new(20, 1));
        assert!(fb.row_text(0).contains("terminal too small"));
    }

    #[test]
    fn digit_count() {
        assert_eq!(digits(0), 1);
        assert_eq!(digits(9), 1);
        assert_eq!(digits(10), 2);
        assert_eq!(digits(u32::MAX), 10);
    }
}
