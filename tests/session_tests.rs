//! Session tests - clock, score, mismatch window and round lifecycle

use tui_memory::core::{
    AssetProvider, Board, GlyphDeck, RevealOutcome, Resolution, Session, SessionConfig,
};
use tui_memory::types::{CellView, ContentId, Point, Position, Viewport};

const A: ContentId = ContentId(0);
const B: ContentId = ContentId(1);

fn p(row: u8, col: u8) -> Position {
    Position::new(row, col)
}

/// (0,0)=A (0,1)=B
/// (1,0)=B (1,1)=A
fn session(delay_ms: u32) -> Session {
    let board = Board::with_layout(2, vec![A, B, B, A]).unwrap();
    let config = SessionConfig {
        mismatch_delay_ms: delay_ms,
        ..SessionConfig::default()
    };
    Session::from_board(config, board)
}

fn mismatch(session: &mut Session) {
    session.reveal(p(0, 0));
    assert_eq!(
        session.reveal(p(0, 1)),
        RevealOutcome::RevealedAndResolved(Resolution::Mismatch)
    );
}

fn clear(session: &mut Session) {
    session.reveal(p(0, 0));
    session.reveal(p(1, 1));
    session.reveal(p(0, 1));
    session.reveal(p(1, 0));
}

#[test]
fn test_new_session_deals_from_deck() {
    let deck = GlyphDeck.load(8).unwrap();
    let session = Session::new(SessionConfig::default(), deck.content_ids()).unwrap();
    assert_eq!(session.board().size(), 4);
    assert_eq!(session.board().pair_count(), 8);
    assert_eq!(session.round(), 1);
    assert_eq!(session.score(), 0);
    assert!(!session.game_over());
}

#[test]
fn test_wrong_content_count_is_a_config_error() {
    let config = SessionConfig {
        grid_size: 4,
        ..SessionConfig::default()
    };
    assert!(Session::new(config, vec![A, B]).is_err());
}

#[test]
fn test_input_blocked_during_mismatch_window() {
    let mut s = session(1000);
    mismatch(&mut s);
    assert!(s.input_blocked());

    // The frame the pair was revealed in.
    s.tick(16);
    s.tick(500);
    assert_eq!(s.reveal(p(1, 0)), RevealOutcome::Ignored);
    assert_eq!(s.board().cell_view(p(0, 0)), Some(CellView::Showing(A)));
    assert_eq!(s.board().cell_view(p(0, 1)), Some(CellView::Showing(B)));

    s.tick(499);
    assert!(s.input_blocked());
    s.tick(1);
    assert!(!s.input_blocked());
    assert_eq!(s.board().cell_view(p(0, 0)), Some(CellView::Hidden));
    assert_eq!(s.board().cell_view(p(0, 1)), Some(CellView::Hidden));
    assert_eq!(s.reveal(p(1, 0)), RevealOutcome::Revealed);
}

#[test]
fn test_mismatch_hidden_exactly_once() {
    let mut s = session(100);
    mismatch(&mut s);
    s.tick(16);
    s.tick(100);
    assert!(s.board().pending().is_empty());

    // A fresh single reveal survives later ticks.
    s.reveal(p(1, 0));
    for _ in 0..10 {
        s.tick(100);
    }
    assert_eq!(s.board().cell_view(p(1, 0)), Some(CellView::Showing(B)));
}

#[test]
fn test_mismatch_late_in_frame_gets_full_window() {
    let mut s = session(16);
    // Pair revealed 15 ms into a frame; the next tick reports the whole frame.
    mismatch(&mut s);
    s.tick(16);
    assert_eq!(s.board().cell_view(p(0, 1)), Some(CellView::Showing(B)));
    assert!(s.input_blocked());

    s.tick(15);
    assert_eq!(s.board().cell_view(p(0, 0)), Some(CellView::Showing(A)));
    s.tick(1);
    assert_eq!(s.board().cell_view(p(0, 1)), Some(CellView::Hidden));
    assert!(!s.input_blocked());
}

#[test]
fn test_mismatch_visible_in_snapshot_after_first_tick() {
    let mut s = session(1);
    mismatch(&mut s);
    s.tick(16);
    let snap = s.snapshot();
    assert!(snap.input_blocked);
    assert_eq!(snap.cell(p(0, 0)), Some(CellView::Showing(A)));
}

#[test]
fn test_score_counts_whole_seconds() {
    let mut s = session(1000);
    s.tick(999);
    assert_eq!(s.score(), 0);
    s.tick(1);
    assert_eq!(s.score(), 1);
    for _ in 0..125 {
        s.tick(16);
    }
    assert_eq!(s.score(), 3);
}

#[test]
fn test_score_frozen_after_game_over() {
    let mut s = session(1000);
    s.tick(2500);
    clear(&mut s);

    assert!(s.game_over());
    assert_eq!(s.score(), 2);
    assert_eq!(s.attempts(), 2);

    s.tick(10_000);
    assert_eq!(s.score(), 2);
    assert_eq!(s.reveal(p(0, 0)), RevealOutcome::Ignored);
}

#[test]
fn test_attempts_count_resolved_pairs() {
    let mut s = session(0);
    mismatch(&mut s);
    s.reveal(p(0, 0));
    s.reveal(p(1, 1));
    assert_eq!(s.attempts(), 2);
}

#[test]
fn test_click_maps_through_layout() {
    let mut s = session(1000);
    // 32 - 12 = 20 board columns: tiles of 10x5 on a 10 row screen.
    let viewport = Viewport::new(32, 10);

    assert_eq!(s.handle_click(Point::new(25, 1), viewport), RevealOutcome::Ignored);
    assert_eq!(s.handle_click(Point::new(3, 2), viewport), RevealOutcome::Revealed);
    assert_eq!(
        s.handle_click(Point::new(19, 9), viewport),
        RevealOutcome::RevealedAndResolved(Resolution::Match)
    );
    assert_eq!(s.board().cell_view(p(1, 1)), Some(CellView::Matched(A)));
}

#[test]
fn test_start_round_resets_everything() {
    let mut s = session(1000);
    s.tick(3000);
    clear(&mut s);
    assert!(s.game_over());

    s.start_round().unwrap();
    assert_eq!(s.round(), 2);
    assert_eq!(s.score(), 0);
    assert_eq!(s.attempts(), 0);
    assert!(!s.game_over());
    assert_eq!(s.board().matched_count(), 0);
    assert!(s
        .board()
        .tiles()
        .iter()
        .all(|t| t.view() == CellView::Hidden));
}

#[test]
fn test_restart_during_mismatch_clears_window() {
    let mut s = session(1000);
    mismatch(&mut s);
    s.start_round().unwrap();
    assert!(!s.input_blocked());
    assert!(s.board().pending().is_empty());
}

#[test]
fn test_snapshot_tracks_progress() {
    let mut s = session(1000);
    s.reveal(p(0, 0));
    s.reveal(p(0, 1));

    let snap = s.snapshot();
    assert!(snap.input_blocked);
    assert!(!snap.playable());
    assert_eq!(snap.cell(p(0, 1)), Some(CellView::Showing(B)));
    assert_eq!(snap.pairs_found, 0);
    assert_eq!(snap.pairs_total, 2);
    assert_eq!(snap.round, 1);
}
