//! Session module - drives one round of play on top of a [`Board`]
//!
//! The session owns the board, the round clock and the score. It turns pointer
//! positions into board cells (through [`Layout`]), keeps a mismatched pair
//! face-up for `mismatch_delay_ms`, and stops accepting input once the board is
//! cleared.
//!
//! Time only advances through [`Session::tick`], which the frame loop calls with
//! the wall-clock milliseconds elapsed since the previous tick. The mismatch
//! delay is a countdown polled in `tick`, so the frame loop keeps rendering while
//! the pair is on display.

use rand::rngs::SmallRng;
use tracing::{debug, info};

use crate::board::{Board, Resolution, RevealOutcome};
use crate::error::Result;
use crate::layout::Layout;
use crate::rng::seeded_rng;
use crate::snapshot::SessionSnapshot;
use crate::types::{
    ContentId, Point, Position, Viewport, DEFAULT_GRID_SIZE, MISMATCH_DELAY_MS,
};

/// Startup parameters for a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub grid_size: u8,
    pub mismatch_delay_ms: u32,
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            mismatch_delay_ms: MISMATCH_DELAY_MS,
            seed: 1,
        }
    }
}

impl SessionConfig {
    /// Distinct contents a round needs.
    pub const fn pairs(&self) -> usize {
        (self.grid_size as usize * self.grid_size as usize) / 2
    }
}

/// One player's game: a board, its clock and its score.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    /// Distinct contents, dealt twice each round.
    contents: Vec<ContentId>,
    rng: SmallRng,
    board: Board,
    /// Monotonic round id (increments on every deal).
    round: u32,
    round_ms: u64,
    score: u32,
    /// Resolved pairs this round, matches and mismatches alike.
    attempts: u32,
    /// Display window of a pending mismatch.
    hide_timer: Option<HideTimer>,
    game_over: bool,
}

impl Session {
    /// Deal the first round from `contents` (each id is used twice).
    pub fn new(config: SessionConfig, contents: Vec<ContentId>) -> Result<Self> {
        let mut rng = seeded_rng(config.seed);
        let board = Board::new(config.grid_size, build_pool(&contents), &mut rng)?;
        info!(
            seed = config.seed,
            size = config.grid_size,
            pairs = contents.len(),
            "round 1 dealt"
        );
        Ok(Self::with_board(config, contents, rng, board))
    }

    /// Start from an already dealt board. Later rounds reshuffle its contents.
    pub fn from_board(config: SessionConfig, board: Board) -> Self {
        let mut contents: Vec<ContentId> = board.tiles().iter().map(|t| t.content()).collect();
        contents.sort_unstable();
        contents.dedup();
        let config = SessionConfig {
            grid_size: board.size(),
            ..config
        };
        let rng = seeded_rng(config.seed);
        Self::with_board(config, contents, rng, board)
    }

    fn with_board(
        config: SessionConfig,
        contents: Vec<ContentId>,
        rng: SmallRng,
        board: Board,
    ) -> Self {
        Self {
            config,
            contents,
            rng,
            board,
            round: 1,
            round_ms: 0,
            score: 0,
            attempts: 0,
            hide_timer: None,
            game_over: false,
        }
    }

    /// Deal a fresh round and reset the clock, score and attempts.
    ///
    /// On error the previous round is left as it was.
    pub fn start_round(&mut self) -> Result<()> {
        self.board.reset(build_pool(&self.contents), &mut self.rng)?;
        self.round = self.round.wrapping_add(1);
        self.round_ms = 0;
        self.score = 0;
        self.attempts = 0;
        self.hide_timer = None;
        self.game_over = false;
        info!(round = self.round, "round dealt");
        Ok(())
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn contents(&self) -> &[ContentId] {
        &self.contents
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Whole seconds elapsed in this round; frozen once the round is over.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Whether a mismatched pair is still on display.
    pub fn input_blocked(&self) -> bool {
        self.hide_timer.is_some()
    }

    /// Remaining display time of the current mismatch, if any.
    pub fn hide_timer_ms(&self) -> Option<u32> {
        self.hide_timer.map(|t| t.remaining_ms)
    }

    /// Handle a pointer press at `point` on a screen of size `viewport`.
    ///
    /// Presses outside every cell, during a mismatch display, or after the round
    /// is over are ignored.
    pub fn handle_click(&mut self, point: Point, viewport: Viewport) -> RevealOutcome {
        if self.game_over || self.input_blocked() {
            return RevealOutcome::Ignored;
        }
        match Layout::new(self.board.size(), viewport).hit_test(point) {
            Some(position) => self.reveal(position),
            None => RevealOutcome::Ignored,
        }
    }

    /// Reveal a cell directly (same rules as [`Session::handle_click`]).
    pub fn reveal(&mut self, position: Position) -> RevealOutcome {
        if self.game_over || self.input_blocked() {
            return RevealOutcome::Ignored;
        }

        let outcome = self.board.try_reveal(position);
        let Some(resolution) = outcome.resolution() else {
            return outcome;
        };

        self.attempts += 1;
        if resolution == Resolution::Mismatch {
            self.hide_timer = Some(HideTimer::new(self.config.mismatch_delay_ms));
            if self.config.mismatch_delay_ms == 0 {
                self.hide_mismatch();
            }
        }
        if self.board.is_complete() {
            self.finish_round();
        }
        outcome
    }

    /// Advance the round clock by `elapsed_ms`.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.game_over {
            return;
        }

        self.round_ms = self.round_ms.saturating_add(elapsed_ms as u64);
        self.score = u32::try_from(self.round_ms / 1000).unwrap_or(u32::MAX);

        if let Some(timer) = &mut self.hide_timer {
            if timer.advance(elapsed_ms) {
                self.hide_mismatch();
            }
        }
    }

    fn hide_mismatch(&mut self) {
        self.hide_timer = None;
        let hidden = self.board.resolve_mismatch();
        debug_assert!(hidden, "mismatch timer ran without a pending pair");
    }

    fn finish_round(&mut self) {
        debug_assert!(!self.game_over);
        self.game_over = true;
        self.hide_timer = None;
        info!(
            round = self.round,
            score = self.score,
            attempts = self.attempts,
            "round cleared"
        );
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.grid_size = self.board.size();
        out.cells.clear();
        out.cells.extend(self.board.tiles().iter().map(|t| t.view()));
        out.score = self.score;
        out.attempts = self.attempts;
        out.pairs_found = self.board.matched_pairs();
        out.pairs_total = self.board.pair_count();
        out.round = self.round;
        out.game_over = self.game_over;
        out.input_blocked = self.input_blocked();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

/// Countdown for a mismatched pair on display.
///
/// The first tick after the reveal is not charged: the frame time it reports
/// was spent before the pair was face-up. The pair therefore stays visible for
/// at least the full delay and for at least one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HideTimer {
    remaining_ms: u32,
    started: bool,
}

impl HideTimer {
    fn new(delay_ms: u32) -> Self {
        Self {
            remaining_ms: delay_ms,
            started: false,
        }
    }

    /// Returns `true` once the window has closed.
    fn advance(&mut self, elapsed_ms: u32) -> bool {
        if !self.started {
            self.started = true;
            return false;
        }
        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
        self.remaining_ms == 0
    }
}

/// Every content twice, in order.
pub fn build_pool(contents: &[ContentId]) -> Vec<ContentId> {
    let pool: Vec<ContentId> = contents.iter().flat_map(|&id| [id, id]).collect();
    debug!(tiles = pool.len(), "pool built");
    pool
}
