//! Board module - the tile grid and the matching rules
//!
//! The board is a `size x size` grid of tiles, each hiding one content id.
//! Every content id is dealt exactly twice.
//! Uses a flat vector in row-major order (`row * size + col`).
//!
//! At most two tiles are revealed-but-unresolved at any time. They are tracked in
//! a [`PendingPair`]. When the second tile is revealed the pair is resolved on the
//! spot: a match is locked in and the pair drained, a mismatch stays face-up until
//! the caller invokes [`Board::resolve_mismatch`]. While a mismatch is pending the
//! board ignores further reveals.

use std::collections::BTreeMap;

use arrayvec::ArrayVec;
use rand::Rng;
use tracing::{debug, trace};

use crate::error::{InvalidPoolError, Result};
use crate::rng::shuffle_onto_grid;
use crate::types::{CellView, ContentId, Position};

/// Face state of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileFace {
    #[default]
    Hidden,
    Revealed,
    Matched,
}

/// One grid slot and the content dealt to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    position: Position,
    content: ContentId,
    face: TileFace,
}

impl Tile {
    fn new(position: Position, content: ContentId) -> Self {
        Self {
            position,
            content,
            face: TileFace::Hidden,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn content(&self) -> ContentId {
        self.content
    }

    pub fn face(&self) -> TileFace {
        self.face
    }

    /// Whether the hidden content is currently shown.
    pub fn is_revealed(&self) -> bool {
        self.face != TileFace::Hidden
    }

    pub fn is_matched(&self) -> bool {
        self.face == TileFace::Matched
    }

    pub fn view(&self) -> CellView {
        match self.face {
            TileFace::Hidden => CellView::Hidden,
            TileFace::Revealed => CellView::Showing(self.content),
            TileFace::Matched => CellView::Matched(self.content),
        }
    }
}

/// Result of comparing two revealed tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Match,
    Mismatch,
}

/// Outcome of [`Board::try_reveal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Nothing changed.
    Ignored,
    /// First tile of a pair is now face-up.
    Revealed,
    /// Second tile of a pair is face-up and the pair was compared.
    RevealedAndResolved(Resolution),
}

impl RevealOutcome {
    pub const fn resolution(self) -> Option<Resolution> {
        match self {
            RevealOutcome::RevealedAndResolved(resolution) => Some(resolution),
            _ => None,
        }
    }
}

/// Revealed-but-unresolved tiles, in reveal order. Never holds more than two.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingPair {
    slots: ArrayVec<Position, 2>,
}

impl PendingPair {
    pub fn first(&self) -> Option<Position> {
        self.slots.first().copied()
    }

    pub fn second(&self) -> Option<Position> {
        self.slots.get(1).copied()
    }

    /// Both positions, once the pair is complete.
    pub fn both(&self) -> Option<(Position, Position)> {
        Some((self.first()?, self.second()?))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.is_full()
    }

    pub fn contains(&self, position: Position) -> bool {
        self.slots.contains(&position)
    }

    fn push(&mut self, position: Position) {
        debug_assert!(!self.is_full(), "pending pair overflow");
        self.slots.push(position);
    }

    fn clear(&mut self) {
        self.slots.clear();
    }
}

/// The game board - `size x size` tiles using flat vector storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    size: u8,
    /// Row-major tiles (`row * size + col`)
    tiles: Vec<Tile>,
    pending: PendingPair,
    matched_count: u16,
}

impl Board {
    /// Validate `pool` and deal it onto a freshly shuffled `size x size` grid.
    pub fn new<R: Rng + ?Sized>(size: u8, mut pool: Vec<ContentId>, rng: &mut R) -> Result<Self> {
        validate_pool(size, &pool)?;
        shuffle_onto_grid(&mut pool, size, rng);
        Ok(Self::place(size, pool))
    }

    /// Validate `contents` and deal them row-major without shuffling.
    pub fn with_layout(size: u8, contents: Vec<ContentId>) -> Result<Self> {
        validate_pool(size, &contents)?;
        Ok(Self::place(size, contents))
    }

    fn place(size: u8, contents: Vec<ContentId>) -> Self {
        let tiles = contents
            .into_iter()
            .enumerate()
            .map(|(i, content)| Tile::new(Position::from_index(i, size), content))
            .collect();
        Self {
            size,
            tiles,
            pending: PendingPair::default(),
            matched_count: 0,
        }
    }

    /// Deal a new round onto a board of the same size.
    ///
    /// On error the current board is left untouched.
    pub fn reset<R: Rng + ?Sized>(&mut self, pool: Vec<ContentId>, rng: &mut R) -> Result<()> {
        *self = Self::new(self.size, pool, rng)?;
        Ok(())
    }

    /// Rows (and columns) of the grid
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Total number of tiles
    pub fn tile_count(&self) -> u16 {
        self.tiles.len() as u16
    }

    pub fn pair_count(&self) -> u16 {
        self.tile_count() / 2
    }

    pub fn matched_count(&self) -> u16 {
        self.matched_count
    }

    pub fn matched_pairs(&self) -> u16 {
        self.matched_count / 2
    }

    pub fn pending(&self) -> &PendingPair {
        &self.pending
    }

    /// Whether a mismatched pair is waiting for [`Board::resolve_mismatch`].
    pub fn has_unresolved_mismatch(&self) -> bool {
        self.pending.is_full()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Get the tile at `position`, `None` if out of bounds
    pub fn tile(&self, position: Position) -> Option<&Tile> {
        self.index(position).map(|idx| &self.tiles[idx])
    }

    pub fn cell_view(&self, position: Position) -> Option<CellView> {
        self.tile(position).map(Tile::view)
    }

    pub fn is_complete(&self) -> bool {
        self.matched_count == self.tile_count()
    }

    #[inline(always)]
    fn index(&self, position: Position) -> Option<usize> {
        position
            .is_within(self.size)
            .then(|| position.index(self.size))
    }

    /// Reveal the tile at `position`.
    ///
    /// Ignored when the position is off the board, the tile is already face-up
    /// (pending or matched), a mismatched pair is still pending, or the round is
    /// complete. Revealing the second tile of a pair resolves it immediately.
    pub fn try_reveal(&mut self, position: Position) -> RevealOutcome {
        let Some(idx) = self.index(position) else {
            trace!(?position, "reveal off board");
            return RevealOutcome::Ignored;
        };
        if self.is_complete() || self.pending.is_full() || self.pending.contains(position) {
            return RevealOutcome::Ignored;
        }
        if self.tiles[idx].face != TileFace::Hidden {
            return RevealOutcome::Ignored;
        }

        self.tiles[idx].face = TileFace::Revealed;
        self.pending.push(position);
        debug!(?position, content = ?self.tiles[idx].content, "tile revealed");

        match self.pending.both() {
            Some((first, second)) => RevealOutcome::RevealedAndResolved(self.resolve(first, second)),
            None => RevealOutcome::Revealed,
        }
    }

    fn resolve(&mut self, first: Position, second: Position) -> Resolution {
        let a = first.index(self.size);
        let b = second.index(self.size);

        if self.tiles[a].content != self.tiles[b].content {
            debug!(?first, ?second, "mismatch");
            return Resolution::Mismatch;
        }

        self.tiles[a].face = TileFace::Matched;
        self.tiles[b].face = TileFace::Matched;
        self.pending.clear();
        self.matched_count += 2;
        assert!(
            self.matched_count <= self.tile_count(),
            "matched {} tiles on a board of {}",
            self.matched_count,
            self.tile_count()
        );
        debug!(?first, ?second, matched = self.matched_count, "match");
        Resolution::Match
    }

    /// Flip a pending mismatched pair face-down again.
    ///
    /// Returns `false` (and changes nothing) unless a mismatched pair is pending.
    pub fn resolve_mismatch(&mut self) -> bool {
        let Some((first, second)) = self.pending.both() else {
            return false;
        };
        let a = first.index(self.size);
        let b = second.index(self.size);
        debug_assert_ne!(self.tiles[a].content, self.tiles[b].content);

        self.tiles[a].face = TileFace::Hidden;
        self.tiles[b].face = TileFace::Hidden;
        self.pending.clear();
        debug!(?first, ?second, "mismatch hidden");
        true
    }
}

/// Check that `pool` fills a `size x size` grid with every content exactly twice.
pub fn validate_pool(size: u8, pool: &[ContentId]) -> Result<()> {
    if size == 0 {
        return Err(InvalidPoolError::EmptyGrid);
    }
    let expected = (size as usize) * (size as usize);
    if pool.len() != expected {
        return Err(InvalidPoolError::WrongLength {
            size,
            expected,
            actual: pool.len(),
        });
    }
    let odd = count_multiplicities(pool)
        .into_iter()
        .find(|&(_, count)| count != 2);
    if let Some((content, count)) = odd {
        return Err(InvalidPoolError::Multiplicity { content, count });
    }
    Ok(())
}

/// `content -> occurrences`, in ascending content order.
fn count_multiplicities(pool: &[ContentId]) -> BTreeMap<ContentId, usize> {
    let mut counts = BTreeMap::new();
    for &content in pool {
        *counts.entry(content).or_insert(0) += 1;
    }
    counts
}
