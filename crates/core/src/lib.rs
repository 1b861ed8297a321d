//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the rules of the memory game and nothing else. It has no
//! dependency on the terminal, which keeps it:
//!
//! - **Deterministic**: the same seed deals the same board
//! - **Testable**: every rule is exercised without a screen
//! - **Portable**: the terminal front-end is one of many possible renderers
//!
//! # Module Structure
//!
//! - [`board`]: the tile grid, pending pair, match/mismatch resolution
//! - [`session`]: round clock, score, mismatch display window, input gating
//! - [`layout`]: cell rectangles and hit testing for a viewport
//! - [`deck`]: asset providers mapping content ids to glyphs
//! - [`rng`]: seeded two-pass shuffle
//! - [`snapshot`]: per-frame draw data
//!
//! # Game Rules
//!
//! - Every content is dealt exactly twice onto a square grid
//! - The player reveals two tiles per turn
//! - A matching pair stays face-up for the rest of the round
//! - A mismatched pair stays face-up for a short delay, then flips back;
//!   no tile can be revealed during the delay
//! - The round ends when every tile is matched; the score is the number of
//!   whole seconds it took
//!
//! # Example
//!
//! ```
//! use tui_memory_core::{Board, Resolution, RevealOutcome, Session, SessionConfig};
//! use tui_memory_types::{ContentId, Position};
//!
//! // (0,0)=A (0,1)=B
//! // (1,0)=B (1,1)=A
//! let a = ContentId(0);
//! let b = ContentId(1);
//! let board = Board::with_layout(2, vec![a, b, b, a]).unwrap();
//! let mut session = Session::from_board(SessionConfig::default(), board);
//!
//! assert_eq!(session.reveal(Position::new(0, 0)), RevealOutcome::Revealed);
//! assert_eq!(
//!     session.reveal(Position::new(1, 1)),
//!     RevealOutcome::RevealedAndResolved(Resolution::Match)
//! );
//! assert_eq!(session.board().matched_count(), 2);
//! assert!(!session.game_over());
//! ```
//!
//! # Timing
//!
//! Call [`Session::tick`](session::Session::tick) every frame with the elapsed
//! milliseconds. The score and the mismatch display window only move there.

pub mod board;
pub mod deck;
pub mod error;
pub mod layout;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use board::{validate_pool, Board, PendingPair, Resolution, RevealOutcome, Tile, TileFace};
pub use deck::{AssetProvider, Deck, DeckEntry, DeckError, DirectoryDeck, GlyphDeck};
pub use error::{InvalidPoolError, Result};
pub use layout::Layout;
pub use rng::{seeded_rng, shuffle_onto_grid};
pub use session::{build_pool, Session, SessionConfig};
pub use snapshot::SessionSnapshot;
