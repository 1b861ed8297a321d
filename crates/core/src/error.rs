use thiserror::Error;

use crate::types::ContentId;

/// A content pool that cannot be dealt onto a square grid.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPoolError {
    #[error("Grid size must be at least 1")]
    EmptyGrid,
    #[error("Pool holds {actual} tiles but a {size}x{size} grid needs {expected}")]
    WrongLength {
        size: u8,
        expected: usize,
        actual: usize,
    },
    #[error("Content {content:?} appears {count} times, every content must appear exactly twice")]
    Multiplicity { content: ContentId, count: usize },
}

pub type Result<T> = core::result::Result<T, InvalidPoolError>;
