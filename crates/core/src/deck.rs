//! Decks - where the hidden contents come from.
//!
//! The board only ever sees opaque [`ContentId`]s. A [`Deck`] maps each id to
//! the glyph the terminal draws for it. Decks are produced by an
//! [`AssetProvider`]:
//!
//! - [`GlyphDeck`]: built-in symbols, the default
//! - [`DirectoryDeck`]: one content per file in a directory, labelled by the
//!   first free letter of the file stem. The face-down placeholder
//!   (`image0.*`) and dotfiles are skipped.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::types::{ContentId, FACE_DOWN_ASSET_STEM, FACE_DOWN_GLYPH};

/// ASCII only, so every label occupies exactly one terminal column.
/// Enough for an 8x8 grid.
const GLYPHS: [char; 32] = [
    '#', '$', '%', '&', '@', '*', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L',
    'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Need {needed} distinct contents but only {available} are available")]
    NotEnoughAssets { needed: usize, available: usize },
    #[error("Could not list assets in {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One content: its glyph and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckEntry {
    pub label: char,
    pub name: String,
}

/// Catalogue of contents for one session. `ContentId(i)` is the `i`-th entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    entries: Vec<DeckEntry>,
}

impl Deck {
    pub fn new(entries: Vec<DeckEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[DeckEntry] {
        &self.entries
    }

    /// Distinct ids, one per entry.
    pub fn content_ids(&self) -> Vec<ContentId> {
        (0..self.entries.len())
            .map(|i| ContentId(i as u16))
            .collect()
    }

    pub fn entry(&self, id: ContentId) -> Option<&DeckEntry> {
        self.entries.get(id.0 as usize)
    }

    /// Glyph for `id`, the face-down glyph for unknown ids.
    pub fn label(&self, id: ContentId) -> char {
        self.entry(id).map_or(FACE_DOWN_GLYPH, |e| e.label)
    }
}

/// Supplies the distinct contents for a round.
pub trait AssetProvider {
    /// Produce exactly `pairs` distinct contents.
    fn load(&self, pairs: usize) -> Result<Deck, DeckError>;
}

/// Built-in symbol deck.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlyphDeck;

impl AssetProvider for GlyphDeck {
    fn load(&self, pairs: usize) -> Result<Deck, DeckError> {
        if pairs > GLYPHS.len() {
            return Err(DeckError::NotEnoughAssets {
                needed: pairs,
                available: GLYPHS.len(),
            });
        }
        let entries = GLYPHS[..pairs]
            .iter()
            .map(|&label| DeckEntry {
                label,
                name: label.to_string(),
            })
            .collect();
        Ok(Deck::new(entries))
    }
}

/// Deck built from the files of a directory.
#[derive(Debug, Clone)]
pub struct DirectoryDeck {
    dir: PathBuf,
}

impl DirectoryDeck {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Sorted file names that can be dealt.
    fn list(&self) -> Result<Vec<String>, DeckError> {
        let io_err = |source: io::Error| DeckError::Io {
            path: self.dir.clone(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(io_err)? {
            let entry = entry.map_err(io_err)?;
            if !entry.file_type().map_err(io_err)?.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') || file_stem(&name) == FACE_DOWN_ASSET_STEM {
                continue;
            }
            names.push(name);
        }
        names.sort();
        Ok(names)
    }
}

impl AssetProvider for DirectoryDeck {
    fn load(&self, pairs: usize) -> Result<Deck, DeckError> {
        let names = self.list()?;
        if names.len() < pairs {
            return Err(DeckError::NotEnoughAssets {
                needed: pairs,
                available: names.len(),
            });
        }
        if names.len() > pairs {
            warn!(
                dir = %self.dir.display(),
                available = names.len(),
                used = pairs,
                "more assets than pairs, extra files are not dealt"
            );
        }

        let mut used = Vec::with_capacity(pairs);
        let entries = names
            .into_iter()
            .take(pairs)
            .map(|name| {
                let label = pick_label(file_stem(&name), &used);
                used.push(label);
                debug!(%name, %label, "asset");
                DeckEntry { label, name }
            })
            .collect();
        Ok(Deck::new(entries))
    }
}

fn file_stem(name: &str) -> &str {
    Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name)
}

/// First letter of `stem` not already taken, falling back to the built-in glyphs.
fn pick_label(stem: &str, used: &[char]) -> char {
    stem.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_uppercase)
        .chain(GLYPHS)
        .find(|c| !used.contains(c) && *c != FACE_DOWN_GLYPH)
        .unwrap_or(FACE_DOWN_GLYPH)
}
