//! Command-line configuration.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::Level;

use crate::core::{AssetProvider, Deck, DirectoryDeck, GlyphDeck, SessionConfig};
use crate::types::{
    DEFAULT_GRID_SIZE, MAX_GRID_SIZE, MAX_MISMATCH_DELAY_MS, MIN_GRID_SIZE, MISMATCH_DELAY_MS,
};

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "tui-memory")]
#[command(about = "Find the matching pairs of hidden tiles")]
#[command(version)]
pub struct Args {
    /// Tiles per side (even, 2 to 8)
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE, value_parser = parse_grid_size)]
    pub size: u8,

    /// Shuffle seed (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory with one file per tile content; `image0.*` is ignored
    #[arg(long, value_name = "DIR")]
    pub assets: Option<PathBuf>,

    /// How long a mismatched pair stays face-up, in milliseconds
    #[arg(
        long,
        default_value_t = MISMATCH_DELAY_MS,
        value_parser = clap::value_parser!(u32).range(0..=MAX_MISMATCH_DELAY_MS as i64)
    )]
    pub mismatch_delay_ms: u32,

    /// Write logs to this file (nothing is logged otherwise)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// The configured seed, or a fresh random one.
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    pub fn session_config(&self, seed: u64) -> SessionConfig {
        SessionConfig {
            grid_size: self.size,
            mismatch_delay_ms: self.mismatch_delay_ms,
            seed,
        }
    }

    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// Install the file logger when `--log-file` is given.
    ///
    /// The terminal is in raw mode on the alternate screen while playing, so
    /// logs never go to stdout or stderr.
    pub fn init_logging(&self) -> Result<()> {
        let Some(path) = &self.log_file else {
            return Ok(());
        };
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_max_level(self.log_level())
            .try_init()
            .map_err(|e| anyhow!("installing logger: {e}"))?;
        Ok(())
    }

    /// Contents for `pairs` pairs, from `--assets` or the built-in glyphs.
    pub fn load_deck(&self, pairs: usize) -> Result<Deck> {
        match &self.assets {
            Some(dir) => DirectoryDeck::new(dir)
                .load(pairs)
                .with_context(|| format!("loading assets from {}", dir.display())),
            None => GlyphDeck.load(pairs).context("building the glyph deck"),
        }
    }
}

fn parse_grid_size(s: &str) -> Result<u8, String> {
    let size: u8 = s
        .parse()
        .map_err(|_| format!("`{s}` is not a grid size"))?;
    if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) || size % 2 != 0 {
        return Err(format!(
            "grid size must be even and between {MIN_GRID_SIZE} and {MAX_GRID_SIZE}"
        ));
    }
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("tui-memory").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.size, DEFAULT_GRID_SIZE);
        assert_eq!(args.mismatch_delay_ms, MISMATCH_DELAY_MS);
        assert_eq!(args.seed, None);
        assert_eq!(args.log_level(), Level::WARN);
    }

    #[test]
    fn grid_size_must_be_even_and_in_range() {
        assert_eq!(parse(&["--size", "6"]).unwrap().size, 6);
        assert!(parse(&["--size", "3"]).is_err());
        assert!(parse(&["--size", "0"]).is_err());
        assert!(parse(&["--size", "10"]).is_err());
        assert!(parse(&["--size", "four"]).is_err());
    }

    #[test]
    fn mismatch_delay_is_bounded() {
        assert_eq!(
            parse(&["--mismatch-delay-ms", "0"]).unwrap().mismatch_delay_ms,
            0
        );
        assert!(parse(&["--mismatch-delay-ms", "10001"]).is_err());
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(parse(&["-v"]).unwrap().log_level(), Level::INFO);
        assert_eq!(parse(&["-vv"]).unwrap().log_level(), Level::DEBUG);
        assert_eq!(parse(&["-vvvv"]).unwrap().log_level(), Level::TRACE);
    }

    #[test]
    fn explicit_seed_is_used() {
        let args = parse(&["--seed", "42", "--size", "2"]).unwrap();
        let config = args.session_config(args.seed());
        assert_eq!(config.seed, 42);
        assert_eq!(config.grid_size, 2);
        assert_eq!(config.pairs(), 2);
    }

    #[test]
    fn glyph_deck_is_the_default() {
        let args = parse(&[]).unwrap();
        let deck = args.load_deck(8).unwrap();
        assert_eq!(deck.len(), 8);
    }

    #[test]
    fn missing_assets_dir_is_reported() {
        let args = parse(&["--assets", "/nonexistent/tui-memory-assets"]).unwrap();
        let err = args.load_deck(2).unwrap_err();
        assert!(format!("{err:#}").contains("loading assets"));
    }
}
