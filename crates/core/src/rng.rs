//! RNG module - seeded shuffling of the content pool onto the grid
//!
//! Dealing happens in two passes, the way a physical deck is laid out:
//! the flat pool is shuffled, then the tiles inside each row are shuffled again.
//!
//! Every round is driven by a [`SmallRng`] seeded from a `u64`, so a logged seed
//! is enough to replay a deal.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Create the deterministic RNG used for dealing.
pub fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Shuffle `cells` (row-major, `size` columns) in place.
pub fn shuffle_onto_grid<T, R: Rng + ?Sized>(cells: &mut [T], size: u8, rng: &mut R) {
    cells.shuffle(rng);
    if size == 0 {
        return;
    }
    for row in cells.chunks_mut(size as usize) {
        row.shuffle(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_deals_identically() {
        let mut a: Vec<u16> = (0..16).collect();
        let mut b = a.clone();

        shuffle_onto_grid(&mut a, 4, &mut seeded_rng(12345));
        shuffle_onto_grid(&mut b, 4, &mut seeded_rng(12345));

        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_preserves_multiset() {
        let mut cells: Vec<u16> = (0..36).map(|i| i / 2).collect();
        shuffle_onto_grid(&mut cells, 6, &mut seeded_rng(7));

        let mut sorted = cells.clone();
        sorted.sort_unstable();
        let expected: Vec<u16> = (0..36).map(|i| i / 2).collect();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn different_seeds_eventually_differ() {
        let base: Vec<u16> = (0..16).collect();
        let mut first = base.clone();
        shuffle_onto_grid(&mut first, 4, &mut seeded_rng(1));

        let differs = (2..10).any(|seed| {
            let mut other = base.clone();
            shuffle_onto_grid(&mut other, 4, &mut seeded_rng(seed));
            other != first
        });
        assert!(differs);
    }

    #[test]
    fn every_cell_reachable_from_first_slot() {
        // Loose uniformity check: the first item lands on every cell for some seed.
        let mut seen = [false; 16];
        for seed in 0..2000 {
            let mut cells: Vec<u16> = (0..16).collect();
            shuffle_onto_grid(&mut cells, 4, &mut seeded_rng(seed));
            let slot = cells.iter().position(|&c| c == 0).unwrap();
            seen[slot] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
