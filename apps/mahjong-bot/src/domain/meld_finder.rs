//! Greedy meld scan over a sorted tile sequence.
//!
//! The scan is a single left-to-right pass without backtracking: it finds one
//! non-overlapping tiling, not every possible one. Hands with interleaved
//! candidates (e.g. `W2 W3 W3 W4 W4 W5`, which holds two runs) report fewer
//! melds than a full search would. Claim selection depends on this exact greedy
//! order.

use std::ops::Range;

use super::melds::{Meld, MeldKind};
use super::tiles_types::Tile;

/// A meld together with the positions it occupies in the scanned sequence.
pub type MeldSpan = (Range<usize>, Meld);

/// Scan `tiles` (which must already be sorted) for melds whose first member sits
/// in `range_start..range_end`.
///
/// Only three-tile windows are classified: a triplet when the tiles are equal,
/// else a run. A match is recorded and skipped over; otherwise the scan advances
/// by one. The scan stops once fewer than three tiles remain, whatever
/// `range_end` says. Returns an empty vector when nothing matches.
pub fn find_melds(tiles: &[Tile], range_start: usize, range_end: usize) -> Vec<MeldSpan> {
    debug_assert!(tiles.windows(2).all(|w| w[0] <= w[1]), "input must be sorted");

    let mut found = Vec::new();
    let mut pos = range_start;
    while pos < range_end {
        if tiles.len().saturating_sub(pos) < 3 {
            break;
        }
        match meld_at(&tiles[pos..pos + 3]) {
            Some(meld) => {
                found.push((pos..pos + 3, meld));
                pos += 3;
            }
            None => pos += 1,
        }
    }
    found
}

/// Classify one three-tile window.
fn meld_at(window: &[Tile]) -> Option<Meld> {
    let [a, b, c] = window else {
        return None;
    };
    if a == b && b == c {
        return Some(Meld::from_parts(MeldKind::Triplet, window.to_vec()));
    }
    if b.follows(a) && c.follows(b) {
        return Some(Meld::from_parts(MeldKind::Run, window.to_vec()));
    }
    None
}

/// The quad formed by `tiles[last]` and the three tiles before it, if they are
/// all equal.
///
/// Quads never take part in the greedy scan; gang claims look for one here.
pub fn quad_ending_at(tiles: &[Tile], last: usize) -> Option<MeldSpan> {
    let start = last.checked_sub(3)?;
    let window = tiles.get(start..=last)?;
    if window.iter().all(|t| *t == window[0]) {
        Some((start..last + 1, Meld::from_parts(MeldKind::Quad, window.to_vec())))
    } else {
        None
    }
}

/// Tiles of `tiles` not covered by any meld the greedy scan finds across the
/// whole sequence, in order.
pub fn tiles_outside_melds(tiles: &[Tile]) -> Vec<Tile> {
    let mut free = Vec::with_capacity(tiles.len());
    let mut cursor = 0;
    for (span, _) in find_melds(tiles, 0, tiles.len()) {
        free.extend_from_slice(&tiles[cursor..span.start]);
        cursor = span.end;
    }
    free.extend_from_slice(&tiles[cursor..]);
    free
}
