use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use super::{Match, MatchFinder};
use crate::hash::{PREFIX_LEN, match_length, prefix_hash};

/// Shortest match the hash-chain finder reports.
pub const MIN_MATCH: usize = PREFIX_LEN;

/// A bucket longer than this is pruned of positions that left the window.
pub const MAX_CHAIN_LEN: usize = 100;

/// Hash-accelerated match finder.
///
/// Keeps a map from the hash of each visited cursor's 3-byte prefix to the
/// positions that produced it, in increasing order. Only those positions are
/// considered as candidates, and each one is verified byte by byte, so hash
/// collisions never produce a wrong reference.
///
/// Among equally long candidates the last one verified (the closest) wins.
///
/// The index only grows with the cursors this finder is asked about, and is
/// dropped with the finder. Use one instance per compression call.
#[derive(Debug, Default)]
pub struct HashChainMatchFinder {
    buckets: BTreeMap<u32, Vec<usize>>,
}

impl HashChainMatchFinder {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buckets: BTreeMap::new(),
        }
    }

}

impl MatchFinder for HashChainMatchFinder {
    fn find_best_match(
        &mut self,
        input: &[u8],
        cursor: usize,
        window_size: usize,
        lookahead_size: usize,
    ) -> Match {
        if cursor + PREFIX_LEN > input.len() {
            return Match::NONE;
        }

        let search_start = cursor.saturating_sub(window_size);
        let hash = prefix_hash(input, cursor, PREFIX_LEN);
        let bucket = self.buckets.entry(hash).or_default();

        let mut best = Match::NONE;
        for &pos in bucket.iter() {
            if pos < search_start || pos >= cursor {
                continue;
            }
            let len = match_length(input, pos, cursor, lookahead_size);
            if len > 0 && len >= best.length {
                best = Match {
                    distance: cursor - pos,
                    length: len,
                };
            }
        }

        bucket.push(cursor);
        if bucket.len() > MAX_CHAIN_LEN {
            bucket.retain(|&pos| pos >= search_start);
        }

        if best.length < MIN_MATCH {
            return Match::NONE;
        }
        best
    }

    fn min_match_len(&self) -> usize {
        MIN_MATCH
    }
}
