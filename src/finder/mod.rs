//! Match finding strategies.
//!
//! A [`MatchFinder`] locates the best backward reference for the byte at the
//! encoder's cursor. Two implementations are provided:
//!
//! * [`LinearMatchFinder`] scans every position of the window.
//! * [`HashChainMatchFinder`] indexes 3-byte prefixes and only verifies the
//!   positions that share the cursor's prefix hash.
//!
//! Both verify candidates byte by byte, so they never emit an incorrect
//! reference. They may pick different references for the same input.

pub mod hash_chain;
pub mod linear;

pub use hash_chain::HashChainMatchFinder;
pub use linear::LinearMatchFinder;

/// A candidate back-reference: `length` bytes starting `distance` bytes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Match {
    pub distance: usize,
    pub length: usize,
}

impl Match {
    /// No usable match.
    pub const NONE: Self = Self {
        distance: 0,
        length: 0,
    };

    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.length == 0
    }
}

/// Finds the best match for the byte at `cursor`.
///
/// Implementations may keep state between calls (the hash-chain finder does),
/// so one finder instance must only ever see one input, with monotonically
/// increasing cursors.
pub trait MatchFinder {
    /// Returns the longest match for `input[cursor..]` whose source starts in
    /// `[cursor - window_size, cursor)` and whose length is at most
    /// `lookahead_size`, or [`Match::NONE`].
    fn find_best_match(
        &mut self,
        input: &[u8],
        cursor: usize,
        window_size: usize,
        lookahead_size: usize,
    ) -> Match;

    /// Shortest match length this finder will report.
    fn min_match_len(&self) -> usize {
        1
    }
}

/// Selects which [`MatchFinder`] the encoder runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum, serde::Serialize))]
#[cfg_attr(feature = "cli", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    /// Exhaustive scan of the whole window.
    Linear,
    /// Hash-indexed candidate lookup with byte-by-byte verification.
    #[default]
    HashChain,
}

impl Strategy {
    /// Both strategies, in a fixed order.
    pub const ALL: [Self; 2] = [Self::Linear, Self::HashChain];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::HashChain => "hash-chain",
        }
    }
}

impl core::fmt::Display for Strategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
