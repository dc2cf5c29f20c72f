use super::{Match, MatchFinder};
use crate::hash::match_length;

/// Brute-force match finder.
///
/// Every position in the window is tried, oldest first. A candidate only
/// replaces the current best on a strictly longer match, so among equally long
/// matches the one found first (the farthest back) wins.
///
/// Cost is `O(window_size * lookahead_size)` per cursor position.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearMatchFinder;

impl LinearMatchFinder {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl MatchFinder for LinearMatchFinder {
    fn find_best_match(
        &mut self,
        input: &[u8],
        cursor: usize,
        window_size: usize,
        lookahead_size: usize,
    ) -> Match {
        let search_start = cursor.saturating_sub(window_size);
        // Longest match any candidate could possibly reach.
        let ceiling = lookahead_size.min(input.len().saturating_sub(cursor));
        let mut best = Match::NONE;

        for candidate in search_start..cursor {
            let len = match_length(input, candidate, cursor, lookahead_size);
            if len > best.length {
                best = Match {
                    distance: cursor - candidate,
                    length: len,
                };
                if len == ceiling {
                    break;
                }
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_history() {
        let mut finder = LinearMatchFinder::new();
        assert_eq!(finder.find_best_match(b"abc", 0, 4096, 255), Match::NONE);
    }

    #[test]
    fn test_finds_longest() {
        // "ab" at 0, "abc" at 3; cursor 7 starts "abcd".
        let input = b"abXabcXabcd";
        let mut finder = LinearMatchFinder::new();
        let m = finder.find_best_match(input, 7, 4096, 255);
        assert_eq!(m, Match { distance: 4, length: 3 });
    }

    #[test]
    fn test_first_seen_wins_ties() {
        // "abc" at 0 and at 4; cursor 8 is "abc" again. The oldest candidate wins.
        let input = b"abc_abc_abc";
        let mut finder = LinearMatchFinder::new();
        let m = finder.find_best_match(input, 8, 4096, 255);
        assert_eq!(m, Match { distance: 8, length: 3 });
    }

    #[test]
    fn test_window_bounds_search() {
        let input = b"abc_abc_abc";
        let mut finder = LinearMatchFinder::new();
        let m = finder.find_best_match(input, 8, 4, 255);
        assert_eq!(m, Match { distance: 4, length: 3 });

        let m = finder.find_best_match(input, 8, 2, 255);
        assert_eq!(m, Match::NONE);
    }

    #[test]
    fn test_lookahead_caps_length() {
        let input = [b'a'; 20];
        let mut finder = LinearMatchFinder::new();
        let m = finder.find_best_match(&input, 1, 4096, 5);
        assert_eq!(m, Match { distance: 1, length: 5 });
    }

    #[test]
    fn test_overlapping_run() {
        let input = [b'a'; 10];
        let mut finder = LinearMatchFinder::new();
        let m = finder.find_best_match(&input, 1, 4096, 255);
        assert_eq!(m, Match { distance: 1, length: 9 });
    }
}
