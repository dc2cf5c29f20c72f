//! Per-run compression statistics.
//!
//! Nothing here feeds back into the encoder; these types only describe what a
//! compression call produced and how long it took.

use alloc::string::String;
use alloc::vec::Vec;
use core::time::Duration;

use crate::finder::Strategy;

/// Floor for the hash-chain time when computing a speedup, in milliseconds.
const MIN_DIVISOR_MS: f64 = 0.001;

/// The outcome of compressing one input with one strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub strategy: Strategy,
    pub original_size: usize,
    pub compressed_size: usize,
    pub token_count: usize,
    pub elapsed: Duration,
}

impl RunStats {
    /// Compressed size as a percentage of the original size. Empty input yields 0.
    #[must_use]
    pub fn ratio_percent(&self) -> f64 {
        if self.original_size == 0 {
            return 0.0;
        }
        self.compressed_size as f64 / self.original_size as f64 * 100.0
    }

    /// Percentage of the original size saved; negative when the output grew.
    #[must_use]
    pub fn saved_percent(&self) -> f64 {
        100.0 - self.ratio_percent()
    }

    /// Whether compression made the data smaller.
    #[must_use]
    pub const fn is_worthwhile(&self) -> bool {
        self.compressed_size < self.original_size
    }

    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Linear and hash-chain runs over the same input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub linear: RunStats,
    pub hash_chain: RunStats,
}

impl Comparison {
    /// How many times faster the hash-chain run was than the linear run.
    #[must_use]
    pub fn speedup(&self) -> f64 {
        self.linear.elapsed_ms() / self.hash_chain.elapsed_ms().max(MIN_DIVISOR_MS)
    }
}

/// Receives statistics for each completed run.
pub trait StatsSink {
    fn record(&mut self, stats: &RunStats);
}

impl StatsSink for Vec<RunStats> {
    fn record(&mut self, stats: &RunStats) {
        self.push(*stats);
    }
}

/// Compresses `input` and reports how long it took.
#[cfg(feature = "std")]
#[must_use]
pub fn measure(
    input: &[u8],
    params: crate::Params,
    strategy: Strategy,
) -> (crate::Compressed, RunStats) {
    let started = std::time::Instant::now();
    let compressed = crate::compress(input, params, strategy);
    let elapsed = started.elapsed();

    let stats = RunStats {
        strategy,
        original_size: input.len(),
        compressed_size: compressed.data.len(),
        token_count: compressed.token_count,
        elapsed,
    };
    (compressed, stats)
}

/// Renders a byte count with two decimals in B, KB, MB or GB.
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut len = bytes as f64;
    let mut unit = 0;
    while len >= 1024.0 && unit < UNITS.len() - 1 {
        unit += 1;
        len /= 1024.0;
    }
    alloc::format!("{len:.2} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(strategy: Strategy, original: usize, compressed: usize, ms: u64) -> RunStats {
        RunStats {
            strategy,
            original_size: original,
            compressed_size: compressed,
            token_count: compressed / 4,
            elapsed: Duration::from_millis(ms),
        }
    }

    #[test]
    fn test_ratio_and_saved() {
        let stats = run(Strategy::Linear, 200, 50, 1);
        assert!((stats.ratio_percent() - 25.0).abs() < 1e-9);
        assert!((stats.saved_percent() - 75.0).abs() < 1e-9);
        assert!(stats.is_worthwhile());
    }

    #[test]
    fn test_growth_is_not_worthwhile() {
        let stats = run(Strategy::HashChain, 10, 40, 1);
        assert!((stats.ratio_percent() - 400.0).abs() < 1e-9);
        assert!(stats.saved_percent() < 0.0);
        assert!(!stats.is_worthwhile());
    }

    #[test]
    fn test_empty_ratio() {
        let stats = run(Strategy::Linear, 0, 0, 0);
        assert_eq!(stats.ratio_percent(), 0.0);
        assert!(!stats.is_worthwhile());
    }

    #[test]
    fn test_speedup_floors_divisor() {
        let cmp = Comparison {
            linear: run(Strategy::Linear, 100, 40, 10),
            hash_chain: run(Strategy::HashChain, 100, 40, 0),
        };
        assert!((cmp.speedup() - 10_000.0).abs() < 1e-6);

        let cmp = Comparison {
            linear: run(Strategy::Linear, 100, 40, 10),
            hash_chain: run(Strategy::HashChain, 100, 40, 5),
        };
        assert!((cmp.speedup() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_vec_sink_records() {
        let mut sink: Vec<RunStats> = Vec::new();
        let stats = run(Strategy::Linear, 1, 4, 0);
        sink.record(&stats);
        assert_eq!(sink, [stats]);
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512.00 B");
        assert_eq!(format_bytes(1536), "1.50 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.00 MB");
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_measure_reports_sizes() {
        let input = b"abcabcabcabcabcabc!";
        let (compressed, stats) = measure(input, crate::Params::default(), Strategy::HashChain);
        assert_eq!(stats.original_size, input.len());
        assert_eq!(stats.compressed_size, compressed.data.len());
        assert_eq!(stats.token_count, compressed.token_count);
    }
}
