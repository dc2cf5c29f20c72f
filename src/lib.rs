//! # LZ77 with Hash Verification
//!
//! `lzhv` is a safe, pure-Rust LZ77 compressor producing a flat stream of
//! fixed-width 4-byte tokens: a 16-bit offset, an 8-bit length and one literal
//! byte. There is no header and no entropy coding stage.
//!
//! Two interchangeable match finders are provided: an exhaustive linear scan of
//! the window and a hash-chain index over 3-byte prefixes whose candidates are
//! verified byte by byte.
//!
//! ## Example
//!
//! ```rust
//! use lzhv::{Params, Strategy, compress, decompress};
//!
//! let input = b"abracadabra abracadabra abracadabra!";
//! let compressed = compress(input, Params::default(), Strategy::HashChain);
//! assert_eq!(compressed.data.len(), compressed.token_count * lzhv::TOKEN_SIZE);
//!
//! let mut restored = Vec::new();
//! decompress(&compressed.data, &mut restored);
//! assert_eq!(restored, input);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod compress;
pub mod decompress;
pub mod error;
pub mod finder;
#[cfg(feature = "std")]
pub mod fs;
pub mod hash;
pub mod stats;
pub mod token;

pub use compress::{Compressed, Params, compress, compress_with};
pub use decompress::{decompress, decompress_strict};
#[cfg(feature = "std")]
pub use error::FileError;
pub use error::DecompressionError;
pub use finder::{HashChainMatchFinder, LinearMatchFinder, Match, MatchFinder, Strategy};
pub use token::{TOKEN_SIZE, Token};
