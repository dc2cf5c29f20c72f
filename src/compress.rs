use alloc::vec::Vec;

use crate::finder::{HashChainMatchFinder, LinearMatchFinder, Match, MatchFinder, Strategy};
use crate::token::{TOKEN_SIZE, Token};

/// Default search window (4KB).
pub const DEFAULT_WINDOW_SIZE: u16 = 4096;

/// Default lookahead, the largest length the 8-bit field can carry.
pub const DEFAULT_LOOKAHEAD_SIZE: u8 = u8::MAX;

/// Window and lookahead bounds for one compression call.
///
/// `window_size` bounds the token offset and `lookahead_size` bounds the token
/// length, so both are typed to fit their wire fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    pub window_size: u16,
    pub lookahead_size: u8,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            lookahead_size: DEFAULT_LOOKAHEAD_SIZE,
        }
    }
}

impl Params {
    #[must_use]
    pub const fn new(window_size: u16, lookahead_size: u8) -> Self {
        Self {
            window_size,
            lookahead_size,
        }
    }
}

/// The encoded token stream and the number of tokens in it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Compressed {
    pub data: Vec<u8>,
    pub token_count: usize,
}

/// Compresses `input` with the match finder selected by `strategy`.
///
/// Empty input produces an empty stream and zero tokens.
#[must_use]
pub fn compress(input: &[u8], params: Params, strategy: Strategy) -> Compressed {
    let mut data = Vec::with_capacity(input.len().saturating_mul(TOKEN_SIZE) / 2);
    let token_count = match strategy {
        Strategy::Linear => compress_with(input, &mut data, params, LinearMatchFinder::new()),
        Strategy::HashChain => {
            compress_with(input, &mut data, params, HashChainMatchFinder::new())
        }
    };
    Compressed { data, token_count }
}

/// Compresses `input` using `finder`, appending 4-byte token records to `output`.
///
/// The finder is consumed so its index cannot leak into another call.
/// Returns the number of tokens written.
pub fn compress_with<F: MatchFinder>(
    input: &[u8],
    output: &mut Vec<u8>,
    params: Params,
    mut finder: F,
) -> usize {
    let window_size = usize::from(params.window_size);
    let lookahead_size = usize::from(params.lookahead_size);
    let min_len = finder.min_match_len().max(1);

    let mut cursor = 0;
    let mut token_count = 0;

    while cursor < input.len() {
        let found = finder.find_best_match(input, cursor, window_size, lookahead_size);

        let reference = to_reference(input, cursor, found, window_size, lookahead_size, min_len);
        let token = match reference {
            Some(token) => {
                cursor += found.length + 1;
                token
            }
            None => {
                let token = Token::literal(input[cursor]);
                cursor += 1;
                token
            }
        };

        token.write_to(output);
        token_count += 1;
    }

    token_count
}

/// Turns a finder's match into a reference token, or `None` if it cannot be
/// encoded as one.
///
/// The source must start inside both the window and the bytes already
/// consumed, and a trailing literal must exist, so a reference may not reach
/// the last input byte.
#[inline]
fn to_reference(
    input: &[u8],
    cursor: usize,
    found: Match,
    window_size: usize,
    lookahead_size: usize,
    min_len: usize,
) -> Option<Token> {
    if found.length < min_len || found.length > lookahead_size {
        return None;
    }
    if found.distance == 0 || found.distance > cursor.min(window_size) {
        return None;
    }
    let literal = *input.get(cursor.checked_add(found.length)?)?;
    let offset = u16::try_from(found.distance).ok()?;
    let length = u8::try_from(found.length).ok()?;
    Some(Token::reference(offset, length, literal))
}
