use crate::error::DecompressionError;
use crate::token::{TOKEN_SIZE, Token, Tokens};
use alloc::vec::Vec;

type Result<T> = core::result::Result<T, DecompressionError>;

/// Decompresses a token stream, appending the restored bytes to `output`.
///
/// Decoding is lenient and never fails:
/// * a back-reference starting before the beginning of the output is clamped
///   to position 0,
/// * copy steps that would read at or past the current end of the output are
///   skipped,
/// * a trailing partial record (fewer than 4 bytes) is ignored.
///
/// The literal byte of every record is always appended.
///
/// Offsets are relative to the data this call produces; any bytes already in
/// `output` are not part of the history.
pub fn decompress(input: &[u8], output: &mut Vec<u8>) {
    let start_out_len = output.len();
    output.reserve(max_decoded_len(input));

    for token in Tokens::new(input) {
        if token.length > 0 {
            copy_lenient(output, start_out_len, token);
        }
        output.push(token.literal);
    }
}

/// Decompresses a token stream, rejecting anything the encoder never produces.
///
/// Unlike [`decompress`], this reports truncated streams, back-references
/// outside the decoded history and tokens with only one of offset/length set.
/// On error, `output` holds the bytes decoded before the offending record.
pub fn decompress_strict(input: &[u8], output: &mut Vec<u8>) -> Result<()> {
    let start_out_len = output.len();
    let tokens = Tokens::new(input);
    let trailing = tokens.remainder().len();
    output.reserve(max_decoded_len(input));

    for (index, token) in tokens.enumerate() {
        let position = index * TOKEN_SIZE;

        if (token.offset == 0) != (token.length == 0) {
            return Err(DecompressionError::InconsistentToken { position });
        }

        if token.length > 0 {
            let available = output.len() - start_out_len;
            let offset = usize::from(token.offset);
            if offset > available {
                return Err(DecompressionError::InvalidOffset {
                    position,
                    offset,
                    available,
                });
            }
            copy_overlapping(output, offset, usize::from(token.length));
        }
        output.push(token.literal);
    }

    if trailing != 0 {
        return Err(DecompressionError::TruncatedRecord { trailing });
    }

    Ok(())
}

/// Upper bound on the bytes `input` decodes to; exact for encoder output.
fn max_decoded_len(input: &[u8]) -> usize {
    Tokens::new(input).map(|token| token.expanded_len()).sum()
}

/// Copies `token.length` bytes from `token.offset` back, dropping unreadable steps.
#[inline]
fn copy_lenient(output: &mut Vec<u8>, base: usize, token: Token) {
    let produced = output.len() - base;
    let start = base + produced.saturating_sub(usize::from(token.offset));

    for i in 0..usize::from(token.length) {
        let src = start + i;
        // `output` grows as we copy, so an overlapping run stays readable.
        if src < output.len() {
            let val = output[src];
            output.push(val);
        }
    }
}

/// Standard LZ77 copy. The caller guarantees `1 <= offset <= output.len()`.
#[inline]
fn copy_overlapping(output: &mut Vec<u8>, offset: usize, length: usize) {
    output.reserve(length);

    // Offset 1 repeats the last byte.
    if offset == 1 {
        let last_byte = output[output.len() - 1];
        output.resize(output.len() + length, last_byte);
    } else {
        let src_pos = output.len() - offset;
        for k in 0..length {
            let val = output[src_pos + k];
            output.push(val);
        }
    }
}
