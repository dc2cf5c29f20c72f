/// Number of bytes hashed to key the hash-chain index.
pub const PREFIX_LEN: usize = 3;

/// Multiplier of the polynomial prefix hash.
const HASH_PRIME: u32 = 31;

/// Polynomial hash (`h = h * 31 + byte`) over up to `len` bytes starting at `pos`.
///
/// No modulus is applied. Bytes past the end of `data` are not included.
#[inline]
#[must_use]
pub fn prefix_hash(data: &[u8], pos: usize, len: usize) -> u32 {
    data.get(pos..)
        .unwrap_or_default()
        .iter()
        .take(len)
        .fold(0u32, |h, &b| h.wrapping_mul(HASH_PRIME).wrapping_add(u32::from(b)))
}

/// Counts how many bytes starting at `candidate` equal the bytes starting at `cursor`.
///
/// The run stops at `max` bytes or when `cursor + len` reaches the end of `input`.
/// `candidate` must be strictly less than `cursor`, so the candidate side never
/// runs past the input first; the two ranges may overlap.
#[inline]
#[must_use]
pub fn match_length(input: &[u8], candidate: usize, cursor: usize, max: usize) -> usize {
    let limit = max.min(input.len().saturating_sub(cursor));
    let mut len = 0;
    while len < limit && input[candidate + len] == input[cursor + len] {
        len += 1;
    }
    len
}
