/// Size of one encoded token on the wire: offset (2) + length (1) + literal (1).
pub const TOKEN_SIZE: usize = 4;

/// A single LZ77 token: an optional back-reference followed by one literal byte.
///
/// `offset == 0` and `length == 0` together mean "no match, literal only".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Distance back from the current output position to the start of the run.
    pub offset: u16,
    /// Number of bytes copied from history.
    pub length: u8,
    /// The byte following the copied run (or the raw byte for a literal).
    pub literal: u8,
}

impl Token {
    /// Builds a literal-only token.
    #[must_use]
    pub const fn literal(byte: u8) -> Self {
        Self {
            offset: 0,
            length: 0,
            literal: byte,
        }
    }

    /// Builds a back-reference token followed by `literal`.
    #[must_use]
    pub const fn reference(offset: u16, length: u8, literal: u8) -> Self {
        Self {
            offset,
            length,
            literal,
        }
    }

    #[must_use]
    pub const fn is_literal(&self) -> bool {
        self.length == 0
    }

    /// Number of output bytes this token expands to when decoded cleanly.
    #[must_use]
    pub const fn expanded_len(&self) -> usize {
        self.length as usize + 1
    }

    /// Serializes the token as `[offset lo, offset hi, length, literal]`.
    #[inline]
    #[must_use]
    pub const fn to_bytes(self) -> [u8; TOKEN_SIZE] {
        let off = self.offset.to_le_bytes();
        [off[0], off[1], self.length, self.literal]
    }

    #[inline]
    #[must_use]
    pub const fn from_bytes(bytes: [u8; TOKEN_SIZE]) -> Self {
        Self {
            offset: u16::from_le_bytes([bytes[0], bytes[1]]),
            length: bytes[2],
            literal: bytes[3],
        }
    }

    /// Appends the encoded token to `output`.
    #[inline]
    pub fn write_to(self, output: &mut alloc::vec::Vec<u8>) {
        output.extend_from_slice(&self.to_bytes());
    }
}

/// Iterates over the complete 4-byte records of an encoded stream.
///
/// A trailing partial record is not yielded; see [`Tokens::remainder`].
pub struct Tokens<'a> {
    chunks: core::slice::ChunksExact<'a, u8>,
}

impl<'a> Tokens<'a> {
    #[must_use]
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            chunks: input.chunks_exact(TOKEN_SIZE),
        }
    }

    /// Bytes left over after the last complete record.
    #[must_use]
    pub fn remainder(&self) -> &'a [u8] {
        self.chunks.remainder()
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk = self.chunks.next()?;
        Some(Token::from_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Tokens<'_> {}
