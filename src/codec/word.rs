use crate::error::CodecError;
use alloy_primitives::{hex, Address, U256};

/// Width of one ABI word in bytes.
pub const WORD: usize = 32;

/// Rounds `len` up to the next multiple of the 32-byte word size.
#[inline(always)]
pub const fn padded_len(len: usize) -> usize {
    len.div_ceil(WORD) * WORD
}

/// Encodes an unsigned integer as a left-padded big-endian word.
///
/// `width_bytes` is the declared width of the integer type being encoded
/// (e.g. 8 for a `uint64`); the value must fit in it. Pass 32 for a full
/// `uint256`, which makes the call total.
pub fn encode_uint(value: U256, width_bytes: usize) -> Result<[u8; WORD], CodecError> {
    if width_bytes > WORD || value.byte_len() > width_bytes {
        return Err(CodecError::ValueOutOfRange);
    }
    Ok(value.to_be_bytes::<WORD>())
}

/// Encodes a boolean as a word holding `1` or `0`.
pub fn encode_bool(value: bool) -> [u8; WORD] {
    let mut word = [0u8; WORD];
    word[WORD - 1] = value as u8;
    word
}

/// Encodes a 20-byte address right-aligned in a word.
pub fn encode_address(value: Address) -> [u8; WORD] {
    let mut word = [0u8; WORD];
    word[WORD - 20..].copy_from_slice(value.as_slice());
    word
}

/// Parses a hex address string (optionally `0x`-prefixed) into an [`Address`],
/// returning `CodecError::InvalidAddress` unless it is exactly 20 bytes.
pub fn parse_address(value: &str) -> Result<Address, CodecError> {
    let stripped = value.strip_prefix("0x").unwrap_or(value);
    if stripped.len() != 40 {
        return Err(CodecError::InvalidAddress);
    }
    let bytes = hex::decode(stripped).map_err(|_| CodecError::InvalidAddress)?;
    Ok(Address::from_slice(&bytes))
}

/// Encodes a dynamic byte string as its length word followed by the data
/// zero-padded up to the next word boundary.
pub fn encode_dynamic_bytes(data: &[u8]) -> Vec<u8> {
    let padded = padded_len(data.len());
    let mut out = Vec::with_capacity(WORD + padded);
    out.extend_from_slice(&usize_word(data.len()));
    out.extend_from_slice(data);
    out.resize(WORD + padded, 0);
    out
}

/// Decodes a big-endian word (or any slice up to 32 bytes) as an unsigned
/// integer.
pub fn decode_uint(word: &[u8]) -> U256 {
    U256::from_be_slice(word)
}

/// Decodes a word as a boolean: true iff the last byte is nonzero.
///
/// Deliberately looks only at the low byte so that malformed upstream
/// encodings with dirty high bytes still decode the way the EVM treats them.
pub fn decode_bool(word: &[u8]) -> bool {
    word.last().is_some_and(|b| *b != 0)
}

/// Decodes a word as an address, taking its lowest 20 bytes.
pub fn decode_address(word: &[u8]) -> Address {
    let mut bytes = [0u8; 20];
    let take = word.len().min(20);
    bytes[20 - take..].copy_from_slice(&word[word.len() - take..]);
    Address::from(bytes)
}

// Infallible word for internal lengths and offsets.
#[inline(always)]
pub(crate) fn usize_word(value: usize) -> [u8; WORD] {
    U256::from(value).to_be_bytes::<WORD>()
}
