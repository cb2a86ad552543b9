use crate::codec::word::{
    decode_bool, decode_uint, encode_address, encode_bool, encode_dynamic_bytes, padded_len,
    usize_word, WORD,
};
use crate::error::CodecError;
use alloy_primitives::{hex, Address, Bytes};

/// 4-byte selector of `tryBlockAndAggregate(bool,(address,bytes)[])`.
pub const TRY_BLOCK_AND_AGGREGATE_SELECTOR: [u8; 4] = [0x39, 0x95, 0x42, 0xe9];

// (bool, (address,bytes)[]) is a fixed two-parameter head, so the array
// offset is always two words. Same constant for the inner (address,bytes)
// and (bool,bytes) tuples: two head words before the dynamic tail.
const HEAD_OFFSET: usize = 0x40;

/// One batched read: a target contract and the already-encoded calldata
/// for the function being read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Call {
    pub target: Address,
    pub call_data: Bytes,
}

impl Call {
    pub fn new(target: Address, call_data: impl Into<Bytes>) -> Self {
        Self {
            target,
            call_data: call_data.into(),
        }
    }

    /// Builds a call from hex calldata (optionally `0x`-prefixed).
    ///
    /// An odd nibble count is a caller error and surfaces as
    /// `CodecError::MalformedCallData`.
    pub fn from_hex(target: Address, call_data: &str) -> Result<Self, CodecError> {
        let stripped = call_data.strip_prefix("0x").unwrap_or(call_data);
        if stripped.len() % 2 != 0 {
            return Err(CodecError::MalformedCallData);
        }
        let data = hex::decode(stripped).map_err(|_| CodecError::MalformedCallData)?;
        Ok(Self::new(target, data))
    }

    // address word + inner offset word + length word + padded calldata
    fn encoded_tuple_len(&self) -> usize {
        WORD * 3 + padded_len(self.call_data.len())
    }
}

/// Decoded outcome of one batched call, in the same position as the
/// corresponding input [`Call`].
///
/// When `success` is false, `return_data` holds whatever revert payload the
/// aggregator captured (possibly empty); the caller decides whether to treat
/// that as a default value or propagate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallResult {
    pub success: bool,
    pub return_data: Bytes,
}

/// Encodes a batch of reads into the single calldata payload expected by the
/// aggregator's `tryBlockAndAggregate(bool,(address,bytes)[])`.
///
/// Results come back in call order. An empty batch still produces a
/// structurally valid payload (length word `0`, no tail).
pub fn encode_calls(require_success: bool, calls: &[Call]) -> Bytes {
    let tail: usize = calls.iter().map(Call::encoded_tuple_len).sum();
    let mut out = Vec::with_capacity(4 + WORD * 2 + WORD * (1 + calls.len()) + tail);

    out.extend_from_slice(&TRY_BLOCK_AND_AGGREGATE_SELECTOR);
    out.extend_from_slice(&encode_bool(require_success));
    out.extend_from_slice(&usize_word(HEAD_OFFSET));
    out.extend_from_slice(&usize_word(calls.len()));

    // Element offsets are relative to the start of the offset table itself:
    // the first tuple begins right after the N offset words, each subsequent
    // one after the previous tuple's exact encoded length.
    let mut running = calls.len() * WORD;
    for call in calls {
        out.extend_from_slice(&usize_word(running));
        running += call.encoded_tuple_len();
    }

    for call in calls {
        out.extend_from_slice(&encode_address(call.target));
        out.extend_from_slice(&usize_word(HEAD_OFFSET));
        out.extend_from_slice(&encode_dynamic_bytes(&call.call_data));
    }

    out.into()
}

/// Decodes an aggregator response given as a raw hex string.
///
/// `None` (transport yielded nothing) and empty strings decode to an empty
/// result list rather than an error; the caller renders "no data". A `0x`
/// prefix is accepted and optional.
pub fn decode_response(response: Option<&str>) -> Result<Vec<CallResult>, CodecError> {
    let Some(raw) = response else {
        return Ok(Vec::new());
    };
    let trimmed = raw.trim();
    let stripped = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    if stripped.is_empty() {
        return Ok(Vec::new());
    }
    let data = hex::decode(stripped).map_err(|_| CodecError::MalformedCallData)?;
    decode_response_bytes(&data)
}

/// Decodes the aggregator's raw `(uint256 blockNumber, bytes32 blockHash,
/// (bool,bytes)[] returnData)` reply into per-call results, in call order.
///
/// Block number and hash are not exposed. Every declared offset and length is
/// checked against the buffer; a shortfall is `CodecError::TruncatedResponse`,
/// never an out-of-bounds read or a silently partial list.
pub fn decode_response_bytes(data: &[u8]) -> Result<Vec<CallResult>, CodecError> {
    if data.is_empty() {
        return Ok(Vec::new());
    }

    // words 0..3: blockNumber, blockHash, outer array offset, result count
    let count_word = word_at(data, WORD * 3)?;
    let count = to_usize(decode_uint(count_word))?;

    let table = WORD * 4;
    let table_len = count
        .checked_mul(WORD)
        .ok_or(CodecError::TruncatedResponse)?;
    let table_end = table
        .checked_add(table_len)
        .ok_or(CodecError::TruncatedResponse)?;
    if table_end > data.len() {
        return Err(CodecError::TruncatedResponse);
    }

    let mut results = Vec::with_capacity(count);
    for i in 0..count {
        let offset = to_usize(decode_uint(word_at(data, table + i * WORD)?))?;
        let tuple = table
            .checked_add(offset)
            .ok_or(CodecError::TruncatedResponse)?;

        let success = decode_bool(word_at(data, tuple)?);
        // word 1 is the inner dynamic-bytes offset, fixed by the (bool,bytes)
        // shape; the length word follows it.
        let len = to_usize(decode_uint(word_at(data, tuple + WORD * 2)?))?;

        let start = tuple + WORD * 3;
        let end = start
            .checked_add(len)
            .ok_or(CodecError::TruncatedResponse)?;
        if end > data.len() {
            return Err(CodecError::TruncatedResponse);
        }

        results.push(CallResult {
            success,
            return_data: Bytes::copy_from_slice(&data[start..end]),
        });
    }

    Ok(results)
}

fn word_at(data: &[u8], start: usize) -> Result<&[u8], CodecError> {
    let end = start.checked_add(WORD).ok_or(CodecError::TruncatedResponse)?;
    if end > data.len() {
        return Err(CodecError::TruncatedResponse);
    }
    Ok(&data[start..end])
}

fn to_usize(value: alloy_primitives::U256) -> Result<usize, CodecError> {
    usize::try_from(value).map_err(|_| CodecError::TruncatedResponse)
}
