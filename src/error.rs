use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("Codec error - value does not fit the declared integer width")]
    ValueOutOfRange,

    #[error("Codec error - not a valid 20-byte address")]
    InvalidAddress,

    #[error("Codec error - malformed call data hex")]
    MalformedCallData,

    #[error("Codec error - response truncated before its declared length")]
    TruncatedResponse,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurveError {
    #[error("Curve error - pivot tick not found")]
    PivotNotFound,

    #[error("Curve error - active liquidity overflow")]
    LiquidityOverflow,

    #[error("Curve error - active liquidity underflow")]
    LiquidityUnderflow,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    CodecError(#[from] crate::error::CodecError),

    #[error(transparent)]
    CurveError(#[from] crate::error::CurveError),
}
