//! Decision-ready numbers from raw CLMM pool state, in pure Rust.
//!
//! This crate exposes the three precision-critical pieces of a zap /
//! liquidity-provision pipeline:
//! - A batched read codec (`codec::*`) that byte-exactly encodes a list of
//!   contract calls for a multicall aggregator and decodes its raw reply.
//! - An active-liquidity curve builder (`tick_curve`) that turns sparse tick
//!   rows into a continuous chartable sequence.
//! - A price-impact classifier (`price_impact`) mapping a percentage delta
//!   and a fee-tier threshold to a discrete risk level.
//!
//! Fetching (RPC, subgraph) stays outside: everything here is a pure,
//! synchronous function over caller-owned data.
//!
//! # Examples
//!
//! ## Batching two reads into one aggregator call
//! ```
//! use clmm_pool_data::codec::multicall::{decode_response, encode_calls, Call};
//! use clmm_pool_data::Address;
//!
//! let token = Address::from([0x11u8; 20]);
//! let calls = vec![
//!     Call::from_hex(token, "0x18160ddd").unwrap(), // totalSupply()
//!     Call::from_hex(token, "0x313ce567").unwrap(), // decimals()
//! ];
//!
//! let payload = encode_calls(false, &calls);
//! // hand `payload` to your eth_call transport, then:
//! let results = decode_response(None).unwrap(); // transport had no data
//! assert!(results.is_empty());
//! # let _ = payload;
//! ```
//!
//! ## Building a liquidity curve around the active tick
//! ```
//! use clmm_pool_data::tick_curve::{compute_active_liquidity, find_pivot, RawTick};
//!
//! let ticks = vec![
//!     RawTick { tick: -60, liquidity_net: 500, liquidity_gross: 500, price0: None },
//!     RawTick { tick: 0, liquidity_net: 250, liquidity_gross: 250, price0: None },
//!     RawTick { tick: 60, liquidity_net: -750, liquidity_gross: 750, price0: None },
//! ];
//!
//! let pivot = find_pivot(&ticks, 15).unwrap();
//! let curve = compute_active_liquidity(&ticks, pivot, 1_000_000).unwrap();
//! assert_eq!(curve[pivot].liquidity_active, 1_000_000);
//! ```
//!
//! ## Classifying price impact
//! ```
//! use clmm_pool_data::price_impact::{classify_for_category, FeeCategory, ImpactLevel, ImpactThresholds};
//!
//! let verdict = classify_for_category(Some(3.4), FeeCategory::Common, &ImpactThresholds::default());
//! assert_eq!(verdict.level, ImpactLevel::High);
//! assert_eq!(verdict.display, "3.40%");
//! ```

pub use alloy_primitives::{Address, Bytes, U256};

pub mod codec;
pub mod error;
pub mod price_impact;
pub mod tick_curve;

pub use codec::multicall::{Call, CallResult};
pub use error::Error;
pub use tick_curve::{ProcessedTick, RawTick};
