// ============================================================================
// Money Module
// Fixed-point monetary values built on checked arithmetic
// ============================================================================
//
// This module provides:
// - Money: immutable amount + currency + precision (0-8), scaled i64 storage
// - CurrencyConfig: reusable currency presets
// - MoneyError/ParseFailure: everything that can go wrong
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result; overflow is reported, never wrapped
// - Default is a distinct "uninitialized" state, not a zero amount
// - Currency is an opaque label compared exactly

mod config;
mod errors;
mod text;
mod value;

#[cfg(feature = "serde")]
mod serde_impl;

pub use config::CurrencyConfig;
pub use errors::{MoneyError, MoneyResult, ParseFailure};
pub use text::parse;
pub use value::{new_ars, new_money, new_usd, Money, MAX_PRECISION};
