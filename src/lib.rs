// ============================================================================
// Fixed Money Library
// Fixed-point monetary values on top of overflow-checked integer arithmetic
// ============================================================================

//! # Fixed Money
//!
//! An immutable fixed-point money type and the checked integer arithmetic it
//! is built on.
//!
//! ## Features
//!
//! - **Scaled-integer storage**: amounts are i64 counts of the currency's
//!   smallest unit, with 0-8 implied fractional digits
//! - **Checked arithmetic** for every integer kind: overflow, underflow and
//!   division by zero are reported, never wrapped
//! - **Half-up division** with the rounding direction following the sign of
//!   the true quotient
//! - **Canonical text format** `"100.99 USD"` for parsing and display
//!
//! ## Example
//!
//! ```rust
//! use fixed_money::prelude::*;
//!
//! let price: Money = "19.99 usd".parse()?;
//! let subtotal = price.times(3)?;
//! let shipping = Money::usd(500);
//! let total = subtotal.plus(&shipping)?;
//! assert_eq!(total.to_display_string(), "64.97 USD");
//!
//! let per_person = total.divided_by(4)?;
//! assert_eq!(per_person.amount(), 1624); // 16.2425 rounds half-up to 16.24
//!
//! assert!(price.plus(&Money::ars(100)).is_err()); // currencies must match
//! assert!(try_add(i8::MAX, 1).is_err()); // checked arithmetic never wraps
//! # Ok::<(), MoneyError>(())
//! ```

pub mod money;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::money::{CurrencyConfig, Money, MoneyError, MoneyResult, ParseFailure};
    pub use crate::numeric::{
        try_add, try_divide, try_multiply, try_subtract, ArithmeticError, ArithmeticResult,
        CheckedInt,
    };
}
