// ============================================================================
// Currency Configuration
// Reusable currency presets (code + precision) for constructing Money
// ============================================================================

use super::value::MAX_PRECISION;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A currency code paired with the precision its amounts are scaled by.
///
/// The code is an opaque label: it is never checked against ISO-4217.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurrencyConfig {
    /// Currency code (e.g., "USD", "BTC")
    pub code: String,

    /// Number of implied fractional digits (0-8)
    pub precision: u8,
}

impl CurrencyConfig {
    /// Create a preset with the most common fiat precision of 2
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            precision: 2,
        }
    }

    /// US dollars, cents precision
    pub fn usd() -> Self {
        Self::new("USD")
    }

    /// Argentine pesos, centavos precision
    pub fn ars() -> Self {
        Self::new("ARS")
    }

    /// Builder method: Set precision
    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.code.is_empty() {
            return Err("Currency code cannot be empty".to_string());
        }

        if self.code.contains(' ') {
            return Err("Currency code cannot contain spaces".to_string());
        }

        if self.precision > MAX_PRECISION {
            return Err(format!(
                "Precision must be less than or equal to {}",
                MAX_PRECISION
            ));
        }

        Ok(())
    }
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self::usd()
    }
}
