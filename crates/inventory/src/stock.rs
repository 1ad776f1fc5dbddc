//! Stock health bands.

use serde::{Deserialize, Serialize};

use pharmadesk_core::{DomainError, DomainResult, ValueObject};

/// Stock health of one inventory row, most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    LowStock,
    MediumStock,
    GoodStock,
    Overstock,
}

impl StockStatus {
    pub const ALL: [StockStatus; 4] = [
        StockStatus::LowStock,
        StockStatus::MediumStock,
        StockStatus::GoodStock,
        StockStatus::Overstock,
    ];

    /// Badge text shown in the inventory table.
    pub fn label(self) -> &'static str {
        match self {
            StockStatus::LowStock => "Low Stock",
            StockStatus::MediumStock => "Medium Stock",
            StockStatus::GoodStock => "Good Stock",
            StockStatus::Overstock => "Overstock",
        }
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a stock level against its thresholds.
///
/// The bands overlap, so the checks run in a fixed order and the first match
/// wins:
///
/// 1. `current <= minimum` is `LowStock`
/// 2. `current >= 90% of maximum` is `Overstock`
/// 3. `current <= 150% of minimum` is `MediumStock`
/// 4. anything else is `GoodStock`
///
/// Percentages are compared in integer arithmetic (`10 * current >= 9 *
/// maximum`, `2 * current <= 3 * minimum`), widened so no input can overflow.
/// Total over all inputs, including thresholds a form would reject.
pub fn classify_stock(current: u64, minimum: u64, maximum: u64) -> StockStatus {
    let (current, minimum, maximum) = (current as u128, minimum as u128, maximum as u128);

    if current <= minimum {
        StockStatus::LowStock
    } else if current * 10 >= maximum * 9 {
        StockStatus::Overstock
    } else if current * 2 <= minimum * 3 {
        StockStatus::MediumStock
    } else {
        StockStatus::GoodStock
    }
}

/// Current stock with its configured thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevels {
    pub current: u64,
    pub minimum: u64,
    pub maximum: u64,
}

impl ValueObject for StockLevels {}

impl StockLevels {
    /// Build validated levels: `minimum > 0` and `maximum > minimum`.
    pub fn new(current: u64, minimum: u64, maximum: u64) -> DomainResult<Self> {
        let levels = Self {
            current,
            minimum,
            maximum,
        };
        levels.validate()?;
        Ok(levels)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.minimum == 0 {
            return Err(DomainError::validation("minimum stock must be positive"));
        }
        if self.maximum <= self.minimum {
            return Err(DomainError::validation(format!(
                "maximum stock ({}) must exceed minimum stock ({})",
                self.maximum, self.minimum
            )));
        }
        Ok(())
    }

    pub fn status(&self) -> StockStatus {
        classify_stock(self.current, self.minimum, self.maximum)
    }

    /// Same thresholds, different quantity on hand.
    pub fn with_current(&self, current: u64) -> Self {
        Self { current, ..*self }
    }
}
