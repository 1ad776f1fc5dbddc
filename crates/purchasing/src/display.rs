//! Presentation rounding for money.
//!
//! Rounding is applied only when rendering. Stored totals keep full precision;
//! the helpers here always return new values.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::pricing::{LineBreakdown, PurchaseOrderTotals};

/// Decimal places shown for money amounts unless configured otherwise.
pub const DEFAULT_DISPLAY_SCALE: u32 = 2;

/// Round half away from zero to `scale` decimal places.
pub fn round_for_display(amount: Decimal, scale: u32) -> Decimal {
    amount.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero)
}

/// Render with exactly `scale` decimal places (`403.2` -> `"403.20"`).
pub fn format_amount(amount: Decimal, scale: u32) -> String {
    let mut rounded = round_for_display(amount, scale);
    rounded.rescale(scale);
    rounded.to_string()
}

impl PurchaseOrderTotals {
    /// A copy of these totals rounded for display.
    ///
    /// Each figure is rounded on its own, so the rounded copy is not
    /// guaranteed to satisfy the net amount identity to the last cent.
    pub fn rounded(&self, scale: u32) -> Self {
        Self {
            subtotal: round_for_display(self.subtotal, scale),
            total_discount: round_for_display(self.total_discount, scale),
            total_tax: round_for_display(self.total_tax, scale),
            net_amount: round_for_display(self.net_amount, scale),
        }
    }
}

impl LineBreakdown {
    /// Rounded copy of every figure on the line, for the purchase form.
    pub fn rounded(&self, scale: u32) -> Self {
        Self {
            subtotal: round_for_display(self.subtotal, scale),
            discount: round_for_display(self.discount, scale),
            taxable: round_for_display(self.taxable, scale),
            tax: round_for_display(self.tax, scale),
            total: round_for_display(self.total, scale),
        }
    }
}
