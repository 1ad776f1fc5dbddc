//! Line-item pricing and order tallies.
//!
//! Per line: `subtotal = quantity * unit_price`, the discount is taken off the
//! subtotal, and tax is charged on what remains (the taxable amount). Order
//! totals accumulate each of those components separately, so nothing is ever
//! derived from a rounded line total. No rounding happens here at all; see
//! [`crate::display`] for presentation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pharmadesk_core::{DomainError, DomainResult, ValueObject};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// One medicine entry on a purchase order.
///
/// Fields are public so the form layer can deserialize straight into this
/// type; every compute function re-validates, so an unchecked value can never
/// be priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseLineItem {
    pub quantity: i64,
    pub unit_price: Decimal,
    #[serde(default)]
    pub discount_percent: Decimal,
    #[serde(default)]
    pub tax_percent: Decimal,
}

impl ValueObject for PurchaseLineItem {}

impl PurchaseLineItem {
    /// Build a validated line item.
    pub fn new(
        quantity: i64,
        unit_price: Decimal,
        discount_percent: Decimal,
        tax_percent: Decimal,
    ) -> DomainResult<Self> {
        let item = Self {
            quantity,
            unit_price,
            discount_percent,
            tax_percent,
        };
        item.validate()?;
        Ok(item)
    }

    /// Convenience constructor for the tax options the purchase form offers.
    pub fn with_slab(
        quantity: i64,
        unit_price: Decimal,
        discount_percent: Decimal,
        slab: TaxSlab,
    ) -> DomainResult<Self> {
        Self::new(quantity, unit_price, discount_percent, slab.percent())
    }

    /// Reject out-of-range figures. Values are never clamped.
    pub fn validate(&self) -> DomainResult<()> {
        if self.quantity <= 0 {
            return Err(DomainError::invalid_line_item(format!(
                "quantity must be positive, got {}",
                self.quantity
            )));
        }

        if self.unit_price < Decimal::ZERO {
            return Err(DomainError::invalid_line_item(format!(
                "unit price must be non-negative, got {}",
                self.unit_price
            )));
        }

        if self.discount_percent < Decimal::ZERO || self.discount_percent > HUNDRED {
            return Err(DomainError::invalid_line_item(format!(
                "discount percent must be within 0..=100, got {}",
                self.discount_percent
            )));
        }

        if self.tax_percent < Decimal::ZERO {
            return Err(DomainError::invalid_line_item(format!(
                "tax percent must be non-negative, got {}",
                self.tax_percent
            )));
        }

        Ok(())
    }
}

/// Tax rates selectable on the purchase form.
///
/// The calculator accepts any non-negative percentage; this enum only lists
/// the slabs the form presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub enum TaxSlab {
    Zero,
    Five,
    Twelve,
    Eighteen,
    TwentyEight,
}

impl TaxSlab {
    pub const ALL: [TaxSlab; 5] = [
        TaxSlab::Zero,
        TaxSlab::Five,
        TaxSlab::Twelve,
        TaxSlab::Eighteen,
        TaxSlab::TwentyEight,
    ];

    pub fn percent(self) -> Decimal {
        match self {
            TaxSlab::Zero => Decimal::ZERO,
            TaxSlab::Five => Decimal::from(5),
            TaxSlab::Twelve => Decimal::from(12),
            TaxSlab::Eighteen => Decimal::from(18),
            TaxSlab::TwentyEight => Decimal::from(28),
        }
    }
}

impl From<TaxSlab> for Decimal {
    fn from(value: TaxSlab) -> Self {
        value.percent()
    }
}

impl TryFrom<Decimal> for TaxSlab {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        TaxSlab::ALL
            .into_iter()
            .find(|slab| slab.percent() == value)
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "tax percent {value} is not one of 0, 5, 12, 18, 28"
                ))
            })
    }
}

impl core::fmt::Display for TaxSlab {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

/// Every intermediate figure of one priced line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineBreakdown {
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub taxable: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Order-level tally. Always satisfies
/// `net_amount == subtotal - total_discount + total_tax`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PurchaseOrderTotals {
    pub subtotal: Decimal,
    pub total_discount: Decimal,
    pub total_tax: Decimal,
    pub net_amount: Decimal,
}

impl PurchaseOrderTotals {
    /// Totals of an order with no lines.
    pub fn zero() -> Self {
        Self::default()
    }
}

fn in_range(value: Option<Decimal>) -> DomainResult<Decimal> {
    value.ok_or_else(|| DomainError::invalid_line_item("amount exceeds representable range"))
}

/// Price a single line, keeping every intermediate figure.
pub fn compute_line_breakdown(item: &PurchaseLineItem) -> DomainResult<LineBreakdown> {
    item.validate()?;

    let subtotal = in_range(Decimal::from(item.quantity).checked_mul(item.unit_price))?;
    let discount = in_range(
        subtotal
            .checked_mul(item.discount_percent)
            .and_then(|d| d.checked_div(HUNDRED)),
    )?;
    let taxable = in_range(subtotal.checked_sub(discount))?;
    let tax = in_range(
        taxable
            .checked_mul(item.tax_percent)
            .and_then(|t| t.checked_div(HUNDRED)),
    )?;
    let total = in_range(taxable.checked_add(tax))?;

    Ok(LineBreakdown {
        subtotal,
        discount,
        taxable,
        tax,
        total,
    })
}

/// Payable amount for one line: taxable amount plus tax.
pub fn compute_line_total(item: &PurchaseLineItem) -> DomainResult<Decimal> {
    compute_line_breakdown(item).map(|line| line.total)
}

/// Tally a whole order.
///
/// Stops at the first invalid line; the error names it by 1-based position.
/// The empty order totals to zero.
pub fn compute_order_totals<'a, I>(items: I) -> DomainResult<PurchaseOrderTotals>
where
    I: IntoIterator<Item = &'a PurchaseLineItem>,
{
    let mut subtotal = Decimal::ZERO;
    let mut total_discount = Decimal::ZERO;
    let mut total_tax = Decimal::ZERO;

    for (idx, item) in items.into_iter().enumerate() {
        let name_line = |err: DomainError| match err {
            DomainError::InvalidLineItem(msg) => {
                DomainError::invalid_line_item(format!("line {}: {msg}", idx + 1))
            }
            other => other,
        };

        let line = compute_line_breakdown(item).map_err(name_line)?;
        subtotal = in_range(subtotal.checked_add(line.subtotal)).map_err(name_line)?;
        total_discount = in_range(total_discount.checked_add(line.discount)).map_err(name_line)?;
        total_tax = in_range(total_tax.checked_add(line.tax)).map_err(name_line)?;
    }

    let net_amount = in_range(
        subtotal
            .checked_sub(total_discount)
            .and_then(|n| n.checked_add(total_tax)),
    )?;

    Ok(PurchaseOrderTotals {
        subtotal,
        total_discount,
        total_tax,
        net_amount,
    })
}
