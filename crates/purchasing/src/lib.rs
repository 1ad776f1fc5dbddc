//! Purchasing domain module (purchase orders and line-item pricing).
//!
//! This crate contains business rules for purchase orders, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).
//!
//! - [`pricing`]: per-line discount/tax arithmetic and order-level tallies.
//! - [`display`]: presentation rounding, applied only when rendering.
//! - [`order`]: the purchase order entity the purchase form edits.

pub mod display;
pub mod order;
pub mod pricing;

pub use display::{format_amount, round_for_display, DEFAULT_DISPLAY_SCALE};
pub use order::{PurchaseOrder, PurchaseOrderLine, PurchaseOrderStatus};
pub use pricing::{
    compute_line_breakdown, compute_line_total, compute_order_totals, LineBreakdown,
    PurchaseLineItem, PurchaseOrderTotals, TaxSlab,
};
