//! Inventory domain module (stock health and expiry).
//!
//! This crate contains business rules for inventory, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage). Classification is
//! computed on read and never stored.

pub mod expiry;
pub mod item;
pub mod stock;
pub mod summary;

pub use expiry::{
    days_until_expiry, is_expiring_soon, is_expiring_soon_str, parse_date, parse_reference,
    start_of_day, EXPIRING_SOON_WINDOW_DAYS,
};
pub use item::InventoryItem;
pub use stock::{classify_stock, StockLevels, StockStatus};
pub use summary::{items_with_status, InventorySummary};
