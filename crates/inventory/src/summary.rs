//! Dashboard counters over a set of inventory items.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::item::InventoryItem;
use crate::stock::StockStatus;

/// Per-band item counts plus the number of batches inside the expiry window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InventorySummary {
    pub total_items: usize,
    pub low_stock: usize,
    pub medium_stock: usize,
    pub good_stock: usize,
    pub overstock: usize,
    pub expiring_soon: usize,
}

impl InventorySummary {
    pub fn from_items(items: &[InventoryItem], reference: NaiveDateTime) -> Self {
        items.iter().fold(Self::default(), |mut summary, item| {
            summary.total_items += 1;
            match item.status() {
                StockStatus::LowStock => summary.low_stock += 1,
                StockStatus::MediumStock => summary.medium_stock += 1,
                StockStatus::GoodStock => summary.good_stock += 1,
                StockStatus::Overstock => summary.overstock += 1,
            }
            if item.is_expiring_soon(reference) {
                summary.expiring_soon += 1;
            }
            summary
        })
    }

    pub fn count(&self, status: StockStatus) -> usize {
        match status {
            StockStatus::LowStock => self.low_stock,
            StockStatus::MediumStock => self.medium_stock,
            StockStatus::GoodStock => self.good_stock,
            StockStatus::Overstock => self.overstock,
        }
    }
}

/// Items currently in the given band, in input order.
pub fn items_with_status(
    items: &[InventoryItem],
    status: StockStatus,
) -> impl Iterator<Item = &InventoryItem> {
    items.iter().filter(move |item| item.status() == status)
}
