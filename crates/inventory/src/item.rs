use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use pharmadesk_core::{DomainError, DomainResult, Entity, MedicineId};

use crate::expiry;
use crate::stock::{StockLevels, StockStatus};

/// One stocked batch of a medicine, as listed on the inventory screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryItem {
    id: MedicineId,
    name: String,
    batch_number: String,
    levels: StockLevels,
    expiry_date: NaiveDate,
}

impl InventoryItem {
    pub fn new(
        id: MedicineId,
        name: impl Into<String>,
        batch_number: impl Into<String>,
        levels: StockLevels,
        expiry_date: NaiveDate,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        levels.validate()?;

        Ok(Self {
            id,
            name,
            batch_number: batch_number.into(),
            levels,
            expiry_date,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn batch_number(&self) -> &str {
        &self.batch_number
    }

    pub fn levels(&self) -> StockLevels {
        self.levels
    }

    pub fn stock(&self) -> u64 {
        self.levels.current
    }

    pub fn expiry_date(&self) -> NaiveDate {
        self.expiry_date
    }

    pub fn status(&self) -> StockStatus {
        self.levels.status()
    }

    pub fn days_until_expiry(&self, reference: NaiveDateTime) -> i64 {
        expiry::days_until_expiry(self.expiry_date, reference)
    }

    pub fn is_expiring_soon(&self, reference: NaiveDateTime) -> bool {
        expiry::is_expiring_soon(self.expiry_date, reference)
    }

    /// Apply a stock movement (receipt or dispensing).
    pub fn adjust_stock(&mut self, delta: i64) -> DomainResult<()> {
        if delta == 0 {
            return Err(DomainError::validation("delta cannot be zero"));
        }

        let new_stock = self
            .levels
            .current
            .checked_add_signed(delta)
            .ok_or_else(|| DomainError::invariant("stock cannot go negative"))?;

        self.levels = self.levels.with_current(new_stock);
        Ok(())
    }
}

impl Entity for InventoryItem {
    type Id = MedicineId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expiry::start_of_day;

    fn test_expiry() -> NaiveDate {
        NaiveDate::from_ymd_opt(2027, 1, 16).unwrap()
    }

    fn test_item(current: u64) -> InventoryItem {
        InventoryItem::new(
            MedicineId::new(),
            "Cetirizine 10mg",
            "CTZ-0925",
            StockLevels::new(current, 20, 200).unwrap(),
            test_expiry(),
        )
        .unwrap()
    }

    #[test]
    fn status_is_derived_from_levels() {
        assert_eq!(test_item(15).status(), StockStatus::LowStock);
        assert_eq!(test_item(100).status(), StockStatus::GoodStock);
    }

    #[test]
    fn expiry_is_measured_from_the_reference() {
        let item = test_item(100);
        let reference = start_of_day(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
        assert_eq!(item.days_until_expiry(reference), 90);
        assert!(item.is_expiring_soon(reference));

        let earlier = start_of_day(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
        assert!(!item.is_expiring_soon(earlier));
    }

    #[test]
    fn blank_name_and_bad_levels_are_rejected() {
        let levels = StockLevels::new(10, 20, 200).unwrap();
        let err = InventoryItem::new(MedicineId::new(), " ", "B", levels, test_expiry()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("name")));

        let unchecked = StockLevels {
            current: 10,
            minimum: 50,
            maximum: 40,
        };
        let err = InventoryItem::new(MedicineId::new(), "X", "B", unchecked, test_expiry()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn adjusting_stock_moves_between_bands() {
        let mut item = test_item(100);
        item.adjust_stock(-80).unwrap();
        assert_eq!(item.stock(), 20);
        assert_eq!(item.status(), StockStatus::LowStock);

        item.adjust_stock(170).unwrap();
        assert_eq!(item.status(), StockStatus::Overstock);
    }

    #[test]
    fn stock_cannot_go_negative() {
        let mut item = test_item(5);
        match item.adjust_stock(-6).unwrap_err() {
            DomainError::InvariantViolation(msg) if msg.contains("negative") => {}
            other => panic!("Expected InvariantViolation, got {other:?}"),
        }
        assert_eq!(item.stock(), 5);
        assert!(matches!(item.adjust_stock(0), Err(DomainError::Validation(_))));
    }

    #[test]
    fn snapshot_serializes_for_the_inventory_screen() {
        let item = test_item(100);
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["name"], "Cetirizine 10mg");
        assert_eq!(json["levels"]["current"], 100);
        assert_eq!(json["expiry_date"], "2027-01-16");
        assert_eq!(json["id"], item.id().to_string());
    }
}
