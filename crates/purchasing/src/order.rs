use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pharmadesk_core::{DomainError, DomainResult, Entity, PurchaseOrderId};

use crate::pricing::{
    compute_line_breakdown, compute_order_totals, LineBreakdown, PurchaseLineItem,
    PurchaseOrderTotals,
};

/// Purchase order status lifecycle: `Draft -> Received` or `Draft -> Cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseOrderStatus {
    Draft,
    Received,
    Cancelled,
}

/// Purchase order line: what was bought, and how it is priced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseOrderLine {
    pub line_no: u32,
    pub medicine_name: String,
    pub batch_number: String,
    pub expiry_date: NaiveDate,
    pub item: PurchaseLineItem,
}

impl PurchaseOrderLine {
    pub fn breakdown(&self) -> DomainResult<LineBreakdown> {
        compute_line_breakdown(&self.item)
    }
}

/// A purchase from one supplier, recorded against the supplier's invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseOrder {
    id: PurchaseOrderId,
    supplier_name: String,
    invoice_number: String,
    order_date: NaiveDate,
    status: PurchaseOrderStatus,
    lines: Vec<PurchaseOrderLine>,
}

impl PurchaseOrder {
    /// Open a new draft order with no lines.
    pub fn new(
        id: PurchaseOrderId,
        supplier_name: impl Into<String>,
        invoice_number: impl Into<String>,
        order_date: NaiveDate,
    ) -> DomainResult<Self> {
        let supplier_name = supplier_name.into();
        let invoice_number = invoice_number.into();

        if supplier_name.trim().is_empty() {
            return Err(DomainError::validation("supplier name cannot be empty"));
        }
        if invoice_number.trim().is_empty() {
            return Err(DomainError::validation("invoice number cannot be empty"));
        }

        Ok(Self {
            id,
            supplier_name,
            invoice_number,
            order_date,
            status: PurchaseOrderStatus::Draft,
            lines: Vec::new(),
        })
    }

    pub fn supplier_name(&self) -> &str {
        &self.supplier_name
    }

    pub fn invoice_number(&self) -> &str {
        &self.invoice_number
    }

    pub fn order_date(&self) -> NaiveDate {
        self.order_date
    }

    pub fn status(&self) -> PurchaseOrderStatus {
        self.status
    }

    pub fn lines(&self) -> &[PurchaseOrderLine] {
        &self.lines
    }

    /// Order tally, computed from the current lines on every call.
    pub fn totals(&self) -> DomainResult<PurchaseOrderTotals> {
        compute_order_totals(self.lines.iter().map(|line| &line.item))
    }

    /// Net payable amount (shortcut for `totals()?.net_amount`).
    pub fn net_amount(&self) -> DomainResult<Decimal> {
        self.totals().map(|totals| totals.net_amount)
    }

    /// Append a line and return its line number.
    pub fn add_line(
        &mut self,
        medicine_name: impl Into<String>,
        batch_number: impl Into<String>,
        expiry_date: NaiveDate,
        item: PurchaseLineItem,
    ) -> DomainResult<u32> {
        self.ensure_draft("cannot modify purchase order once received or cancelled")?;

        let medicine_name = medicine_name.into();
        if medicine_name.trim().is_empty() {
            return Err(DomainError::validation("medicine name cannot be empty"));
        }
        item.validate()?;

        let line_no = self.lines.last().map_or(1, |line| line.line_no + 1);
        self.lines.push(PurchaseOrderLine {
            line_no,
            medicine_name,
            batch_number: batch_number.into(),
            expiry_date,
            item,
        });
        Ok(line_no)
    }

    /// Remove a line. Remaining lines keep their numbers.
    pub fn remove_line(&mut self, line_no: u32) -> DomainResult<PurchaseOrderLine> {
        self.ensure_draft("cannot modify purchase order once received or cancelled")?;

        let idx = self
            .lines
            .iter()
            .position(|line| line.line_no == line_no)
            .ok_or_else(DomainError::not_found)?;
        Ok(self.lines.remove(idx))
    }

    /// Mark the goods as received. The order is frozen afterwards.
    pub fn receive(&mut self) -> DomainResult<()> {
        self.ensure_draft("only draft purchase orders can be received")?;

        if self.lines.is_empty() {
            return Err(DomainError::validation(
                "cannot receive goods for empty purchase order",
            ));
        }

        self.status = PurchaseOrderStatus::Received;
        Ok(())
    }

    pub fn cancel(&mut self) -> DomainResult<()> {
        self.ensure_draft("only draft purchase orders can be cancelled")?;
        self.status = PurchaseOrderStatus::Cancelled;
        Ok(())
    }

    fn ensure_draft(&self, msg: &str) -> DomainResult<()> {
        if self.status != PurchaseOrderStatus::Draft {
            return Err(DomainError::invariant(msg));
        }
        Ok(())
    }
}

impl Entity for PurchaseOrder {
    type Id = PurchaseOrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    fn test_expiry() -> NaiveDate {
        NaiveDate::from_ymd_opt(2028, 1, 31).unwrap()
    }

    fn draft_order() -> PurchaseOrder {
        PurchaseOrder::new(PurchaseOrderId::new(), "MediSupply Co", "INV-2026-0042", test_date())
            .unwrap()
    }

    fn amoxicillin_line() -> PurchaseLineItem {
        PurchaseLineItem::new(2, dec!(100), dec!(10), dec!(12)).unwrap()
    }

    #[test]
    fn new_order_starts_as_empty_draft() {
        let order = draft_order();
        assert_eq!(order.status(), PurchaseOrderStatus::Draft);
        assert!(order.lines().is_empty());
        assert_eq!(order.totals().unwrap(), PurchaseOrderTotals::zero());
    }

    #[test]
    fn blank_supplier_or_invoice_is_rejected() {
        let err = PurchaseOrder::new(PurchaseOrderId::new(), "  ", "INV-1", test_date()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("supplier")));

        let err = PurchaseOrder::new(PurchaseOrderId::new(), "MediSupply", "", test_date()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("invoice")));
    }

    #[test]
    fn totals_follow_added_lines() {
        let mut order = draft_order();
        let first = order
            .add_line("Amoxicillin 500mg", "B-221", test_expiry(), amoxicillin_line())
            .unwrap();
        let second = order
            .add_line("Amoxicillin 500mg", "B-222", test_expiry(), amoxicillin_line())
            .unwrap();

        assert_eq!((first, second), (1, 2));
        let totals = order.totals().unwrap();
        assert_eq!(totals.subtotal, dec!(400));
        assert_eq!(totals.total_discount, dec!(40));
        assert_eq!(totals.total_tax, dec!(43.2));
        assert_eq!(order.net_amount().unwrap(), dec!(403.2));
        assert_eq!(order.lines()[0].breakdown().unwrap().total, dec!(201.6));
    }

    #[test]
    fn invalid_line_is_not_added() {
        let mut order = draft_order();
        let bad = PurchaseLineItem {
            quantity: 0,
            unit_price: dec!(5),
            discount_percent: dec!(0),
            tax_percent: dec!(5),
        };

        let err = order.add_line("Paracetamol", "P-1", test_expiry(), bad).unwrap_err();
        assert!(matches!(err, DomainError::InvalidLineItem(_)));
        assert!(order.lines().is_empty());
    }

    #[test]
    fn removed_line_numbers_are_not_reused_out_of_order() {
        let mut order = draft_order();
        order.add_line("A", "1", test_expiry(), amoxicillin_line()).unwrap();
        order.add_line("B", "2", test_expiry(), amoxicillin_line()).unwrap();
        order.add_line("C", "3", test_expiry(), amoxicillin_line()).unwrap();

        let removed = order.remove_line(2).unwrap();
        assert_eq!(removed.medicine_name, "B");
        assert_eq!(
            order.lines().iter().map(|l| l.line_no).collect::<Vec<_>>(),
            vec![1, 3]
        );

        let next = order.add_line("D", "4", test_expiry(), amoxicillin_line()).unwrap();
        assert_eq!(next, 4);
        assert_eq!(order.remove_line(2).unwrap_err(), DomainError::NotFound);
    }

    #[test]
    fn cannot_receive_empty_order() {
        let mut order = draft_order();
        match order.receive().unwrap_err() {
            DomainError::Validation(msg) if msg.contains("empty purchase order") => {}
            other => panic!("Expected Validation for empty order, got {other:?}"),
        }
    }

    #[test]
    fn received_order_is_frozen() {
        let mut order = draft_order();
        order.add_line("A", "1", test_expiry(), amoxicillin_line()).unwrap();
        order.receive().unwrap();
        assert_eq!(order.status(), PurchaseOrderStatus::Received);

        let err = order
            .add_line("B", "2", test_expiry(), amoxicillin_line())
            .unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert!(matches!(order.cancel(), Err(DomainError::InvariantViolation(_))));
        assert!(matches!(order.receive(), Err(DomainError::InvariantViolation(_))));
    }

    #[test]
    fn cancelled_order_cannot_be_received() {
        let mut order = draft_order();
        order.add_line("A", "1", test_expiry(), amoxicillin_line()).unwrap();
        order.cancel().unwrap();
        assert_eq!(order.status(), PurchaseOrderStatus::Cancelled);

        match order.receive().unwrap_err() {
            DomainError::InvariantViolation(msg) if msg.contains("only draft") => {}
            other => panic!("Expected InvariantViolation, got {other:?}"),
        }
    }

    #[test]
    fn order_serializes_with_numbered_lines() {
        let mut order = draft_order();
        order.add_line("Amoxicillin 500mg", "AMX-77", test_expiry(), amoxicillin_line()).unwrap();
        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(json["status"], "draft");
        assert_eq!(json["supplier_name"], "MediSupply Co");
        assert_eq!(json["lines"][0]["line_no"], 1);
        assert_eq!(json["lines"][0]["batch_number"], "AMX-77");
    }
}
