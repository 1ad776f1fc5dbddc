//! Report building and rendering.
//!
//! Building a report never rounds; rendering rounds a copy to the configured
//! display scale.

use std::fmt::Write as _;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use thiserror::Error;

use pharmadesk_core::DomainError;
use pharmadesk_inventory::{
    InventoryItem, InventorySummary, StockStatus, EXPIRING_SOON_WINDOW_DAYS,
};
use pharmadesk_purchasing::{
    compute_line_breakdown, compute_order_totals, format_amount, LineBreakdown, PurchaseLineItem,
    PurchaseOrderTotals,
};

use crate::config::OutputFormat;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to format report: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Per-line breakdowns plus the order tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalsReport {
    pub lines: Vec<LineBreakdown>,
    pub totals: PurchaseOrderTotals,
}

impl TotalsReport {
    pub fn build(items: &[PurchaseLineItem]) -> Result<Self, ReportError> {
        // Totals first: it validates every line and names the bad one.
        let totals = compute_order_totals(items)?;
        let lines = items
            .iter()
            .map(compute_line_breakdown)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { lines, totals })
    }

    pub fn rounded(&self, scale: u32) -> Self {
        Self {
            lines: self.lines.iter().map(|line| line.rounded(scale)).collect(),
            totals: self.totals.rounded(scale),
        }
    }

    pub fn render(&self, format: OutputFormat, scale: u32) -> Result<String, ReportError> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&self.rounded(scale))?),
            OutputFormat::Table => self.render_table(scale),
        }
    }

    fn render_table(&self, scale: u32) -> Result<String, ReportError> {
        let amt = |value| format_amount(value, scale);
        let mut out = String::new();

        writeln!(
            out,
            "{:>4}  {:>12}  {:>12}  {:>12}  {:>12}  {:>12}",
            "LINE", "SUBTOTAL", "DISCOUNT", "TAXABLE", "TAX", "TOTAL"
        )?;
        for (idx, line) in self.lines.iter().enumerate() {
            writeln!(
                out,
                "{:>4}  {:>12}  {:>12}  {:>12}  {:>12}  {:>12}",
                idx + 1,
                amt(line.subtotal),
                amt(line.discount),
                amt(line.taxable),
                amt(line.tax),
                amt(line.total),
            )?;
        }

        writeln!(out)?;
        writeln!(out, "{:<16}{:>14}", "Subtotal", amt(self.totals.subtotal))?;
        writeln!(out, "{:<16}{:>14}", "Discount", amt(self.totals.total_discount))?;
        writeln!(out, "{:<16}{:>14}", "Tax", amt(self.totals.total_tax))?;
        writeln!(out, "{:<16}{:>14}", "Net amount", amt(self.totals.net_amount))?;
        Ok(out)
    }
}

/// One inventory row with its derived classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockRow {
    pub name: String,
    pub batch_number: String,
    pub current_stock: u64,
    pub status: StockStatus,
    pub expiry_date: NaiveDate,
    pub days_until_expiry: i64,
    pub expiring_soon: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockReport {
    pub as_of: NaiveDateTime,
    pub rows: Vec<StockRow>,
    pub summary: InventorySummary,
}

impl StockReport {
    pub fn build(items: &[InventoryItem], as_of: NaiveDateTime) -> Self {
        let rows = items
            .iter()
            .map(|item| StockRow {
                name: item.name().to_string(),
                batch_number: item.batch_number().to_string(),
                current_stock: item.stock(),
                status: item.status(),
                expiry_date: item.expiry_date(),
                days_until_expiry: item.days_until_expiry(as_of),
                expiring_soon: item.is_expiring_soon(as_of),
            })
            .collect();

        Self {
            as_of,
            rows,
            summary: InventorySummary::from_items(items, as_of),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, ReportError> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Table => self.render_table(),
        }
    }

    fn render_table(&self) -> Result<String, ReportError> {
        let mut out = String::new();

        writeln!(
            out,
            "{:<24}  {:<10}  {:>7}  {:<12}  {:<10}  {:>6}  {}",
            "NAME", "BATCH", "STOCK", "STATUS", "EXPIRY", "DAYS", "EXPIRING"
        )?;
        for row in &self.rows {
            writeln!(
                out,
                "{:<24}  {:<10}  {:>7}  {:<12}  {:<10}  {:>6}  {}",
                row.name,
                row.batch_number,
                row.current_stock,
                row.status.label(),
                row.expiry_date,
                row.days_until_expiry,
                if row.expiring_soon { "yes" } else { "no" },
            )?;
        }

        let s = &self.summary;
        writeln!(out)?;
        writeln!(out, "As of {}", self.as_of)?;
        writeln!(
            out,
            "{} items: {} low, {} medium, {} good, {} overstock; {} expiring within {} days",
            s.total_items,
            s.low_stock,
            s.medium_stock,
            s.good_stock,
            s.overstock,
            s.expiring_soon,
            EXPIRING_SOON_WINDOW_DAYS,
        )?;
        Ok(out)
    }
}
