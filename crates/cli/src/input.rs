//! JSON input files.
//!
//! Purchase lines deserialize straight into [`PurchaseLineItem`]; the pricing
//! functions validate them. Inventory rows go through [`InventoryRecord`] so
//! that dates and thresholds are checked by the domain constructors.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use pharmadesk_core::{DomainError, MedicineId};
use pharmadesk_inventory::{parse_date, InventoryItem, StockLevels};
use pharmadesk_purchasing::PurchaseLineItem;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record {index} ({name}): {source}")]
    Record {
        index: usize,
        name: String,
        #[source]
        source: DomainError,
    },
}

/// One inventory row as it appears in an input file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InventoryRecord {
    #[serde(default)]
    pub id: Option<MedicineId>,
    pub name: String,
    #[serde(default)]
    pub batch_number: String,
    pub current_stock: u64,
    pub minimum_stock: u64,
    pub maximum_stock: u64,
    pub expiry_date: String,
}

impl TryFrom<InventoryRecord> for InventoryItem {
    type Error = DomainError;

    fn try_from(record: InventoryRecord) -> Result<Self, Self::Error> {
        let levels = StockLevels::new(
            record.current_stock,
            record.minimum_stock,
            record.maximum_stock,
        )?;
        let expiry_date = parse_date(&record.expiry_date)?;

        InventoryItem::new(
            record.id.unwrap_or_default(),
            record.name,
            record.batch_number,
            levels,
            expiry_date,
        )
    }
}

fn read(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_line_items(json: &str) -> Result<Vec<PurchaseLineItem>, InputError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse inventory rows, rejecting the whole file at the first bad row.
pub fn parse_inventory(json: &str) -> Result<Vec<InventoryItem>, InputError> {
    let records: Vec<InventoryRecord> = serde_json::from_str(json)?;

    records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| {
            let name = record.name.clone();
            InventoryItem::try_from(record).map_err(|source| InputError::Record {
                index: idx + 1,
                name,
                source,
            })
        })
        .collect()
}

pub fn load_line_items(path: &Path) -> Result<Vec<PurchaseLineItem>, InputError> {
    parse_line_items(&read(path)?)
}

pub fn load_inventory(path: &Path) -> Result<Vec<InventoryItem>, InputError> {
    parse_inventory(&read(path)?)
}
