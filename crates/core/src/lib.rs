//! `pharmadesk-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the purchasing and
//! inventory crates (no I/O, no logging).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{MedicineId, PurchaseOrderId};
pub use value_object::ValueObject;
