//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. A
/// purchase line (`quantity`, `unit_price`, `discount_percent`, `tax_percent`)
/// or a set of stock thresholds is a value object: two lines with the same
/// figures price identically, whichever order they belong to.
///
/// To "modify" a value object, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Thresholds {
///     minimum: u64,
///     maximum: u64,
/// }
///
/// impl ValueObject for Thresholds {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
