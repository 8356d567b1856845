//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. A product record
/// is one: two records with the same name and expiration date are
/// interchangeable, and nothing downstream tracks which one is which.
///
/// The trait requires:
/// - **Clone**: values are copied, not shared
/// - **PartialEq**: compared by attribute values
/// - **Debug**: shows up in logs and test failures
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct ShelfLabel {
///     name: String,
///     best_before: NaiveDate,
/// }
///
/// impl ValueObject for ShelfLabel {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
