//! Value object trait: equality by value, not identity.
//!
//! Every type in this workspace is a value object: customers, books and people
//! carry no identifier, so two instances with the same attributes are the same
//! thing.

/// Marker trait for value objects.
///
/// ## Design Constraints
///
/// - **Clone**: copying yields a fully independent value (no shared interior).
/// - **PartialEq**: compared by attribute values.
/// - **Debug**: shows up in logs and test failures.
///
/// ```
/// use bookshop_core::ValueObject;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Address {
///     city: String,
///     street: String,
/// }
///
/// impl ValueObject for Address {}
///
/// let a = Address { city: "Warszawa".into(), street: "Żurawia 4".into() };
/// let b = a.clone();
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
