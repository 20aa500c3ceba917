//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and defined entirely by their attribute
/// values: two instances with the same values are the same value. They are
/// cheap to copy and safe to share freely.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
