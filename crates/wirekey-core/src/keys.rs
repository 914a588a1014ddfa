//! Field-name to wire-key mapping

/// One field of a model and the JSON key it travels under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WireKey {
    /// In-memory field name
    pub field: &'static str,

    /// Key used in serialized JSON
    pub wire: &'static str,
}

impl WireKey {
    pub const fn new(field: &'static str, wire: &'static str) -> Self {
        Self { field, wire }
    }
}

/// Declares how a model's fields map to JSON keys
///
/// Implementations are emitted by `wirekey generate` or by
/// `#[derive(WireKeys)]`, one entry per field in declaration order.
///
/// # Example
///
/// ```
/// use wirekey_core::{WireKey, WireKeys};
///
/// struct User {
///     id: i64,
///     full_name: String,
/// }
///
/// impl WireKeys for User {
///     const WIRE_KEYS: &'static [WireKey] = &[
///         WireKey::new("id", "id"),
///         WireKey::new("full_name", "fullName"),
///     ];
/// }
///
/// assert_eq!(User::wire_key("full_name"), Some("fullName"));
/// assert_eq!(User::field_name("fullName"), Some("full_name"));
/// ```
pub trait WireKeys {
    /// Every field with its wire key, in declaration order
    const WIRE_KEYS: &'static [WireKey];

    /// Look up the wire key of a field
    fn wire_key(field: &str) -> Option<&'static str> {
        Self::WIRE_KEYS
            .iter()
            .find(|key| key.field == field)
            .map(|key| key.wire)
    }

    /// Look up the field carried by a wire key
    fn field_name(wire: &str) -> Option<&'static str> {
        Self::WIRE_KEYS
            .iter()
            .find(|key| key.wire == wire)
            .map(|key| key.field)
    }
}
