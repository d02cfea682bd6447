//! Defaults substituted for absent business-partner fields
//!
//! The tolerant-read contract in one place: every optional upstream field
//! falls back to a declared default, never to a failure. Changing a default
//! here changes it everywhere.

/// Fallback postal code. The provider rejects blank postal codes, so the
/// sentinel is deliberately non-empty.
pub const POSTAL_CODE: &str = "0000XX";

/// Fallback contact name when the partner record carries none.
pub const CONTACT_PERSON: &str = "SAP Contact";

/// Fallback for the remaining optional contact fields.
pub const EMPTY: &str = "";
