//! Inbound request validation

use thiserror::Error;

use crate::types::DeliveryRequest;

/// Errors that can occur during validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("docEntry must be a positive integer, got {0}")]
    NonPositiveDocEntry(i64),
}

/// Validate an inbound delivery request.
///
/// The document entry is an ERP-assigned key and is always positive; zero or
/// negative values are rejected before any upstream call is made.
pub fn validate_request(request: &DeliveryRequest) -> Result<(), ValidationError> {
    if request.doc_entry < 1 {
        return Err(ValidationError::NonPositiveDocEntry(request.doc_entry));
    }
    Ok(())
}
