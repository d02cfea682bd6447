//! # Bridge Core
//!
//! Domain types and pure logic for the SAP B1 → MyParcel shipment bridge.
//!
//! This crate provides:
//! - Wire types for the inbound request, the ERP records and the provider payload
//! - Tolerant deserialization of ERP records with a single defaults table
//! - Session-cookie extraction from `Set-Cookie` header values
//! - The pure mapping from partner data to the provider's shipment schema
//!
//! Nothing in this crate performs I/O; everything is testable without a
//! network stack.
//!
//! ## Example
//!
//! ```rust,ignore
//! use bridge_core::{mapper::map_shipment, types::BusinessPartner};
//!
//! let partner: BusinessPartner = serde_json::from_str(body)?;
//! let shipment = map_shipment(&partner.resolve(), doc_entry);
//! ```

pub mod cookies;
pub mod defaults;
pub mod mapper;
pub mod types;
pub mod validation;

// Re-exports for convenience
pub use validation::{validate_request, ValidationError};
