//! Mapping from ERP partner data to the provider's shipment schema
//!
//! A pure, total transform: no I/O, no failure. All truncation and constant
//! substitution the provider schema requires happens here, never later.

use crate::types::{Insurance, PartnerContact, Recipient, Shipment, ShipmentOptions};

/// Region literal. The ERP record carries no region, but the provider schema
/// requires one; a known limitation of the mapping.
pub const REGION: &str = "Zuid-Holland";

/// Prefix of the provider-side reference identifier.
pub const REFERENCE_PREFIX: &str = "DEL-";

/// Label text printed on the shipment.
pub const LABEL_DESCRIPTION: &str = "Sent from SAP B1 Cloud";

/// Carrier identifier in the provider's catalogue.
pub const CARRIER: u8 = 1;

/// Hard limit on the provider's address string fields.
pub const MAX_FIELD_LEN: usize = 40;

/// Truncate to at most `max` characters; shorter input passes unchanged.
pub fn trim_to_max(input: &str, max: usize) -> String {
    input.chars().take(max).collect()
}

/// The fixed option set attached to every shipment.
pub fn standard_options() -> ShipmentOptions {
    ShipmentOptions {
        package_type: 1,
        only_recipient: 1,
        signature: 1,
        return_service: 1,
        insurance: Insurance {
            amount: 1,
            currency: "EUR".to_string(),
        },
        large_format: 0,
        label_description: LABEL_DESCRIPTION.to_string(),
        age_check: 0,
    }
}

/// Map a resolved partner contact to the provider's recipient block.
///
/// City and street are truncated to the provider's field limit; the other
/// fields are copied 1:1.
pub fn map_recipient(contact: &PartnerContact) -> Recipient {
    Recipient {
        cc: contact.country.clone(),
        region: REGION.to_string(),
        city: trim_to_max(&contact.city, MAX_FIELD_LEN),
        street: trim_to_max(&contact.street, MAX_FIELD_LEN),
        postal_code: contact.postal_code.clone(),
        person: contact.person.clone(),
        phone: contact.phone.clone(),
        email: contact.email.clone(),
    }
}

/// Build the complete shipment for one delivery note.
pub fn map_shipment(contact: &PartnerContact, doc_entry: i64) -> Shipment {
    Shipment {
        reference_identifier: format!("{REFERENCE_PREFIX}{doc_entry}"),
        recipient: map_recipient(contact),
        options: standard_options(),
        carrier: CARRIER,
    }
}
