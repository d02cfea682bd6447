//! Wire types for the shipment bridge
//!
//! This module contains the inbound request, the two ERP records the
//! pipeline reads, and the payload sent to the shipping provider.
//!
//! ERP records are read tolerantly: every optional field deserializes to
//! `None` when it is absent, null or of the wrong shape, and is later
//! resolved against the [`crate::defaults`] table. Only total fetch failure
//! aborts the pipeline; a sparse record never does.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Inbound request: the ERP document entry to ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryRequest {
    #[serde(rename = "docEntry")]
    pub doc_entry: i64,
}

/// Session tokens captured from the ERP login response cookies.
///
/// Owned by a single pipeline run; never cached or reused across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookies {
    /// The `B1SESSION=...` name/value pair.
    pub session: String,
    /// The `ROUTEID=...` name/value pair.
    pub route: String,
}

impl SessionCookies {
    /// Value for the `Cookie` header on subsequent service-layer calls.
    pub fn cookie_header(&self) -> String {
        format!("{}; {}", self.session, self.route)
    }
}

/// Delivery-note record from the ERP. Only the partner link is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct DeliveryNote {
    #[serde(rename = "CardCode", default, deserialize_with = "lenient_string")]
    card_code: Option<String>,
}

impl DeliveryNote {
    /// The business-partner code, or `None` when absent or blank.
    pub fn card_code(&self) -> Option<&str> {
        self.card_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }
}

/// Business-partner record from the ERP, read tolerantly field by field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BusinessPartner {
    #[serde(rename = "Address", default, deserialize_with = "lenient_string")]
    pub address: Option<String>,
    #[serde(rename = "ZipCode", default, deserialize_with = "lenient_string")]
    pub zip_code: Option<String>,
    #[serde(rename = "City", default, deserialize_with = "lenient_string")]
    pub city: Option<String>,
    #[serde(rename = "Country", default, deserialize_with = "lenient_string")]
    pub country: Option<String>,
    #[serde(rename = "ContactPerson", default, deserialize_with = "lenient_string")]
    pub contact_person: Option<String>,
    #[serde(rename = "Phone1", default, deserialize_with = "lenient_string")]
    pub phone1: Option<String>,
    #[serde(rename = "EmailAddress", default, deserialize_with = "lenient_string")]
    pub email_address: Option<String>,
}

impl BusinessPartner {
    /// Apply the defaults table, yielding a fully populated contact.
    pub fn resolve(self) -> PartnerContact {
        PartnerContact {
            street: self.address.unwrap_or_else(|| defaults::EMPTY.to_string()),
            postal_code: self
                .zip_code
                .unwrap_or_else(|| defaults::POSTAL_CODE.to_string()),
            city: self.city.unwrap_or_else(|| defaults::EMPTY.to_string()),
            country: self.country.unwrap_or_else(|| defaults::EMPTY.to_string()),
            person: self
                .contact_person
                .unwrap_or_else(|| defaults::CONTACT_PERSON.to_string()),
            phone: self.phone1.unwrap_or_else(|| defaults::EMPTY.to_string()),
            email: self
                .email_address
                .unwrap_or_else(|| defaults::EMPTY.to_string()),
        }
    }
}

/// Partner contact data after default resolution. Every field is populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartnerContact {
    pub street: String,
    pub postal_code: String,
    pub city: String,
    pub country: String,
    pub person: String,
    pub phone: String,
    pub email: String,
}

/// Recipient block of the provider's shipment schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub cc: String,
    pub region: String,
    pub city: String,
    pub street: String,
    pub postal_code: String,
    pub person: String,
    pub phone: String,
    pub email: String,
}

/// Insured-amount block of the shipment options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insurance {
    pub amount: u32,
    pub currency: String,
}

/// Shipment options sent to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentOptions {
    pub package_type: u8,
    pub only_recipient: u8,
    pub signature: u8,
    #[serde(rename = "return")]
    pub return_service: u8,
    pub insurance: Insurance,
    pub large_format: u8,
    pub label_description: String,
    pub age_check: u8,
}

/// One shipment in the provider's creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipment {
    pub reference_identifier: String,
    pub recipient: Recipient,
    pub options: ShipmentOptions,
    pub carrier: u8,
}

/// Provider envelope: `{ "data": { "shipments": [ ... ] } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentPayload {
    pub data: ShipmentData,
}

/// Inner `data` object of the provider envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentData {
    pub shipments: Vec<Shipment>,
}

impl ShipmentPayload {
    /// Wrap a single shipment in the provider envelope.
    pub fn single(shipment: Shipment) -> Self {
        Self {
            data: ShipmentData {
                shipments: vec![shipment],
            },
        }
    }
}

/// Outcome returned to the caller.
///
/// `my_parcel` is the provider's raw response body, passed through verbatim
/// even when the provider rejected the shipment; the caller inspects it for
/// detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentOutcome {
    pub status: OutcomeStatus,
    #[serde(rename = "sapDocEntry")]
    pub sap_doc_entry: i64,
    #[serde(rename = "myParcel")]
    pub my_parcel: String,
}

/// Status indicator derived from the provider's HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeStatus {
    Success,
    Error,
}

/// Deserialize a JSON string, treating anything else as absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}
