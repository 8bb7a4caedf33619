//! Domain DTOs for the accounts API.
//!
//! # Design
//! These types mirror the wire protocol but are defined independently of the
//! mock-server crate; integration tests catch any schema drift between the
//! two. Field casing follows the wire format (snake_case, with the reserved
//! word `type` renamed). `Links` URLs are decoded as opaque strings and
//! never followed — pagination is driven by explicit parameters.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The resource `type` discriminator the API uses for accounts.
pub const ACCOUNT_TYPE: &str = "accounts";

/// A single account resource.
///
/// Identity is `id`. Values are constructed by the caller (for create) or
/// decoded from a response (for fetch/list); the client never caches them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    #[serde(rename = "type")]
    pub account_type: String,
    pub id: Uuid,
    pub organisation_id: Uuid,
    pub attributes: Attributes,
}

impl Account {
    /// Build an account with the fixed `"accounts"` type tag.
    pub fn new(id: Uuid, organisation_id: Uuid, attributes: Attributes) -> Self {
        Self {
            account_type: ACCOUNT_TYPE.to_string(),
            id,
            organisation_id,
            attributes,
        }
    }
}

/// Account attributes — opaque pass-through payload, not validated
/// client-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attributes {
    pub bank_id: String,
    pub bank_id_code: String,
    pub base_currency: String,
    pub bic: String,
    pub country: String,
}

/// Response envelope wrapping a single account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountEnvelope {
    pub data: Account,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

/// Response envelope wrapping a page of accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountListEnvelope {
    pub data: Vec<Account>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

/// Pagination links returned alongside list/fetch responses. Opaque URLs;
/// the client decodes them but never follows them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Links {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub this: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> Account {
        Account::new(
            Uuid::nil(),
            Uuid::nil(),
            Attributes {
                bank_id: "123456".to_string(),
                bank_id_code: "GBDSC".to_string(),
                base_currency: "EUR".to_string(),
                bic: "NWBKGB22".to_string(),
                country: "SI".to_string(),
            },
        )
    }

    #[test]
    fn account_serializes_with_wire_field_names() {
        let json = serde_json::to_value(account()).unwrap();
        assert_eq!(json["type"], "accounts");
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["organisation_id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["attributes"]["bank_id"], "123456");
        assert_eq!(json["attributes"]["bank_id_code"], "GBDSC");
        assert_eq!(json["attributes"]["base_currency"], "EUR");
        assert_eq!(json["attributes"]["bic"], "NWBKGB22");
        assert_eq!(json["attributes"]["country"], "SI");
    }

    #[test]
    fn envelope_decodes_without_links() {
        let raw = serde_json::to_string(&serde_json::json!({ "data": account() })).unwrap();
        let envelope: AccountEnvelope = serde_json::from_str(&raw).unwrap();
        assert_eq!(envelope.data, account());
        assert!(envelope.links.is_none());
    }

    #[test]
    fn envelope_decodes_partial_links() {
        let raw = serde_json::json!({
            "data": account(),
            "links": { "self": "/v1/organisation/accounts/x", "next": "/page2" }
        });
        let envelope: AccountEnvelope = serde_json::from_value(raw).unwrap();
        let links = envelope.links.unwrap();
        assert_eq!(links.this.as_deref(), Some("/v1/organisation/accounts/x"));
        assert_eq!(links.next.as_deref(), Some("/page2"));
        assert!(links.first.is_none());
    }

    #[test]
    fn list_envelope_decodes_empty_page() {
        let envelope: AccountListEnvelope = serde_json::from_str(r#"{"data":[]}"#).unwrap();
        assert!(envelope.data.is_empty());
    }
}
