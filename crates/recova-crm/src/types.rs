// SPDX-FileCopyrightText: 2026 Recova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! CRM contact-search request/response types (HubSpot wire format).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The loosely-typed property map of one CRM contact.
///
/// Values may be absent or null in the CRM; the normalizer in
/// [`crate::normalize`] fills every gap with a documented default.
pub type ContactProperties = HashMap<String, Option<String>>;

/// The fixed property set requested with every contact search.
pub const CONTACT_PROPERTIES: [&str; 18] = [
    "bank_name",
    "customer_name",
    "loan_type",
    "outstanding_amount",
    "missed_emi_count",
    "emi_amount",
    "due_date",
    "proposed_months",
    "amount",
    "months",
    "phone_number",
    "call_status",
    "number_of_call_attempts",
    "call_lifted_time",
    "secure_payment_link",
    "preferred_callback_time",
    "dpd_days",
    "date",
];

/// Body for `POST /crm/v3/objects/contacts/search`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub filter_groups: Vec<FilterGroup>,
    pub properties: Vec<String>,
    pub limit: u32,
}

impl SearchRequest {
    /// Builds the exact-match search for one customer name, limit 1.
    pub fn exact_name_match(customer_name: &str) -> Self {
        Self {
            filter_groups: vec![FilterGroup {
                filters: vec![Filter {
                    property_name: "customer_name".to_string(),
                    operator: "EQ".to_string(),
                    value: customer_name.to_string(),
                }],
            }],
            properties: CONTACT_PROPERTIES.iter().map(|p| p.to_string()).collect(),
            limit: 1,
        }
    }
}

/// A group of filters combined with AND semantics.
#[derive(Debug, Clone, Serialize)]
pub struct FilterGroup {
    pub filters: Vec<Filter>,
}

/// A single property filter.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub property_name: String,
    pub operator: String,
    pub value: String,
}

/// Response body of a contact search.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

/// One matching contact.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    pub id: String,
    #[serde(default)]
    pub properties: ContactProperties,
}
