// SPDX-FileCopyrightText: 2026 Recova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! CRM lookup client and customer record normalizer.
//!
//! [`CrmClient`] queries the CRM for a single contact by exact customer
//! name; [`normalize_contact`] turns the returned property map into the
//! fully-resolved [`recova_core::CallContext`] the rest of the pipeline
//! consumes.

pub mod client;
pub mod normalize;
pub mod types;

pub use client::CrmClient;
pub use normalize::{NormalizerDefaults, normalize_contact};
pub use types::{CONTACT_PROPERTIES, ContactProperties};
