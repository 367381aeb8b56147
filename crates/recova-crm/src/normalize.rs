// SPDX-FileCopyrightText: 2026 Recova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Customer record normalization.
//!
//! Converts the loosely-typed property map returned by the CRM into a
//! fully-populated [`CallContext`], filling a documented default for every
//! absent property and composing the collection message the voice agent
//! will deliver. Pure and infallible: any input map, however sparse,
//! produces a complete context.

use recova_core::CallContext;

use crate::types::ContactProperties;

/// Configured fallbacks applied while normalizing a contact.
#[derive(Debug, Clone)]
pub struct NormalizerDefaults {
    /// Institution name used when the record carries none.
    pub bank_name: String,
    /// Secure payment link used when the record carries none.
    pub payment_link: String,
    /// Destination dialed when the record has no phone number.
    pub destination_number: String,
    /// Fixed agent identity for this deployment.
    pub agent_name: String,
}

/// Builds a [`CallContext`] from raw CRM contact properties.
///
/// Defaults per field: `bank_name` -> configured institution,
/// `secure_payment_link` -> configured link, `phone_number` -> configured
/// destination number; every other absent property becomes an empty string.
/// The lookup `date` is set to today and `main_message` is composed from
/// the already-defaulted values.
pub fn normalize_contact(props: &ContactProperties, defaults: &NormalizerDefaults) -> CallContext {
    let get = |key: &str| -> String {
        props
            .get(key)
            .and_then(|v| v.as_deref())
            .unwrap_or_default()
            .to_string()
    };

    let customer_name = get("customer_name").trim().to_string();
    let bank_name = non_empty_or(get("bank_name"), &defaults.bank_name);
    let secure_payment_link = non_empty_or(get("secure_payment_link"), &defaults.payment_link);
    let phone_number = non_empty_or(get("phone_number"), &defaults.destination_number);
    let loan_type = get("loan_type");
    let outstanding_amount = get("outstanding_amount");
    let missed_emi_count = get("missed_emi_count");
    let emi_amount = get("emi_amount");
    let dpd_days = get("dpd_days");
    let due_date = get("due_date");

    let main_message = build_main_message(
        &customer_name,
        &bank_name,
        &loan_type,
        &outstanding_amount,
        &missed_emi_count,
        &emi_amount,
        &dpd_days,
        &due_date,
        &secure_payment_link,
    );

    CallContext {
        bank_name,
        customer_name,
        loan_type,
        outstanding_amount,
        missed_emi_count,
        emi_amount,
        due_date,
        proposed_months: get("proposed_months"),
        amount: get("amount"),
        months: get("months"),
        phone_number,
        call_status: get("call_status"),
        number_of_call_attempts: get("number_of_call_attempts"),
        call_lifted_time: get("call_lifted_time"),
        secure_payment_link,
        preferred_callback_time: get("preferred_callback_time"),
        main_message,
        dpd_days,
        date: chrono::Local::now().format("%Y-%m-%d").to_string(),
        agent_name: defaults.agent_name.clone(),
    }
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

/// Composes the deterministic collection message delivered on the call.
#[allow(clippy::too_many_arguments)]
fn build_main_message(
    customer_name: &str,
    bank_name: &str,
    loan_type: &str,
    outstanding_amount: &str,
    missed_emi_count: &str,
    emi_amount: &str,
    dpd_days: &str,
    due_date: &str,
    secure_payment_link: &str,
) -> String {
    format!(
        "Hello {customer_name}, this is {bank_name} regarding your {loan_type}. \
         Your outstanding balance is {outstanding_amount} rupees. You have missed {missed_emi_count} \
         EMI payments of {emi_amount} rupees each. Your account is {dpd_days} days past due as of \
         {due_date}. Please make a payment today via our mobile app at {secure_payment_link}."
    )
}
