// SPDX-FileCopyrightText: 2026 Recova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Recova configuration system.

use recova_config::diagnostic::{ConfigError, suggest_key};
use recova_config::model::RecovaConfig;
use recova_config::{load_and_validate_str, load_config_from_str};

/// TOML carrying every required credential, reused across tests.
const CONFIGURED_TOML: &str = r#"
[telephony]
account_sid = "AC0000"
auth_token = "secret"
from_number = "+15550100"

[voice]
api_key = "vk-123"

[crm]
access_token = "pat-123"
"#;

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_recova_config() {
    let toml = r#"
[agent]
name = "Priya"
log_level = "debug"

[server]
host = "127.0.0.1"
port = 9000
public_url = "https://calls.example.com"

[telephony]
account_sid = "AC0000"
auth_token = "secret"
from_number = "+15550100"
default_destination = "+15550199"

[voice]
api_key = "vk-123"
api_url = "https://voice.example.com/api/calls"
model = "fixie-ai/ultravox"
voice = "Priya"
temperature = 0.5

[crm]
access_token = "pat-123"
api_url = "https://crm.example.com"

[defaults]
bank_name = "First Example Bank"
payment_link = "https://pay.example.com"

[transcripts]
dir = "/var/lib/recova/conversations"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.agent.name, "Priya");
    assert_eq!(config.agent.log_level, "debug");
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 9000);
    assert_eq!(
        config.server.public_url.as_deref(),
        Some("https://calls.example.com")
    );
    assert_eq!(config.telephony.account_sid.as_deref(), Some("AC0000"));
    assert_eq!(config.telephony.default_destination, "+15550199");
    assert_eq!(config.voice.api_key.as_deref(), Some("vk-123"));
    assert_eq!(config.voice.temperature, 0.5);
    assert_eq!(config.crm.api_url, "https://crm.example.com");
    assert_eq!(config.defaults.bank_name, "First Example Bank");
    assert_eq!(config.transcripts.dir, "/var/lib/recova/conversations");
}

/// Missing optional sections use defaults without error.
#[test]
fn missing_optional_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");

    assert_eq!(config.agent.name, "Yaswanth");
    assert_eq!(config.agent.log_level, "info");
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8000);
    assert!(config.server.public_url.is_none());
    assert!(config.telephony.account_sid.is_none());
    assert_eq!(config.telephony.default_destination, "+918919025218");
    assert!(config.voice.api_key.is_none());
    assert_eq!(config.voice.api_url, "https://api.ultravox.ai/api/calls");
    assert_eq!(config.voice.model, "fixie-ai/ultravox");
    assert_eq!(config.voice.voice, "Yaswanth");
    assert_eq!(config.voice.temperature, 0.3);
    assert!(config.crm.access_token.is_none());
    assert_eq!(config.crm.api_url, "https://api.hubapi.com");
    assert_eq!(config.defaults.bank_name, "Example Bank");
    assert_eq!(config.defaults.payment_link, "https://example.com/payment");
    assert_eq!(config.transcripts.dir, "conversations");
}

/// Unknown field in [voice] section produces an error.
#[test]
fn unknown_field_in_voice_produces_error() {
    let toml = r#"
[voice]
api_kye = "abc"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("api_kye"),
        "error should mention unknown field, got: {err_str}"
    );
}

/// Unexpected top-level section is rejected by deny_unknown_fields.
#[test]
fn deny_unknown_fields_at_top_level() {
    let toml = r#"
[logging]
level = "debug"
"#;

    let err = load_config_from_str(toml).expect_err("unknown top-level section should be rejected");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("logging"),
        "error should mention unknown field, got: {err_str}"
    );
}

/// Dotted env-style override maps to telephony.account_sid
/// (NOT telephony.account.sid).
#[test]
fn env_style_override_maps_to_account_sid() {
    use figment::{Figment, providers::Serialized};

    let config: RecovaConfig = Figment::new()
        .merge(Serialized::defaults(RecovaConfig::default()))
        .merge(("telephony.account_sid", "AC-from-env"))
        .extract()
        .expect("should set account_sid via dot notation");

    assert_eq!(config.telephony.account_sid.as_deref(), Some("AC-from-env"));
}

/// Missing config files are silently skipped (Figment's Toml::file() behavior).
#[test]
fn missing_config_files_silently_skipped() {
    use figment::{
        Figment,
        providers::{Format, Serialized, Toml},
    };

    let config: RecovaConfig = Figment::new()
        .merge(Serialized::defaults(RecovaConfig::default()))
        .merge(Toml::file("/nonexistent/path/recova.toml"))
        .extract()
        .expect("missing file should be silently skipped");

    assert_eq!(config.agent.name, "Yaswanth");
}

/// A fully-credentialed config passes load_and_validate_str.
#[test]
fn configured_toml_validates() {
    let config = load_and_validate_str(CONFIGURED_TOML).expect("credentialed config is valid");
    assert_eq!(config.telephony.account_sid.as_deref(), Some("AC0000"));
}

/// Defaults alone fail validation: credentials are a fatal startup condition.
#[test]
fn defaults_fail_required_credential_validation() {
    let errors = load_and_validate_str("").expect_err("missing credentials should fail");
    let missing: Vec<_> = errors
        .iter()
        .filter_map(|e| match e {
            ConfigError::MissingKey { key } => Some(key.as_str()),
            _ => None,
        })
        .collect();
    assert!(missing.contains(&"telephony.account_sid"));
    assert!(missing.contains(&"telephony.auth_token"));
    assert!(missing.contains(&"telephony.from_number"));
    assert!(missing.contains(&"voice.api_key"));
    assert!(missing.contains(&"crm.access_token"));
}

/// Unknown key "api_kye" in [voice] produces suggestion "did you mean `api_key`?"
#[test]
fn diagnostic_error_includes_unknown_key() {
    let toml = r#"
[voice]
api_kye = "test"
"#;

    let errors = load_and_validate_str(toml).expect_err("should produce errors");
    assert!(!errors.is_empty(), "should have at least one error");

    let has_unknown_key = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { key, suggestion, valid_keys, .. } if {
            key == "api_kye"
                && suggestion.as_deref() == Some("api_key")
                && valid_keys.contains("api_key")
        })
    });
    assert!(
        has_unknown_key,
        "should have UnknownKey error for 'api_kye' with suggestion 'api_key', got: {errors:?}"
    );
}

/// Error output includes the list of valid keys for the section.
#[test]
fn diagnostic_error_includes_valid_keys() {
    let toml = r#"
[telephony]
acount_sid = "AC0000"
"#;

    let errors = load_and_validate_str(toml).expect_err("should produce errors");
    let has_valid_keys = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { valid_keys, .. } if {
            valid_keys.contains("account_sid")
                && valid_keys.contains("auth_token")
                && valid_keys.contains("from_number")
        })
    });
    assert!(
        has_valid_keys,
        "error should list valid keys for [telephony] section"
    );
}

/// Invalid type (string where number expected) produces clear message.
#[test]
fn diagnostic_invalid_type_message() {
    let toml = r#"
[server]
port = "not_a_number"
"#;

    let err = load_config_from_str(toml).expect_err("should reject invalid type");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("invalid type") || err_str.contains("port"),
        "error should mention type mismatch, got: {err_str}"
    );
}

/// ConfigError implements miette::Diagnostic (can be rendered).
#[test]
fn config_error_implements_diagnostic() {
    use miette::Diagnostic;

    let error = ConfigError::UnknownKey {
        key: "api_kye".to_string(),
        suggestion: Some("api_key".to_string()),
        valid_keys: "api_key, api_url, model, voice, temperature".to_string(),
        span: None,
        src: None,
    };

    let code = error.code();
    assert!(code.is_some(), "should have diagnostic code");

    let help = error.help();
    assert!(help.is_some(), "should have help text");
    let help_str = help.unwrap().to_string();
    assert!(
        help_str.contains("did you mean `api_key`"),
        "help should contain suggestion, got: {help_str}"
    );
}

/// ConfigError can be rendered using miette's graphical handler.
#[test]
fn config_error_renders_with_miette() {
    use miette::GraphicalReportHandler;

    let error = ConfigError::MissingKey {
        key: "voice.api_key".to_string(),
    };

    let handler = GraphicalReportHandler::new();
    let mut buf = String::new();
    handler
        .render_report(&mut buf, &error)
        .expect("should render without error");
    assert!(!buf.is_empty(), "rendered report should not be empty");
    assert!(
        buf.contains("voice.api_key"),
        "rendered report should mention the key"
    );
}

/// suggest_key finds near misses and skips distant typos.
#[test]
fn suggestion_threshold_behaviour() {
    let valid = &["bank_name", "payment_link"];
    assert_eq!(
        suggest_key("bank_nme", valid),
        Some("bank_name".to_string())
    );
    assert!(suggest_key("zzzzzz", valid).is_none());
}
