// SPDX-FileCopyrightText: 2026 Recova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the telephony provider.
//!
//! Places outbound calls bridged to a voice session's join URL and
//! terminates in-progress calls. Requests are form-encoded with HTTP basic
//! auth against the provider's REST API. No retries.

use std::time::Duration;

use recova_core::{CallSid, RecovaError};
use serde::Deserialize;
use tracing::debug;

/// Events the status webhook subscribes to on every outbound call.
const STATUS_CALLBACK_EVENTS: [&str; 5] =
    ["answered", "completed", "busy", "no-answer", "failed"];

/// HTTP client for the telephony REST API.
#[derive(Debug, Clone)]
pub struct TelephonyClient {
    client: reqwest::Client,
    base_url: String,
    account_sid: String,
    auth_token: String,
    from_number: String,
}

#[derive(Debug, Deserialize)]
struct CreateCallResponse {
    sid: String,
}

impl TelephonyClient {
    /// Creates a new telephony client.
    ///
    /// # Arguments
    /// * `account_sid` - provider account identifier, also the basic-auth user
    /// * `auth_token` - basic-auth secret
    /// * `from_number` - E.164 caller id for every outbound call
    /// * `base_url` - REST API base (e.g. "https://api.twilio.com")
    pub fn new(
        account_sid: String,
        auth_token: String,
        from_number: String,
        base_url: String,
    ) -> Result<Self, RecovaError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| RecovaError::Upstream {
                provider: "telephony".into(),
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url,
            account_sid,
            auth_token,
            from_number,
        })
    }

    /// Places an outbound call that streams its audio to `join_url`.
    ///
    /// The call's TwiML bridges the callee to the voice session; status
    /// transitions are POSTed to `status_callback_url` for the subscribed
    /// event set. Returns the provider-assigned call SID.
    pub async fn initiate_call(
        &self,
        to: &str,
        join_url: &str,
        status_callback_url: &str,
    ) -> Result<CallSid, RecovaError> {
        debug!(to, "initiating outbound call");

        let url = format!(
            "{}/2010-04-01/Accounts/{}/Calls.json",
            self.base_url, self.account_sid
        );
        let twiml = bridge_twiml(join_url);

        let mut form: Vec<(&str, &str)> = vec![
            ("To", to),
            ("From", &self.from_number),
            ("Twiml", &twiml),
            ("StatusCallback", status_callback_url),
            ("StatusCallbackMethod", "POST"),
        ];
        for event in STATUS_CALLBACK_EVENTS {
            form.push(("StatusCallbackEvent", event));
        }

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&form)
            .send()
            .await
            .map_err(|e| RecovaError::Upstream {
                provider: "telephony".into(),
                message: format!("call initiation request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, "telephony create-call response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RecovaError::upstream(
                "telephony",
                format!("call initiation returned {status}: {body}"),
            ));
        }

        let body = response.text().await.map_err(|e| RecovaError::Upstream {
            provider: "telephony".into(),
            message: format!("failed to read create-call response body: {e}"),
            source: Some(Box::new(e)),
        })?;
        let created: CreateCallResponse =
            serde_json::from_str(&body).map_err(|e| RecovaError::Upstream {
                provider: "telephony".into(),
                message: format!("failed to parse create-call response: {e}"),
                source: Some(Box::new(e)),
            })?;

        debug!(call_sid = %created.sid, "outbound call placed");
        Ok(CallSid(created.sid))
    }

    /// Terminates an in-progress call by driving it to `completed`.
    pub async fn end_call(&self, call_sid: &CallSid) -> Result<(), RecovaError> {
        debug!(call_sid = %call_sid, "ending call");

        let url = format!(
            "{}/2010-04-01/Accounts/{}/Calls/{}.json",
            self.base_url, self.account_sid, call_sid
        );

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[("Status", "completed")])
            .send()
            .await
            .map_err(|e| RecovaError::Upstream {
                provider: "telephony".into(),
                message: format!("end-call request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RecovaError::upstream(
                "telephony",
                format!("end-call returned {status}: {body}"),
            ));
        }

        debug!(call_sid = %call_sid, "call ended");
        Ok(())
    }
}

/// Renders the TwiML that bridges the callee to the voice session.
fn bridge_twiml(join_url: &str) -> String {
    format!(
        r#"<Response><Connect><Stream url="{}"/></Connect></Response>"#,
        escape_xml_attr(join_url)
    )
}

fn escape_xml_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> TelephonyClient {
        TelephonyClient::new(
            "AC_test".into(),
            "secret".into(),
            "+15550100".into(),
            base_url.to_string(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn initiate_call_posts_form_and_returns_sid() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/2010-04-01/Accounts/AC_test/Calls.json"))
            .and(header_exists("authorization"))
            .and(body_string_contains("To=%2B918919025218"))
            .and(body_string_contains("From=%2B15550100"))
            .and(body_string_contains("StatusCallbackEvent=no-answer"))
            .and(body_string_contains("StatusCallbackMethod=POST"))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({"sid": "CA123", "status": "queued"})),
            )
            .mount(&server)
            .await;

        let sid = test_client(&server.uri())
            .initiate_call(
                "+918919025218",
                "wss://voice.example/join/uv-1",
                "https://gw.example/call-status",
            )
            .await
            .unwrap();

        assert_eq!(sid.0, "CA123");
    }

    #[tokio::test]
    async fn initiate_call_embeds_join_url_in_twiml() {
        let server = MockServer::start().await;

        // "<Stream url=\"wss://...\"/>" form-encoded inside the Twiml field.
        Mock::given(method("POST"))
            .and(path("/2010-04-01/Accounts/AC_test/Calls.json"))
            .and(body_string_contains("Twiml=%3CResponse%3E%3CConnect%3E%3CStream+url%3D"))
            .and(body_string_contains("wss%3A%2F%2Fvoice.example%2Fjoin%2Fuv-1"))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(serde_json::json!({"sid": "CA124"})),
            )
            .mount(&server)
            .await;

        test_client(&server.uri())
            .initiate_call(
                "+918919025218",
                "wss://voice.example/join/uv-1",
                "https://gw.example/call-status",
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn initiate_call_maps_api_failure_to_upstream() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/2010-04-01/Accounts/AC_test/Calls.json"))
            .respond_with(ResponseTemplate::new(400).set_body_json(
                serde_json::json!({"code": 21211, "message": "Invalid 'To' phone number"}),
            ))
            .expect(1) // no retry loop
            .mount(&server)
            .await;

        let err = test_client(&server.uri())
            .initiate_call("not-a-number", "wss://x", "https://y")
            .await
            .unwrap_err();

        assert!(matches!(err, RecovaError::Upstream { .. }), "got: {err}");
        assert!(err.to_string().contains("Invalid 'To' phone number"));
    }

    #[tokio::test]
    async fn end_call_drives_status_to_completed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/2010-04-01/Accounts/AC_test/Calls/CA123.json"))
            .and(body_string_contains("Status=completed"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"sid": "CA123", "status": "completed"})),
            )
            .mount(&server)
            .await;

        test_client(&server.uri())
            .end_call(&CallSid("CA123".into()))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn end_call_unknown_sid_is_upstream_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/2010-04-01/Accounts/AC_test/Calls/CA999.json"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({"code": 20404, "message": "not found"})),
            )
            .mount(&server)
            .await;

        let err = test_client(&server.uri())
            .end_call(&CallSid("CA999".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, RecovaError::Upstream { .. }));
    }

    #[test]
    fn twiml_escapes_attribute_characters() {
        let twiml = bridge_twiml("wss://v.example/join?a=1&b=2");
        assert_eq!(
            twiml,
            r#"<Response><Connect><Stream url="wss://v.example/join?a=1&amp;b=2"/></Connect></Response>"#
        );
    }
}
