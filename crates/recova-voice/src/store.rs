// SPDX-FileCopyrightText: 2026 Recova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transcript persistence.
//!
//! Writes one pretty-printed JSON file per completed call into a flat
//! directory. Filenames embed the customer name, a local timestamp, and
//! the voice session identifier, so two calls for the same customer in the
//! same second still land in distinct files.

use std::fs;
use std::path::PathBuf;

use recova_core::{RecovaError, VoiceSessionId};
use tracing::info;

use crate::types::Transcript;

/// Filesystem store for call transcripts.
#[derive(Debug, Clone)]
pub struct TranscriptStore {
    dir: PathBuf,
}

impl TranscriptStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Persists one transcript and returns the path it was written to.
    ///
    /// Creates the store directory on first use. The filename is
    /// `{customer}_{YYYYMMDD_HHMMSS}_{session_id}.json` with both the
    /// customer name and session id reduced to filesystem-safe characters.
    pub fn save(
        &self,
        transcript: &Transcript,
        customer_name: &str,
        session_id: &VoiceSessionId,
    ) -> Result<PathBuf, RecovaError> {
        fs::create_dir_all(&self.dir).map_err(|e| RecovaError::Storage {
            source: Box::new(e),
        })?;

        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let filename = format!(
            "{}_{}_{}.json",
            sanitize(customer_name),
            timestamp,
            sanitize(&session_id.0)
        );
        let path = self.dir.join(filename);

        let body = serde_json::to_string_pretty(transcript).map_err(|e| RecovaError::Storage {
            source: Box::new(e),
        })?;
        fs::write(&path, body).map_err(|e| RecovaError::Storage {
            source: Box::new(e),
        })?;

        info!(path = %path.display(), turns = transcript.results.len(), "transcript saved");
        Ok(path)
    }
}

/// Reduces a name to `[A-Za-z0-9_-]`, mapping runs of anything else to a
/// single underscore. An all-unsafe input becomes `"unknown"`.
fn sanitize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_was_sub = false;
    for c in name.trim().chars() {
        if c.is_ascii_alphanumeric() || c == '-' {
            out.push(c);
            last_was_sub = false;
        } else if !last_was_sub {
            out.push('_');
            last_was_sub = true;
        }
    }
    let trimmed = out.trim_matches('_');
    if trimmed.is_empty() {
        "unknown".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TranscriptTurn;

    fn transcript() -> Transcript {
        Transcript {
            results: vec![TranscriptTurn {
                role: "MESSAGE_ROLE_AGENT".into(),
                text: Some("Hello, may I speak with Asha Rao?".into()),
            }],
            next: None,
            previous: None,
        }
    }

    #[test]
    fn save_writes_pretty_json_under_store_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let store = TranscriptStore::new(tmp.path().join("conversations"));

        let path = store
            .save(
                &transcript(),
                "Asha Rao",
                &VoiceSessionId("uv-session-1".into()),
            )
            .unwrap();

        assert!(path.starts_with(tmp.path().join("conversations")));
        let written = std::fs::read_to_string(&path).unwrap();
        let parsed: Transcript = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.results.len(), 1);
        // Pretty-printed, not a single line.
        assert!(written.contains('\n'));
    }

    #[test]
    fn filename_embeds_customer_and_session_id() {
        let tmp = tempfile::tempdir().unwrap();
        let store = TranscriptStore::new(tmp.path());

        let path = store
            .save(
                &transcript(),
                "Asha Rao",
                &VoiceSessionId("uv-session-1".into()),
            )
            .unwrap();

        let name = path.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("Asha_Rao_"));
        assert!(name.ends_with("_uv-session-1.json"));
    }

    #[test]
    fn same_customer_same_second_yields_distinct_files() {
        let tmp = tempfile::tempdir().unwrap();
        let store = TranscriptStore::new(tmp.path());

        let a = store
            .save(&transcript(), "Asha Rao", &VoiceSessionId("uv-a".into()))
            .unwrap();
        let b = store
            .save(&transcript(), "Asha Rao", &VoiceSessionId("uv-b".into()))
            .unwrap();

        assert_ne!(a, b);
        assert!(a.exists() && b.exists());
    }

    #[test]
    fn sanitize_strips_path_and_shell_characters() {
        assert_eq!(sanitize("Asha Rao"), "Asha_Rao");
        assert_eq!(sanitize("../../etc/passwd"), "etc_passwd");
        assert_eq!(sanitize("name; rm -rf"), "name_rm_-rf");
        assert_eq!(sanitize("///"), "unknown");
        assert_eq!(sanitize(""), "unknown");
    }
}
