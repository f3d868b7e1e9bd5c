//! Offline inspection of packed status records.
//!
//! Reads a file holding one packed record and produces an [`InspectReport`]:
//! the decoded fields when the record is well formed, or the structural
//! problem when it is not. The report is deterministic for a given input and
//! label style, so it is suitable for diffs.

use std::fmt::Write as _;
use std::path::Path;

use serde::Serialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

use arrowstatus_core::errno::errno_name;
use arrowstatus_core::{LabelStyle, PackedError, PackedStatus, StatusCode};

#[derive(Debug, Error)]
pub enum InspectError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

/// Whether the record decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum InspectStatus {
    Decoded,
    Rejected,
}

/// Explainable decode result for one packed record.
#[derive(Debug, Clone, Serialize)]
pub struct InspectReport {
    pub input_len: usize,
    pub sha256: String,
    pub label_style: String,
    pub status: InspectStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<StatusCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_byte: Option<u8>,
    /// False when the code byte is unassigned and was read as `unknown_error`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_known: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auxiliary_code: Option<i16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errno_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_len: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Inspect the record stored in `input`. Only reading the file can fail; an
/// empty file is reported as a truncated record.
pub fn inspect_file(input: &Path, style: LabelStyle) -> Result<InspectReport, InspectError> {
    let bytes = std::fs::read(input)?;
    Ok(inspect_bytes(&bytes, style))
}

/// Inspect an in-memory record. Never fails: structural problems are reported.
#[must_use]
pub fn inspect_bytes(bytes: &[u8], style: LabelStyle) -> InspectReport {
    let mut report = InspectReport {
        input_len: bytes.len(),
        sha256: sha256_hex(bytes),
        label_style: style.as_str().to_string(),
        status: InspectStatus::Rejected,
        code: None,
        code_byte: None,
        code_known: None,
        auxiliary_code: None,
        errno_name: None,
        message_len: None,
        message: None,
        display: None,
        error: None,
    };

    match PackedStatus::parse(bytes) {
        Ok(view) => {
            report.status = InspectStatus::Decoded;
            report.code = Some(view.code());
            report.code_byte = Some(view.code_byte());
            report.code_known = Some(StatusCode::from_u8(view.code_byte()).is_some());
            report.auxiliary_code = Some(view.auxiliary_code());
            report.errno_name = errno_name(view.auxiliary_code()).map(str::to_string);
            report.message_len = Some(view.message_len());
            report.message = Some(String::from_utf8_lossy(view.message()).into_owned());
            report.display = Some(view.display_with(style));
        }
        Err(err) => {
            report.error = Some(err.to_string());
            // Best effort: expose whatever header fields are present.
            if !matches!(err, PackedError::Truncated { .. }) {
                report.code_byte = Some(bytes[4]);
            }
        }
    }

    report
}

/// Human-readable rendering of a report.
#[must_use]
pub fn render_plain(report: &InspectReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "input: {} bytes, sha256 {}", report.input_len, report.sha256);
    let _ = writeln!(out, "labels: {}", report.label_style);
    match report.status {
        InspectStatus::Decoded => {
            if let (Some(code), Some(byte)) = (report.code, report.code_byte) {
                let note = if report.code_known == Some(false) {
                    " (unassigned)"
                } else {
                    ""
                };
                let _ = writeln!(out, "code: {} [{byte}]{note}", code.as_str());
            }
            if let Some(aux) = report.auxiliary_code {
                match &report.errno_name {
                    Some(name) => {
                        let _ = writeln!(out, "auxiliary: {aux} ({name})");
                    }
                    None => {
                        let _ = writeln!(out, "auxiliary: {aux}");
                    }
                }
            }
            if let Some(len) = report.message_len {
                let _ = writeln!(out, "message: {len} bytes");
            }
            if let Some(display) = &report.display {
                let _ = writeln!(out, "display: {display}");
            }
        }
        InspectStatus::Rejected => {
            let _ = writeln!(
                out,
                "rejected: {}",
                report.error.as_deref().unwrap_or("unknown")
            );
        }
    }
    out
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    digest.iter().map(|b| format!("{b:02x}")).collect()
}
