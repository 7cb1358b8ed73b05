//! Compliance audit logging.
//!
//! Every answered query produces an [`AuditEntry`] with a SHA-256 hash of
//! the response and a compliance flag. Entries go to an [`AuditSink`]; the
//! shipped sink appends one JSON object per line to a file.

use crate::error::{Error, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Fields at least one of which a compliant response must contain.
const REQUIRED_FIELDS: &[&str] = &["Test Name", "Specimen", "Method"];

/// One audit record for a query/response exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// UTC timestamp, RFC 3339
    pub timestamp: String,
    /// Session identifier
    pub session: String,
    /// Department or document id the query ran against
    pub department: String,
    /// The user query
    pub query: String,
    /// The assistant response
    pub response: String,
    /// SHA-256 hex digest of the response
    pub hash: String,
    /// Whether the response carries at least one required field
    pub compliance_check: bool,
}

impl AuditEntry {
    /// Build an entry stamped with the current time.
    pub fn new(
        session: impl Into<String>,
        department: impl Into<String>,
        query: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        Self::at(Utc::now(), session, department, query, response)
    }

    /// Build an entry with an explicit timestamp.
    pub fn at(
        timestamp: DateTime<Utc>,
        session: impl Into<String>,
        department: impl Into<String>,
        query: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        let response = response.into();
        Self {
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            session: session.into(),
            department: department.into(),
            query: query.into(),
            hash: sha256_hex(&response),
            compliance_check: check_compliance(&response),
            response,
        }
    }
}

/// Check whether a response carries at least one required field label.
pub fn check_compliance(response: &str) -> bool {
    REQUIRED_FIELDS.iter().any(|f| response.contains(f))
}

/// Derive a short session identifier from a seed string.
pub fn session_id(seed: &str) -> String {
    let digest = sha256_hex(seed);
    digest[..12].to_string()
}

fn sha256_hex(data: &str) -> String {
    let digest = Sha256::digest(data.as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

/// Destination for audit entries.
pub trait AuditSink {
    /// Record one entry.
    fn record(&mut self, entry: &AuditEntry) -> Result<()>;
}

/// Appends entries to a file, one JSON object per line.
#[derive(Debug, Clone)]
pub struct JsonlAuditSink {
    path: PathBuf,
}

impl JsonlAuditSink {
    /// Create a sink writing to the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AuditSink for JsonlAuditSink {
    fn record(&mut self, entry: &AuditEntry) -> Result<()> {
        let line = serde_json::to_string(entry)
            .map_err(|e| Error::Audit(format!("serialize audit entry: {e}")))?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}
