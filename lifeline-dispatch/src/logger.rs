//! Append-only audit log of failed delivery attempts.
//!
//! The store is a JSON array on disk with no native concurrent-append
//! guarantee, so all writers serialize behind one async mutex. Errors are
//! returned to the engine, which swallows and counts them: losing an audit
//! record is preferable to losing the ability to alert a hospital.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use lifeline_core::errors::PersistenceError;
use lifeline_core::models::DeliveryAttempt;

/// One persisted failure record, kept for audit and manual follow-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryLogRecord {
    pub timestamp: DateTime<Utc>,
    pub to: String,
    /// The body that failed to deliver.
    pub message: String,
    pub error: Option<String>,
    pub provider: String,
}

/// File-backed delivery failure log.
pub struct DeliveryLog {
    path: PathBuf,
    writer: Mutex<()>,
}

impl DeliveryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            writer: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one failed attempt to the log.
    pub async fn record_failure(
        &self,
        attempt: &DeliveryAttempt,
        body: &str,
    ) -> Result<(), PersistenceError> {
        let _guard = self.writer.lock().await;
        let mut records = self.read_records().await?;
        records.push(DeliveryLogRecord {
            timestamp: attempt.timestamp,
            to: attempt.recipient.clone(),
            message: body.to_string(),
            error: attempt.error.clone(),
            provider: attempt
                .provider
                .clone()
                .unwrap_or_else(|| attempt.channel.as_str().to_string()),
        });
        let json =
            serde_json::to_vec_pretty(&records).map_err(|e| PersistenceError::Corrupted {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|source| PersistenceError::Io {
                path: self.path.display().to_string(),
                source,
            })
    }

    /// All records currently in the log.
    pub async fn entries(&self) -> Result<Vec<DeliveryLogRecord>, PersistenceError> {
        let _guard = self.writer.lock().await;
        self.read_records().await
    }

    async fn read_records(&self) -> Result<Vec<DeliveryLogRecord>, PersistenceError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(PersistenceError::Io {
                    path: self.path.display().to_string(),
                    source,
                })
            }
        };
        serde_json::from_slice(&raw).map_err(|e| PersistenceError::Corrupted {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })
    }
}
