/// Delivery-log persistence errors.
///
/// These never escape the orchestrator's call path: the logger swallows them
/// and the engine counts them as a metric.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("delivery log I/O failed at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("delivery log corrupted at {path}: {reason}")]
    Corrupted { path: String, reason: String },
}
