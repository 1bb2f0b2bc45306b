//! Error taxonomy for the dispatch subsystem.
//!
//! Each domain has its own enum; `LifelineError` wraps them all so that
//! cross-crate call paths can return a single type via `?`.

pub mod channel_error;
pub mod config_error;
pub mod dispatch_error;
pub mod geo_error;
pub mod lifecycle_error;
pub mod persistence_error;

pub use channel_error::ChannelError;
pub use config_error::ConfigError;
pub use dispatch_error::DispatchError;
pub use geo_error::GeoError;
pub use lifecycle_error::LifecycleError;
pub use persistence_error::PersistenceError;

/// Top-level error for the Lifeline workspace.
#[derive(Debug, thiserror::Error)]
pub enum LifelineError {
    #[error(transparent)]
    Geo(#[from] GeoError),

    #[error(transparent)]
    Channel(#[from] ChannelError),

    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result alias used across the workspace.
pub type LifelineResult<T> = Result<T, LifelineError>;
