/// Dispatch precondition errors raised before any delivery is attempted.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("no facilities available for ranking")]
    NoFacilities,

    #[error("unknown facility {id}")]
    UnknownFacility { id: String },
}
