use thiserror::Error;

/// Errors raised when foreign strings or numbers are converted into one of
/// the closed vocabularies of this crate.
///
/// Classification predicates and registry lookups never return these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypesError {
    #[error("Unknown chain key: {0}")]
    UnknownChain(String),
    #[error("Unknown numeric chain id: {0}")]
    UnknownChainId(u64),
    #[error("Unknown token kind: {0}")]
    UnknownTokenKind(String),
    #[error("Unknown transaction type: {0}")]
    UnknownTxType(String),
}

pub type Result<T> = std::result::Result<T, TypesError>;
