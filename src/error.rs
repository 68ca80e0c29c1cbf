use thiserror::Error;

/// Errors raised while loading or validating a keyboard configuration.
///
/// Key handling itself never fails; only configuration does.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid keyboard config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("key #{index} has an empty primary value")]
    EmptyPrimary { index: usize },
    #[error("duplicate key id {0:?}")]
    DuplicateKey(String),
    #[error("initial focus key {0:?} is not in the layout")]
    UnknownInitialFocus(String),
}
