use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
}
