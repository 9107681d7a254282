use thiserror::Error;

pub type QfResult<T> = Result<T, QfError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QfError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Index out of bounds: {what} (index={index}, len={len})")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Malformed quantity space '{space}': {what}")]
    MalformedSpace { space: String, what: &'static str },

    #[error("Unknown landmark '{landmark}' in quantity space '{space}'")]
    UnknownLandmark { space: String, landmark: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
