#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdCheckError {
    #[error("invalid ID format: {id}")]
    InvalidId { id: String },

    #[error("wrong length: expected {expected} characters, found {found}")]
    WrongLength { expected: usize, found: usize },

    #[error("non-digit character {found:?} at position {position}")]
    NonDigit { position: usize, found: char },

    #[error("checksum mismatch: expected {expected}, found {found}")]
    ChecksumMismatch { expected: u8, found: u8 },

    #[error("value {value} does not fit in 11 digits")]
    OutOfRange { value: u64 },
}

pub type Result<T> = std::result::Result<T, IdCheckError>;
