#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("invalid hex value {0:?}, expected 0x followed by exactly two hex digits")]
    InvalidHex(String),
    #[error("invalid character value {0:?}, expected exactly one ASCII character or a 0xNN hex value")]
    InvalidAscii(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    #[error("value {position}: {source}")]
    InvalidValue {
        position: usize,
        #[source]
        source: TokenError,
    },
    #[error("expected exactly {expected} values, got {got}")]
    WrongCount { expected: usize, got: usize },
    #[error("invalid patch length {0:?}, expected 6 or 12")]
    InvalidLength(String),
    #[error("file is {len} bytes long, at least {needed} are required")]
    FileTooShort { len: u64, needed: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
