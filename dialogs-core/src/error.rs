#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DialogError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("invalid value: {0}")]
    InvalidValue(String),
    #[error("host error: {0}")]
    Host(String),
}

pub type Result<T, E = DialogError> = std::result::Result<T, E>;
