use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid Status Code: {0}")]
    InvalidStatusCode(u16),

    #[error("Unknown prompt type: {0}")]
    UnknownPromptType(String),

    #[error("Invalid value for header: {0}")]
    InvalidHeader(&'static str),
}
