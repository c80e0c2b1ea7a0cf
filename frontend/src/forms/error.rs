use thiserror::Error;

/// Input the visitor has to fix before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),
    #[error("email address is malformed")]
    InvalidEmail,
    #[error("no attachment was chosen")]
    MissingAttachment,
    #[error("attachment is {size} bytes, the limit is {limit}")]
    AttachmentTooLarge { size: u64, limit: u64 },
    #[error("attachment has media type `{0}`")]
    UnsupportedAttachmentType(String),
}

/// Anything that went wrong between issuing the request and reading the
/// answer. Only ever logged, never shown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("endpoint answered with status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Network(String),
    #[error("response body is not JSON: {0}")]
    MalformedBody(String),
    #[error("could not build request payload: {0}")]
    Payload(String),
}
