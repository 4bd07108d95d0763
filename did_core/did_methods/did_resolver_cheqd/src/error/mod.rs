pub mod parsing;
mod resolution;

use bytes::Bytes;
use did_resolver::error::GenericError;
use hyper::StatusCode;
use thiserror::Error;

use self::parsing::ParsingErrorSource;

pub type DidCheqdResult<T> = Result<T, DidCheqdError>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DidCheqdError {
    #[error("Invalid configuration: {0}")]
    BadConfiguration(String),
    #[error("DID method not supported: {0}")]
    MethodNotSupported(String),
    #[error("Invalid DID: {0}")]
    InvalidDid(String),
    #[error("Transport error: {0}")]
    TransportError(#[source] GenericError),
    #[error("Resolver returned non-success status: {0}")]
    RemoteError(StatusCode),
    #[error("Failed to decode resolver response: {source}")]
    DecodeError {
        /// The response body as received, for diagnostics.
        body: Bytes,
        #[source]
        source: ParsingErrorSource,
    },
    #[error("Operation not supported by did:cheqd resolver: {0}")]
    UnsupportedOperation(&'static str),
}

impl DidCheqdError {
    pub(crate) fn decode(body: &Bytes, source: impl Into<ParsingErrorSource>) -> Self {
        DidCheqdError::DecodeError {
            body: body.clone(),
            source: source.into(),
        }
    }
}
