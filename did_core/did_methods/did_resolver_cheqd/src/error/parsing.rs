use did_resolver::{did_doc::error::DidDocumentError, did_parser::ParseError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParsingErrorSource {
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("DID parsing error: {0}")]
    DidParsingError(#[from] ParseError),
    #[error("DID document error: {0}")]
    DidDocumentError(#[from] DidDocumentError),
    #[error("Resolution envelope error: {0}")]
    EnvelopeError(String),
}
