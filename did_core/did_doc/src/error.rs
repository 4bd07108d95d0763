use did_parser::{DidUrl, ParseError};

#[derive(Debug)]
pub enum DidDocumentError {
    InvalidInput(String),
    MissingField(&'static str),
    UnsupportedContext(String),
    DuplicateVerificationMethod(DidUrl),
    UnresolvedReference(DidUrl),
    JsonError(serde_json::Error),
}

impl std::fmt::Display for DidDocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DidDocumentError::InvalidInput(input) => {
                write!(f, "Invalid input: {}", input)
            }
            DidDocumentError::MissingField(field) => {
                write!(f, "Missing field: {}", field)
            }
            DidDocumentError::UnsupportedContext(context) => {
                write!(f, "Unsupported base context: {}", context)
            }
            DidDocumentError::DuplicateVerificationMethod(id) => {
                write!(f, "Duplicate verification method id: {}", id)
            }
            DidDocumentError::UnresolvedReference(reference) => {
                write!(
                    f,
                    "Verification method reference not found in document: {}",
                    reference
                )
            }
            DidDocumentError::JsonError(error) => {
                write!(f, "(De)serialization error: {}", error)
            }
        }
    }
}

impl std::error::Error for DidDocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DidDocumentError::JsonError(error) => Some(error),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DidDocumentError {
    fn from(error: serde_json::Error) -> Self {
        DidDocumentError::JsonError(error)
    }
}

impl From<url::ParseError> for DidDocumentError {
    fn from(error: url::ParseError) -> Self {
        DidDocumentError::InvalidInput(error.to_string())
    }
}

impl From<ParseError> for DidDocumentError {
    fn from(error: ParseError) -> Self {
        DidDocumentError::InvalidInput(error.to_string())
    }
}
