use log::trace;

use crate::{error::DidDocumentError, schema::did_doc::DidDocument};

/// Parses a JSON(-LD) DID document and checks it is internally consistent: a DID base context,
/// unique verification method ids, and every verification relationship reference pointing at a
/// verification method of the same document.
pub fn parse_document(bytes: &[u8]) -> Result<DidDocument, DidDocumentError> {
    let document: DidDocument = serde_json::from_slice(bytes)?;
    trace!("parse_document >> parsed document {}", document.id());
    document.validate()?;
    Ok(document)
}
