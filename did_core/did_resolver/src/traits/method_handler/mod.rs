use async_trait::async_trait;
use did_doc::schema::did_doc::DidDocument;
use did_parser::Did;

use crate::{error::GenericError, traits::resolvable::resolution_output::DidResolutionOutput};

/// The capabilities a DID method plugs into a host with. A host keeps a collection of handlers
/// and routes each DID to the first handler that accepts its method.
#[async_trait]
pub trait DidMethodHandler: Send + Sync {
    /// Whether DIDs of `method` should be routed to this handler. Must not perform I/O.
    fn accepts(&self, method: &str) -> bool;

    async fn read(&self, did: &Did) -> Result<DidResolutionOutput, GenericError>;

    async fn update(&self, did_document: &DidDocument) -> Result<(), GenericError>;

    async fn deactivate(&self, did: &Did) -> Result<(), GenericError>;

    /// Releases whatever the handler holds. Handlers without owned resources return `Ok(())`.
    async fn close(&self) -> Result<(), GenericError>;
}
