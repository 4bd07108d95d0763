pub mod error;

use did_resolver::{
    did_doc::schema::did_doc::DidDocument,
    did_parser::Did,
    error::GenericError,
    traits::{method_handler::DidMethodHandler, resolvable::resolution_output::DidResolutionOutput},
};
use error::DidResolverRegistryError;
use log::{debug, warn};

pub type GenericHandler = dyn DidMethodHandler;

#[derive(Default)]
pub struct ResolverRegistry {
    handlers: Vec<Box<GenericHandler>>,
}

impl ResolverRegistry {
    pub fn new() -> Self {
        ResolverRegistry {
            handlers: Vec::new(),
        }
    }

    /// Handlers are consulted in registration order.
    pub fn register_handler<T>(mut self, handler: T) -> Self
    where
        T: DidMethodHandler + 'static,
    {
        self.handlers.push(Box::new(handler));
        self
    }

    pub fn handler_for(&self, method: &str) -> Option<&GenericHandler> {
        self.handlers
            .iter()
            .find(|handler| handler.accepts(method))
            .map(|handler| handler.as_ref())
    }

    fn route(&self, did: &Did) -> Result<&GenericHandler, DidResolverRegistryError> {
        self.handler_for(did.method()).ok_or_else(|| {
            debug!("No handler accepts DID method {}", did.method());
            DidResolverRegistryError::UnsupportedMethod(did.method().to_string())
        })
    }

    pub async fn resolve(&self, did: &Did) -> Result<DidResolutionOutput, GenericError> {
        self.route(did)?.read(did).await
    }

    pub async fn update(&self, did_document: &DidDocument) -> Result<(), GenericError> {
        self.route(did_document.id())?.update(did_document).await
    }

    pub async fn deactivate(&self, did: &Did) -> Result<(), GenericError> {
        self.route(did)?.deactivate(did).await
    }

    /// Closes every handler, returning the first failure after all of them were attempted.
    pub async fn close(&self) -> Result<(), GenericError> {
        let mut first_error = None;
        for handler in &self.handlers {
            if let Err(err) = handler.close().await {
                warn!("Failed to close DID method handler: {}", err);
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
