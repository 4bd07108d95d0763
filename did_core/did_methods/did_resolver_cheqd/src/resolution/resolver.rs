use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use did_resolver::{
    did_doc::{parse_document, schema::did_doc::DidDocument},
    did_parser::Did,
    error::GenericError,
    shared_types::{did_document_metadata::DidDocumentMetadata, media_type::MediaType},
    traits::{
        method_handler::DidMethodHandler,
        resolvable::{
            resolution_metadata::DidResolutionMetadata, resolution_output::DidResolutionOutput,
            DidResolvable,
        },
    },
};
use http_body_util::{BodyExt, Empty};
use hyper::{
    header::{ACCEPT, AUTHORIZATION},
    Method, Request, StatusCode, Uri,
};
use log::{debug, trace, warn};

use super::{
    configuration::DidCheqdResolverConfiguration,
    envelope::ResolutionEnvelope,
    transformer::project_document,
    transport::{HttpTransport, HyperTransport},
};
use crate::error::{parsing::ParsingErrorSource, DidCheqdError, DidCheqdResult};

pub struct DidCheqdResolver {
    configuration: DidCheqdResolverConfiguration,
    transport: Arc<dyn HttpTransport>,
}

#[async_trait]
impl DidResolvable for DidCheqdResolver {
    type DidResolutionOptions = ();

    async fn resolve(
        &self,
        did: &Did,
        _: &Self::DidResolutionOptions,
    ) -> Result<DidResolutionOutput, GenericError> {
        Ok(self.resolve_did(did).await?)
    }
}

#[async_trait]
impl DidMethodHandler for DidCheqdResolver {
    fn accepts(&self, method: &str) -> bool {
        DidCheqdResolver::accepts(self, method)
    }

    async fn read(&self, did: &Did) -> Result<DidResolutionOutput, GenericError> {
        Ok(self.resolve_did(did).await?)
    }

    async fn update(&self, did_document: &DidDocument) -> Result<(), GenericError> {
        Ok(self.update_did(did_document).await?)
    }

    async fn deactivate(&self, did: &Did) -> Result<(), GenericError> {
        Ok(self.deactivate_did(did).await?)
    }

    async fn close(&self) -> Result<(), GenericError> {
        Ok(())
    }
}

impl DidCheqdResolver {
    /// Resolver using a pooled hyper client with native TLS.
    pub fn new(configuration: DidCheqdResolverConfiguration) -> DidCheqdResult<Self> {
        let transport = HyperTransport::new().map_err(|e| {
            DidCheqdError::BadConfiguration(format!("Failed to build TlsConnector: {e}"))
        })?;
        Self::with_transport(configuration, Arc::new(transport))
    }

    pub fn with_transport(
        configuration: DidCheqdResolverConfiguration,
        transport: Arc<dyn HttpTransport>,
    ) -> DidCheqdResult<Self> {
        let endpoint = configuration.endpoint();
        url::Url::parse(endpoint).map_err(|e| {
            DidCheqdError::BadConfiguration(format!(
                "Resolver endpoint is not an absolute URI: {endpoint} {e}"
            ))
        })?;
        endpoint.parse::<Uri>().map_err(|e| {
            DidCheqdError::BadConfiguration(format!(
                "Resolver endpoint is not a valid request URI: {endpoint} {e}"
            ))
        })?;

        Ok(Self {
            configuration,
            transport,
        })
    }

    pub fn configuration(&self) -> &DidCheqdResolverConfiguration {
        &self.configuration
    }

    pub fn accepts(&self, method: &str) -> bool {
        self.configuration.method_matcher().matches(method)
    }

    pub fn request_url(&self, did: &Did) -> String {
        self.configuration
            .endpoint_join()
            .join(self.configuration.endpoint(), did.did())
    }

    /// Resolve a cheqd DID through the configured resolver endpoint.
    pub async fn resolve_did(&self, did: &Did) -> DidCheqdResult<DidResolutionOutput> {
        trace!("DidCheqdResolver::resolve_did >> did: {did}");
        if !self.accepts(did.method()) {
            return Err(DidCheqdError::MethodNotSupported(did.method().to_string()));
        }

        let body = self.fetch_envelope(did).await?;

        let envelope: ResolutionEnvelope = serde_json::from_slice(&body).map_err(|err| {
            warn!("Resolver response for {did} is not a resolution envelope: {err}");
            DidCheqdError::decode(&body, err)
        })?;
        let ResolutionEnvelope {
            did_document,
            did_document_metadata,
            did_resolution_metadata,
        } = envelope;

        if did_document.id != did.did() {
            return Err(DidCheqdError::decode(
                &body,
                ParsingErrorSource::EnvelopeError(format!(
                    "Resolver returned document {} for {did}",
                    did_document.id
                )),
            ));
        }
        if let Some(reported) = &did_resolution_metadata.did {
            if reported.did_string != did.did() {
                return Err(DidCheqdError::decode(
                    &body,
                    ParsingErrorSource::EnvelopeError(format!(
                        "Resolver reports having resolved {} for {did}",
                        reported.did_string
                    )),
                ));
            }
        }

        let canonical = project_document(did_document, self.configuration.authentication_shape())
            .map_err(|err| DidCheqdError::decode(&body, err))?;
        let canonical =
            serde_json::to_vec(&canonical).map_err(|err| DidCheqdError::decode(&body, err))?;
        let did_document = parse_document(&canonical).map_err(|err| {
            warn!("Document resolved for {did} failed validation: {err}");
            DidCheqdError::decode(&body, err)
        })?;

        Ok(DidResolutionOutput::builder(did_document)
            .did_document_metadata(DidDocumentMetadata::from(did_document_metadata))
            .did_resolution_metadata(DidResolutionMetadata::from(did_resolution_metadata))
            .build())
    }

    async fn fetch_envelope(&self, did: &Did) -> DidCheqdResult<Bytes> {
        let url = self.request_url(did);
        debug!("DidCheqdResolver::fetch_envelope >> GET {url}");

        let mut request = Request::builder()
            .method(Method::GET)
            .uri(url.as_str())
            .header(ACCEPT, MediaType::LdJson.as_str());
        if let Some(token) = self.configuration.auth_token() {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = request.body(Empty::<Bytes>::new()).map_err(|e| {
            DidCheqdError::InvalidDid(format!("Cannot build request for {did} ({url}): {e}"))
        })?;

        let response = self
            .transport
            .send(request)
            .await
            .map_err(DidCheqdError::TransportError)?;

        let status = response.status();
        debug!("DidCheqdResolver::fetch_envelope << status: {status}");
        if status != StatusCode::OK {
            warn!("Resolver endpoint answered {status} for {did}");
            return Err(DidCheqdError::RemoteError(status));
        }

        Ok(response
            .into_body()
            .collect()
            .await
            .map_err(DidCheqdError::TransportError)?
            .to_bytes())
    }

    pub async fn update_did(&self, _did_document: &DidDocument) -> DidCheqdResult<()> {
        Err(DidCheqdError::UnsupportedOperation("update"))
    }

    pub async fn deactivate_did(&self, _did: &Did) -> DidCheqdResult<()> {
        Err(DidCheqdError::UnsupportedOperation("deactivate"))
    }
}
