use async_trait::async_trait;
use bytes::Bytes;
use did_resolver::error::GenericError;
use http_body_util::{combinators::BoxBody, BodyExt, Empty};
use hyper::{Request, Response};
use hyper_tls::HttpsConnector;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};

pub type TransportBody = BoxBody<Bytes, GenericError>;

type HyperClient = Client<HttpsConnector<HttpConnector>, Empty<Bytes>>;

/// Sends a single request to the resolver endpoint. The response body is left unread.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(
        &self,
        request: Request<Empty<Bytes>>,
    ) -> Result<Response<TransportBody>, GenericError>;
}

/// Pooled hyper client speaking both `http` and `https` (native TLS).
#[derive(Clone, Debug)]
pub struct HyperTransport {
    client: HyperClient,
}

impl HyperTransport {
    pub fn new() -> Result<Self, native_tls::Error> {
        let tls = native_tls::TlsConnector::new()?;
        let mut http = HttpConnector::new();
        http.enforce_http(false);
        let connector = HttpsConnector::from((http, tls.into()));

        Ok(Self {
            client: Client::builder(TokioExecutor::new()).build(connector),
        })
    }
}

#[async_trait]
impl HttpTransport for HyperTransport {
    async fn send(
        &self,
        request: Request<Empty<Bytes>>,
    ) -> Result<Response<TransportBody>, GenericError> {
        let response = self.client.request(request).await?;
        Ok(response.map(|body| body.map_err(|err| Box::new(err) as GenericError).boxed()))
    }
}
