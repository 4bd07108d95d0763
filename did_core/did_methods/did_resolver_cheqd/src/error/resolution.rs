use did_resolver::traits::resolvable::{
    resolution_error::DidResolutionError, resolution_metadata::DidResolutionMetadata,
};
use hyper::StatusCode;

use super::DidCheqdError;

impl From<&DidCheqdError> for DidResolutionError {
    fn from(err: &DidCheqdError) -> Self {
        match err {
            DidCheqdError::RemoteError(StatusCode::NOT_FOUND) => DidResolutionError::NotFound,
            DidCheqdError::RemoteError(StatusCode::NOT_ACCEPTABLE) => {
                DidResolutionError::RepresentationNotSupported
            }
            DidCheqdError::MethodNotSupported(_) => DidResolutionError::MethodNotSupported,
            DidCheqdError::InvalidDid(_) => DidResolutionError::InvalidDid,
            _ => DidResolutionError::InternalError,
        }
    }
}

impl From<&DidCheqdError> for DidResolutionMetadata {
    fn from(err: &DidCheqdError) -> Self {
        DidResolutionMetadata::builder().error(err.into()).build()
    }
}
