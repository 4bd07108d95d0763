use serde::{Deserialize, Serialize};

use super::resolution_error::DidResolutionError;
use crate::shared_types::media_type::MediaType;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
pub struct DidResolutionMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    content_type: Option<MediaType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<DidResolutionError>,
}

impl DidResolutionMetadata {
    pub fn builder() -> DidResolutionMetadataBuilder {
        DidResolutionMetadataBuilder::default()
    }

    pub fn content_type(&self) -> Option<&MediaType> {
        self.content_type.as_ref()
    }

    pub fn error(&self) -> Option<&DidResolutionError> {
        self.error.as_ref()
    }
}

#[derive(Default)]
pub struct DidResolutionMetadataBuilder {
    content_type: Option<MediaType>,
    error: Option<DidResolutionError>,
}

impl DidResolutionMetadataBuilder {
    pub fn content_type(mut self, content_type: MediaType) -> Self {
        self.content_type = Some(content_type);
        self
    }

    pub fn error(mut self, error: DidResolutionError) -> Self {
        self.error = Some(error);
        self
    }

    pub fn build(self) -> DidResolutionMetadata {
        DidResolutionMetadata {
            content_type: self.content_type,
            error: self.error,
        }
    }
}
