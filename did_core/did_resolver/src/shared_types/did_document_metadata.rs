use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
pub struct DidDocumentMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deactivated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_version_id: Option<String>,
}

impl DidDocumentMetadata {
    pub fn builder() -> DidDocumentMetadataBuilder {
        DidDocumentMetadataBuilder::default()
    }

    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.created
    }

    pub fn updated(&self) -> Option<DateTime<Utc>> {
        self.updated
    }

    pub fn deactivated(&self) -> Option<bool> {
        self.deactivated
    }

    pub fn version_id(&self) -> Option<&String> {
        self.version_id.as_ref()
    }

    pub fn next_version_id(&self) -> Option<&String> {
        self.next_version_id.as_ref()
    }
}

#[derive(Default)]
pub struct DidDocumentMetadataBuilder {
    created: Option<DateTime<Utc>>,
    updated: Option<DateTime<Utc>>,
    deactivated: Option<bool>,
    version_id: Option<String>,
    next_version_id: Option<String>,
}

impl DidDocumentMetadataBuilder {
    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    pub fn updated(mut self, updated: DateTime<Utc>) -> Self {
        self.updated = Some(updated);
        self
    }

    pub fn deactivated(mut self, deactivated: bool) -> Self {
        self.deactivated = Some(deactivated);
        self
    }

    pub fn version_id(mut self, version_id: String) -> Self {
        self.version_id = Some(version_id);
        self
    }

    pub fn next_version_id(mut self, next_version_id: String) -> Self {
        self.next_version_id = Some(next_version_id);
        self
    }

    pub fn build(self) -> DidDocumentMetadata {
        DidDocumentMetadata {
            created: self.created,
            updated: self.updated,
            deactivated: self.deactivated,
            version_id: self.version_id,
            next_version_id: self.next_version_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_builder_and_serialization() {
        let created = Utc.with_ymd_and_hms(2022, 4, 5, 11, 49, 19).unwrap();
        let metadata = DidDocumentMetadata::builder()
            .created(created)
            .version_id("4fa8e367-c70e-533e-babf-3732d9761061".to_string())
            .build();

        assert_eq!(metadata.created(), Some(created));
        assert_eq!(metadata.deactivated(), None);
        assert_eq!(
            serde_json::to_value(&metadata).unwrap(),
            serde_json::json!({
                "created": "2022-04-05T11:49:19Z",
                "versionId": "4fa8e367-c70e-533e-babf-3732d9761061"
            })
        );
    }

    #[test]
    fn test_default_serializes_empty() {
        assert_eq!(
            serde_json::to_value(DidDocumentMetadata::default()).unwrap(),
            serde_json::json!({})
        );
    }
}
