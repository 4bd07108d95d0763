use std::collections::HashMap;

use chrono::{DateTime, Utc};
use did_resolver::{
    did_doc::schema::{types::context::ContextEntry, utils::OneOrList},
    shared_types::{did_document_metadata::DidDocumentMetadata, media_type::MediaType},
    traits::resolvable::resolution_metadata::DidResolutionMetadata,
};
use log::warn;
use serde::Serialize;
use serde_json::Value;

use super::{
    configuration::AuthenticationShape,
    envelope::{
        EnvelopeDocument, EnvelopeDocumentMetadata, EnvelopeMethodEntry,
        EnvelopeResolutionMetadata, EnvelopeService, EnvelopeVerificationMethod,
    },
};
use crate::error::parsing::ParsingErrorSource;

/// Envelope document re-typed to the canonical DID document layout, ready to be serialized and
/// handed to `parse_document`.
#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(super) struct CanonicalDocument {
    #[serde(rename = "@context")]
    context: Vec<ContextEntry>,
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    controller: Option<OneOrList<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    also_known_as: Vec<String>,
    verification_method: Vec<EnvelopeVerificationMethod>,
    authentication: Vec<EnvelopeMethodEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    assertion_method: Vec<EnvelopeMethodEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    key_agreement: Vec<EnvelopeMethodEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    capability_invocation: Vec<EnvelopeMethodEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    capability_delegation: Vec<EnvelopeMethodEntry>,
    service: Vec<EnvelopeService>,
    #[serde(flatten, skip_serializing_if = "HashMap::is_empty")]
    extra: HashMap<String, Value>,
}

pub(super) fn project_document(
    document: EnvelopeDocument,
    shape: AuthenticationShape,
) -> Result<CanonicalDocument, ParsingErrorSource> {
    let EnvelopeDocument {
        context,
        id,
        controller,
        also_known_as,
        mut verification_method,
        authentication,
        assertion_method,
        key_agreement,
        capability_invocation,
        capability_delegation,
        service,
        extra,
    } = document;

    for method in &verification_method {
        check_key_material(method)?;
    }

    let inline: Vec<EnvelopeVerificationMethod> = [
        &authentication,
        &assertion_method,
        &key_agreement,
        &capability_invocation,
        &capability_delegation,
    ]
    .into_iter()
    .flatten()
    .filter_map(|entry| match entry {
        EnvelopeMethodEntry::Embedded(method) => Some(method.clone()),
        EnvelopeMethodEntry::Reference(_) => None,
    })
    .collect();

    let mut normalize = |entries: Vec<EnvelopeMethodEntry>| {
        normalize_relationship(&id, &mut verification_method, &inline, entries, shape)
    };
    let authentication = normalize(authentication)?;
    let assertion_method = normalize(assertion_method)?;
    let key_agreement = normalize(key_agreement)?;
    let capability_invocation = normalize(capability_invocation)?;
    let capability_delegation = normalize(capability_delegation)?;

    Ok(CanonicalDocument {
        context: match context {
            OneOrList::One(entry) => vec![entry],
            OneOrList::List(entries) => entries,
        },
        id,
        controller,
        also_known_as,
        verification_method,
        authentication,
        assertion_method,
        key_agreement,
        capability_invocation,
        capability_delegation,
        service,
        extra,
    })
}

fn check_key_material(method: &EnvelopeVerificationMethod) -> Result<(), ParsingErrorSource> {
    match method.key_material_count() {
        1 => Ok(()),
        0 => Err(ParsingErrorSource::EnvelopeError(format!(
            "Verification method {} carries no public key material",
            method.id
        ))),
        _ => Err(ParsingErrorSource::EnvelopeError(format!(
            "Verification method {} carries more than one public key representation",
            method.id
        ))),
    }
}

// Relative references ("#key-1") are matched against the document subject.
fn same_method_id(subject: &str, a: &str, b: &str) -> bool {
    let absolute = |id: &str| {
        if id.starts_with('#') {
            format!("{subject}{id}")
        } else {
            id.to_string()
        }
    };
    a == b || absolute(a) == absolute(b)
}

fn normalize_relationship(
    subject: &str,
    listed: &mut Vec<EnvelopeVerificationMethod>,
    inline: &[EnvelopeVerificationMethod],
    entries: Vec<EnvelopeMethodEntry>,
    shape: AuthenticationShape,
) -> Result<Vec<EnvelopeMethodEntry>, ParsingErrorSource> {
    entries
        .into_iter()
        .map(|entry| match (shape, entry) {
            (AuthenticationShape::References, EnvelopeMethodEntry::Reference(reference)) => {
                Ok(EnvelopeMethodEntry::Reference(reference))
            }
            (AuthenticationShape::References, EnvelopeMethodEntry::Embedded(method)) => {
                check_key_material(&method)?;
                match listed
                    .iter()
                    .position(|known| same_method_id(subject, &known.id, &method.id))
                {
                    Some(index) if !listed[index].same_key_as(&method) => {
                        Err(ParsingErrorSource::EnvelopeError(format!(
                            "Inline verification method {} conflicts with the listed method of \
                             the same id",
                            method.id
                        )))
                    }
                    Some(index) => Ok(EnvelopeMethodEntry::Reference(listed[index].id.clone())),
                    None => {
                        let reference = method.id.clone();
                        listed.push(method);
                        Ok(EnvelopeMethodEntry::Reference(reference))
                    }
                }
            }
            (AuthenticationShape::Embedded, EnvelopeMethodEntry::Reference(reference)) => listed
                .iter()
                .chain(inline)
                .find(|known| same_method_id(subject, &known.id, &reference))
                .map(|known| EnvelopeMethodEntry::Embedded(known.clone()))
                .ok_or_else(|| {
                    ParsingErrorSource::EnvelopeError(format!(
                        "Reference {reference} does not match any verification method"
                    ))
                }),
            (AuthenticationShape::Embedded, EnvelopeMethodEntry::Embedded(method)) => {
                check_key_material(&method)?;
                Ok(EnvelopeMethodEntry::Embedded(method))
            }
        })
        .collect()
}

fn parse_timestamp(field: &str, value: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(value) {
        Ok(timestamp) => Some(timestamp.with_timezone(&Utc)),
        Err(err) => {
            warn!("Ignoring unparseable document metadata {field} {value:?}: {err}");
            None
        }
    }
}

impl From<EnvelopeDocumentMetadata> for DidDocumentMetadata {
    fn from(metadata: EnvelopeDocumentMetadata) -> Self {
        let mut builder = DidDocumentMetadata::builder();
        if let Some(created) = metadata
            .created
            .as_deref()
            .and_then(|value| parse_timestamp("created", value))
        {
            builder = builder.created(created);
        }
        if let Some(updated) = metadata
            .updated
            .as_deref()
            .and_then(|value| parse_timestamp("updated", value))
        {
            builder = builder.updated(updated);
        }
        if let Some(deactivated) = metadata.deactivated {
            builder = builder.deactivated(deactivated);
        }
        if let Some(version_id) = metadata.version_id {
            builder = builder.version_id(version_id);
        }
        if let Some(next_version_id) = metadata.next_version_id {
            builder = builder.next_version_id(next_version_id);
        }
        builder.build()
    }
}

impl From<EnvelopeResolutionMetadata> for DidResolutionMetadata {
    fn from(metadata: EnvelopeResolutionMetadata) -> Self {
        let content_type = metadata
            .content_type
            .and_then(|content_type| match content_type.parse::<MediaType>() {
                Ok(media_type) => Some(media_type),
                Err(err) => {
                    warn!("Ignoring resolution metadata content type: {err}");
                    None
                }
            });
        match content_type {
            Some(content_type) => DidResolutionMetadata::builder()
                .content_type(content_type)
                .build(),
            None => DidResolutionMetadata::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use super::*;

    const DID: &str = "did:cheqd:mainnet:zF7rhDBfUt9d1gJPjx7s1JXfUY7oVWkY";

    fn key1() -> Value {
        json!({
            "id": format!("{DID}#key1"),
            "type": "Ed25519VerificationKey2020",
            "controller": DID,
            "publicKeyMultibase": "z4BWwfeqdp1obQptLLMvPNgBw48p7og1ie6Hf9p5nTpNN"
        })
    }

    fn document(authentication: Value, verification_method: Value) -> EnvelopeDocument {
        serde_json::from_value(json!({
            "@context": "https://www.w3.org/ns/did/v1",
            "id": DID,
            "verificationMethod": verification_method,
            "authentication": authentication,
            "service": []
        }))
        .unwrap()
    }

    fn project(document: EnvelopeDocument, shape: AuthenticationShape) -> Value {
        serde_json::to_value(project_document(document, shape).unwrap()).unwrap()
    }

    #[test]
    fn test_references_are_kept() {
        let projected = project(
            document(json!([format!("{DID}#key1")]), json!([key1()])),
            AuthenticationShape::References,
        );
        assert_eq!(
            projected,
            json!({
                "@context": ["https://www.w3.org/ns/did/v1"],
                "id": DID,
                "verificationMethod": [key1()],
                "authentication": [format!("{DID}#key1")],
                "service": []
            })
        );
    }

    #[test]
    fn test_inline_method_becomes_reference() {
        let projected = project(
            document(json!([key1()]), json!([])),
            AuthenticationShape::References,
        );
        assert_eq!(projected["verificationMethod"], json!([key1()]));
        assert_eq!(projected["authentication"], json!([format!("{DID}#key1")]));
    }

    #[test]
    fn test_inline_method_already_listed_is_not_duplicated() {
        let projected = project(
            document(json!([key1()]), json!([key1()])),
            AuthenticationShape::References,
        );
        assert_eq!(projected["verificationMethod"], json!([key1()]));
        assert_eq!(projected["authentication"], json!([format!("{DID}#key1")]));
    }

    #[test]
    fn test_relative_inline_method_matches_listed_method() {
        let mut relative = key1();
        relative["id"] = json!("#key1");

        let projected = project(
            document(json!([relative]), json!([key1()])),
            AuthenticationShape::References,
        );
        assert_eq!(projected["verificationMethod"], json!([key1()]));
        assert_eq!(projected["authentication"], json!([format!("{DID}#key1")]));
    }

    #[test]
    fn test_conflicting_inline_method_is_rejected() {
        let mut conflicting = key1();
        conflicting["publicKeyMultibase"] =
            json!("z6MkszZtxCmA2Ce4vUV132PCuLQmwnaDD5mw2L23fGNnsiX3");
        let result = project_document(
            document(json!([conflicting]), json!([key1()])),
            AuthenticationShape::References,
        );
        assert!(matches!(result, Err(ParsingErrorSource::EnvelopeError(_))));
    }

    #[test]
    fn test_references_are_embedded() {
        let projected = project(
            document(json!(["#key1"]), json!([key1()])),
            AuthenticationShape::Embedded,
        );
        assert_eq!(projected["authentication"], json!([key1()]));
        assert_eq!(projected["verificationMethod"], json!([key1()]));
    }

    #[test]
    fn test_reference_to_inline_method_is_embedded() {
        let mut document = document(json!([key1()]), json!([]));
        document.assertion_method = vec![EnvelopeMethodEntry::Reference("#key1".to_string())];

        let projected = project(document, AuthenticationShape::Embedded);
        assert_eq!(projected["verificationMethod"], json!([]));
        assert_eq!(projected["authentication"], json!([key1()]));
        assert_eq!(projected["assertionMethod"], json!([key1()]));
    }

    #[test]
    fn test_dangling_reference_cannot_be_embedded() {
        let result = project_document(
            document(json!([format!("{DID}#key2")]), json!([key1()])),
            AuthenticationShape::Embedded,
        );
        assert!(matches!(result, Err(ParsingErrorSource::EnvelopeError(_))));
    }

    #[test]
    fn test_method_without_key_material_is_rejected() {
        let mut method = key1();
        method.as_object_mut().unwrap().remove("publicKeyMultibase");
        let result = project_document(
            document(json!([]), json!([method])),
            AuthenticationShape::References,
        );
        assert!(matches!(result, Err(ParsingErrorSource::EnvelopeError(_))));
    }

    #[test]
    fn test_method_with_two_key_representations_is_rejected() {
        let mut method = key1();
        method["publicKeyBase58"] = json!("8HH5gYEeNc3z7PYXmd54d4x6qAfCNrqQqEB3nS7Zfu7K");
        let result = project_document(
            document(json!([]), json!([method])),
            AuthenticationShape::References,
        );
        assert!(matches!(result, Err(ParsingErrorSource::EnvelopeError(_))));
    }

    #[test]
    fn test_inline_context_and_extra_properties_are_carried() {
        let mut document = document(json!([]), json!([key1()]));
        document.context = OneOrList::List(vec![
            "https://www.w3.org/ns/did/v1".into(),
            serde_json::from_value(json!({ "@base": DID })).unwrap(),
        ]);
        document.extra.insert("deactivated".to_string(), json!(false));

        let projected = project(document, AuthenticationShape::References);
        assert_eq!(
            projected["@context"],
            json!(["https://www.w3.org/ns/did/v1", { "@base": DID }])
        );
        assert_eq!(projected["deactivated"], json!(false));
    }

    #[test]
    fn test_empty_arrays_stay_present() {
        let projected = project(document(json!([]), json!([])), AuthenticationShape::References);
        assert_eq!(projected["verificationMethod"], json!([]));
        assert_eq!(projected["authentication"], json!([]));
        assert_eq!(projected["service"], json!([]));
        assert!(projected.get("assertionMethod").is_none());
    }

    #[test]
    fn test_document_metadata_conversion() {
        let metadata = DidDocumentMetadata::from(EnvelopeDocumentMetadata {
            created: Some("2022-04-05T11:49:19Z".to_string()),
            updated: Some("not a timestamp".to_string()),
            deactivated: Some(false),
            version_id: Some("4fa8e367-c70e-533e-babf-3732d9761061".to_string()),
            next_version_id: None,
        });
        assert_eq!(
            metadata.created().map(|created| created.to_rfc3339()),
            Some("2022-04-05T11:49:19+00:00".to_string())
        );
        assert_eq!(metadata.updated(), None);
        assert_eq!(metadata.deactivated(), Some(false));
        assert_eq!(
            metadata.version_id().map(String::as_str),
            Some("4fa8e367-c70e-533e-babf-3732d9761061")
        );
        assert_eq!(metadata.next_version_id(), None);
    }

    #[test]
    fn test_resolution_metadata_conversion() {
        let metadata = DidResolutionMetadata::from(EnvelopeResolutionMetadata {
            content_type: Some("application/did+ld+json".to_string()),
            ..Default::default()
        });
        assert_eq!(metadata.content_type(), Some(&MediaType::DidLdJson));

        let metadata = DidResolutionMetadata::from(EnvelopeResolutionMetadata {
            content_type: Some("text/html".to_string()),
            ..Default::default()
        });
        assert_eq!(metadata.content_type(), None);
    }
}
