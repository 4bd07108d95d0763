//! Wire shape of a remote DID resolver response.
//!
//! The envelope mirrors what the resolver sends and is deliberately looser than
//! [`did_resolver::did_doc::schema::did_doc::DidDocument`]: identifiers are plain strings and
//! `authentication` entries may be either references or inline verification methods.

use std::collections::HashMap;

use did_resolver::did_doc::schema::{types::context::ContextEntry, utils::OneOrList};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionEnvelope {
    pub did_document: EnvelopeDocument,
    #[serde(default)]
    pub did_document_metadata: EnvelopeDocumentMetadata,
    #[serde(default)]
    pub did_resolution_metadata: EnvelopeResolutionMetadata,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeDocument {
    #[serde(rename = "@context", default)]
    pub context: OneOrList<ContextEntry>,
    pub id: String,
    #[serde(default)]
    pub controller: Option<OneOrList<String>>,
    #[serde(default)]
    pub also_known_as: Vec<String>,
    #[serde(default)]
    pub verification_method: Vec<EnvelopeVerificationMethod>,
    #[serde(default)]
    pub authentication: Vec<EnvelopeMethodEntry>,
    #[serde(default)]
    pub assertion_method: Vec<EnvelopeMethodEntry>,
    #[serde(default)]
    pub key_agreement: Vec<EnvelopeMethodEntry>,
    #[serde(default)]
    pub capability_invocation: Vec<EnvelopeMethodEntry>,
    #[serde(default)]
    pub capability_delegation: Vec<EnvelopeMethodEntry>,
    #[serde(default)]
    pub service: Vec<EnvelopeService>,
    /// Document properties without a dedicated field, carried through unchanged.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeVerificationMethod {
    pub id: String,
    #[serde(rename = "type")]
    pub verification_method_type: String,
    pub controller: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key_multibase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key_base58: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key_jwk: Option<Map<String, Value>>,
}

impl EnvelopeVerificationMethod {
    pub(crate) fn key_material_count(&self) -> usize {
        [
            self.public_key_multibase.is_some(),
            self.public_key_base58.is_some(),
            self.public_key_jwk.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    /// Same key material, type and controller, whatever form the id is written in.
    pub(crate) fn same_key_as(&self, other: &EnvelopeVerificationMethod) -> bool {
        self.verification_method_type == other.verification_method_type
            && self.controller == other.controller
            && self.public_key_multibase == other.public_key_multibase
            && self.public_key_base58 == other.public_key_base58
            && self.public_key_jwk == other.public_key_jwk
    }
}

/// Entry of a verification relationship such as `authentication`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum EnvelopeMethodEntry {
    Reference(String),
    Embedded(EnvelopeVerificationMethod),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeService {
    pub id: String,
    #[serde(rename = "type")]
    pub service_type: OneOrList<String>,
    pub service_endpoint: OneOrList<String>,
}

/// Timestamps are kept as received; conversion happens when building resolution output.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeDocumentMetadata {
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub updated: Option<String>,
    #[serde(default)]
    pub deactivated: Option<bool>,
    #[serde(default)]
    pub version_id: Option<String>,
    #[serde(default)]
    pub next_version_id: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeResolutionMetadata {
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub did: Option<EnvelopeDid>,
}

/// The DID the remote resolver reports having resolved.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeDid {
    pub did_string: String,
}
