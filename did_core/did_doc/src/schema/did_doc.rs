use std::{collections::HashMap, fmt::Display};

use did_parser::{Did, DidUrl};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    service::Service,
    types::{context::ContextEntry, uri::Uri},
    utils::OneOrList,
    verification_method::{VerificationMethod, VerificationMethodKind},
};
use crate::error::DidDocumentError;

pub const DID_V1_CONTEXT: &str = "https://www.w3.org/ns/did/v1";
const DID_V1_CONTEXT_LEGACY: &str = "https://w3id.org/did/v1";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
pub struct DidDocument {
    #[serde(rename = "@context")]
    #[serde(skip_serializing_if = "OneOrList::is_empty")]
    context: OneOrList<ContextEntry>,
    id: Did,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    also_known_as: Vec<Uri>,
    #[serde(skip_serializing_if = "Option::is_none")]
    controller: Option<OneOrList<Did>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    verification_method: Vec<VerificationMethod>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    authentication: Vec<VerificationMethodKind>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    assertion_method: Vec<VerificationMethodKind>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    key_agreement: Vec<VerificationMethodKind>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    capability_invocation: Vec<VerificationMethodKind>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    capability_delegation: Vec<VerificationMethodKind>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    service: Vec<Service>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

impl DidDocument {
    pub fn new(id: Did) -> Self {
        DidDocument {
            id,
            ..Default::default()
        }
    }

    pub fn context(&self) -> &[ContextEntry] {
        self.context.as_slice()
    }

    pub fn id(&self) -> &Did {
        &self.id
    }

    pub fn also_known_as(&self) -> &[Uri] {
        self.also_known_as.as_ref()
    }

    pub fn controller(&self) -> Option<&OneOrList<Did>> {
        self.controller.as_ref()
    }

    pub fn verification_method(&self) -> &[VerificationMethod] {
        self.verification_method.as_ref()
    }

    pub fn authentication(&self) -> &[VerificationMethodKind] {
        self.authentication.as_ref()
    }

    pub fn assertion_method(&self) -> &[VerificationMethodKind] {
        self.assertion_method.as_ref()
    }

    pub fn key_agreement(&self) -> &[VerificationMethodKind] {
        self.key_agreement.as_ref()
    }

    pub fn capability_invocation(&self) -> &[VerificationMethodKind] {
        self.capability_invocation.as_ref()
    }

    pub fn capability_delegation(&self) -> &[VerificationMethodKind] {
        self.capability_delegation.as_ref()
    }

    pub fn service(&self) -> &[Service] {
        self.service.as_ref()
    }

    pub fn extra_field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    pub fn set_context<C>(&mut self, context: Vec<C>)
    where
        C: Into<ContextEntry>,
    {
        self.context = OneOrList::List(context.into_iter().map(Into::into).collect());
    }

    pub fn set_controller(&mut self, controller: OneOrList<Did>) {
        self.controller = Some(controller);
    }

    pub fn set_also_known_as(&mut self, also_known_as: Vec<Uri>) {
        self.also_known_as = also_known_as;
    }

    pub fn add_verification_method(&mut self, method: VerificationMethod) {
        self.verification_method.push(method);
    }

    pub fn add_authentication_object(&mut self, method: VerificationMethod) {
        self.authentication
            .push(VerificationMethodKind::Resolved(method));
    }

    pub fn add_authentication_ref(&mut self, reference: DidUrl) {
        self.authentication
            .push(VerificationMethodKind::Resolvable(reference));
    }

    pub fn add_assertion_method_ref(&mut self, reference: DidUrl) {
        self.assertion_method
            .push(VerificationMethodKind::Resolvable(reference));
    }

    pub fn add_key_agreement_ref(&mut self, reference: DidUrl) {
        self.key_agreement
            .push(VerificationMethodKind::Resolvable(reference));
    }

    pub fn add_capability_invocation_ref(&mut self, reference: DidUrl) {
        self.capability_invocation
            .push(VerificationMethodKind::Resolvable(reference));
    }

    pub fn add_capability_delegation_ref(&mut self, reference: DidUrl) {
        self.capability_delegation
            .push(VerificationMethodKind::Resolvable(reference));
    }

    pub fn add_service(&mut self, service: Service) {
        self.service.push(service);
    }

    pub fn set_extra_field(&mut self, key: String, value: Value) {
        self.extra.insert(key, value);
    }

    /// Finds the verification method a DID URL points at. Relative ids (`#key-1`) are taken to
    /// be relative to the document subject.
    pub fn dereference_key(&self, reference: &DidUrl) -> Option<&VerificationMethod> {
        self.verification_method
            .iter()
            .find(|vm| vm.id() == reference || self.same_key_id(vm.id(), reference))
    }

    /// Authentication entries with every reference replaced by the method it points at.
    pub fn resolved_authentication(&self) -> Result<Vec<&VerificationMethod>, DidDocumentError> {
        self.resolve_relationship(&self.authentication)
    }

    pub fn resolve_relationship<'a>(
        &'a self,
        relationship: &'a [VerificationMethodKind],
    ) -> Result<Vec<&'a VerificationMethod>, DidDocumentError> {
        relationship
            .iter()
            .map(|kind| match kind {
                VerificationMethodKind::Resolved(vm) => Ok(vm),
                VerificationMethodKind::Resolvable(reference) => self
                    .dereference_key(reference)
                    .ok_or_else(|| DidDocumentError::UnresolvedReference(reference.clone())),
            })
            .collect()
    }

    pub fn validate(&self) -> Result<(), DidDocumentError> {
        if self.id.did().is_empty() {
            return Err(DidDocumentError::MissingField("id"));
        }

        let base_context = self
            .context
            .first()
            .ok_or(DidDocumentError::MissingField("@context"))?;
        if base_context != DID_V1_CONTEXT && base_context != DID_V1_CONTEXT_LEGACY {
            return Err(DidDocumentError::UnsupportedContext(base_context.to_string()));
        }

        for (index, vm) in self.verification_method.iter().enumerate() {
            if self.verification_method[..index]
                .iter()
                .any(|other| self.same_key_id(other.id(), vm.id()))
            {
                return Err(DidDocumentError::DuplicateVerificationMethod(
                    vm.id().clone(),
                ));
            }
        }

        for relationship in [
            &self.authentication,
            &self.assertion_method,
            &self.key_agreement,
            &self.capability_invocation,
            &self.capability_delegation,
        ] {
            self.resolve_relationship(relationship)?;
        }

        Ok(())
    }

    fn same_key_id(&self, left: &DidUrl, right: &DidUrl) -> bool {
        let subject = self.id.did();
        left.fragment().is_some()
            && left.fragment() == right.fragment()
            && left.did().unwrap_or(subject) == right.did().unwrap_or(subject)
    }
}

impl Display for DidDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => write!(f, "{}", json),
            Err(e) => write!(f, "Error serializing DidDocument: {}", e),
        }
    }
}
