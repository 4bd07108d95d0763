mod public_key;
mod verification_method_kind;
mod verification_method_type;

use did_parser::{Did, DidUrl};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

pub use self::{
    public_key::PublicKeyField, verification_method_kind::VerificationMethodKind,
    verification_method_type::VerificationMethodType,
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct VerificationMethod {
    id: DidUrl,
    controller: Did,
    #[serde(rename = "type")]
    verification_method_type: VerificationMethodType,
    #[serde(flatten)]
    public_key: PublicKeyField,
}

impl VerificationMethod {
    pub fn id(&self) -> &DidUrl {
        &self.id
    }

    pub fn controller(&self) -> &Did {
        &self.controller
    }

    pub fn verification_method_type(&self) -> &VerificationMethodType {
        &self.verification_method_type
    }

    pub fn public_key_field(&self) -> &PublicKeyField {
        &self.public_key
    }
}
