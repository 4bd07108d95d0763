use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Public key material of a verification method. Exactly one representation is carried.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum PublicKeyField {
    #[serde(rename_all = "camelCase")]
    Multibase { public_key_multibase: String },
    #[serde(rename_all = "camelCase")]
    Jwk { public_key_jwk: Map<String, Value> },
    #[serde(rename_all = "camelCase")]
    Base58 { public_key_base58: String },
    #[serde(rename_all = "camelCase")]
    Base64 { public_key_base64: String },
    #[serde(rename_all = "camelCase")]
    Hex { public_key_hex: String },
    #[serde(rename_all = "camelCase")]
    Pem { public_key_pem: String },
}

impl PublicKeyField {
    /// The JSON property name this key material is carried under.
    pub fn property_name(&self) -> &'static str {
        match self {
            PublicKeyField::Multibase { .. } => "publicKeyMultibase",
            PublicKeyField::Jwk { .. } => "publicKeyJwk",
            PublicKeyField::Base58 { .. } => "publicKeyBase58",
            PublicKeyField::Base64 { .. } => "publicKeyBase64",
            PublicKeyField::Hex { .. } => "publicKeyHex",
            PublicKeyField::Pem { .. } => "publicKeyPem",
        }
    }
}
