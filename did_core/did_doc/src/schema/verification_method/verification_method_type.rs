use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerificationMethodType {
    /// https://w3id.org/security/suites/jws-2020/v1
    JsonWebKey2020,
    /// https://w3id.org/security/suites/secp256k1-2019/v1
    EcdsaSecp256k1VerificationKey2019,
    /// https://w3id.org/security/suites/ed25519-2018/v1
    Ed25519VerificationKey2018,
    /// https://w3id.org/security/suites/ed25519-2020/v1
    Ed25519VerificationKey2020,
    /// https://w3c.github.io/vc-di-bbs/contexts/v1/
    Bls12381G1Key2020,
    /// https://w3c.github.io/vc-di-bbs/contexts/v1/
    Bls12381G2Key2020,
    PgpVerificationKey2021,
    RsaVerificationKey2018,
    /// https://ns.did.ai/suites/x25519-2019/v1/
    X25519KeyAgreementKey2019,
    /// https://ns.did.ai/suites/x25519-2020/v1/
    X25519KeyAgreementKey2020,
    EcdsaSecp256k1RecoveryMethod2020,
    /// https://w3id.org/security/multikey/v1
    Multikey,
}

impl Display for VerificationMethodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // serialized form is the bare variant name
        write!(f, "{:?}", self)
    }
}
