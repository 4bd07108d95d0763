pub const MAINNET_DID: &str = "did:cheqd:mainnet:zF7rhDBfUt9d1gJPjx7s1JXfUY7oVWkY";

pub const MAINNET_ENVELOPE: &str = r##"{
  "@context": "https://w3id.org/did-resolution/v1",
  "didResolutionMetadata": {
    "contentType": "application/did+ld+json",
    "retrieved": "2022-10-04T09:33:12Z",
    "did": {
      "didString": "did:cheqd:mainnet:zF7rhDBfUt9d1gJPjx7s1JXfUY7oVWkY",
      "methodSpecificId": "zF7rhDBfUt9d1gJPjx7s1JXfUY7oVWkY",
      "method": "cheqd"
    }
  },
  "didDocument": {
    "@context": ["https://www.w3.org/ns/did/v1"],
    "id": "did:cheqd:mainnet:zF7rhDBfUt9d1gJPjx7s1JXfUY7oVWkY",
    "verificationMethod": [
      {
        "id": "did:cheqd:mainnet:zF7rhDBfUt9d1gJPjx7s1JXfUY7oVWkY#key1",
        "type": "Ed25519VerificationKey2020",
        "controller": "did:cheqd:mainnet:zF7rhDBfUt9d1gJPjx7s1JXfUY7oVWkY",
        "publicKeyMultibase": "z4BWwfeqdp1obQptLLMvPNgBw48p7og1ie6Hf9p5nTpNN"
      }
    ],
    "authentication": [
      "did:cheqd:mainnet:zF7rhDBfUt9d1gJPjx7s1JXfUY7oVWkY#key1"
    ],
    "service": [
      {
        "id": "did:cheqd:mainnet:zF7rhDBfUt9d1gJPjx7s1JXfUY7oVWkY#website",
        "type": "LinkedDomains",
        "serviceEndpoint": "https://www.cheqd.io"
      }
    ]
  },
  "didDocumentMetadata": {
    "created": "2022-04-05T11:49:19Z",
    "versionId": "4fa8e367-c70e-533e-babf-3732d9761061",
    "linkedResourceMetadata": []
  }
}"##;

pub const TESTNET_DID: &str = "did:cheqd:testnet:55dbc8bf-fba3-4117-855c-1e0dc1d3bb47";

// Inline authentication and a JWK key, as some resolver deployments return.
pub const TESTNET_ENVELOPE: &str = r##"{
  "didDocument": {
    "@context": [
      "https://www.w3.org/ns/did/v1",
      "https://w3id.org/security/suites/jws-2020/v1"
    ],
    "id": "did:cheqd:testnet:55dbc8bf-fba3-4117-855c-1e0dc1d3bb47",
    "controller": ["did:cheqd:testnet:55dbc8bf-fba3-4117-855c-1e0dc1d3bb47"],
    "verificationMethod": [],
    "authentication": [
      {
        "id": "did:cheqd:testnet:55dbc8bf-fba3-4117-855c-1e0dc1d3bb47#key-1",
        "type": "JsonWebKey2020",
        "controller": "did:cheqd:testnet:55dbc8bf-fba3-4117-855c-1e0dc1d3bb47",
        "publicKeyJwk": {
          "kty": "OKP",
          "crv": "Ed25519",
          "x": "11qYAYKxCrfVS_7TyWQHOg7hcvPapiMlrwIaaPcHURo"
        }
      }
    ],
    "assertionMethod": ["#key-1"],
    "service": [
      {
        "id": "did:cheqd:testnet:55dbc8bf-fba3-4117-855c-1e0dc1d3bb47#agents",
        "type": ["DIDCommMessaging", "LinkedDomains"],
        "serviceEndpoint": ["https://agents.example.com", "https://backup.example.com"]
      }
    ]
  },
  "didDocumentMetadata": {
    "created": "2023-01-10T08:00:00Z",
    "updated": "2023-02-10T08:00:00Z",
    "deactivated": false,
    "versionId": "0b7a5d4e-2f44-4a1c-9ad8-5a4b9c6e1f00"
  }
}"##;
