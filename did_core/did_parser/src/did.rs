use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    error::ParseError,
    utils::parse::{parse_did_method_id, parse_namespace},
    DidRange,
};

/// A DID without path, query or fragment, e.g. `did:cheqd:mainnet:zF7rhDBfUt9d1gJPjx7s1JXfUY7oVWkY`.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Did {
    did: String,
    method: DidRange,
    namespace: Option<DidRange>,
    id: DidRange,
}

impl Did {
    pub fn parse(did: String) -> Result<Self, ParseError> {
        let (did_range, method, id) = parse_did_method_id(&did)?;

        if did_range.end != did.len() {
            return Err(ParseError::InvalidInput(
                "DID cannot contain a path, query or fragment",
            ));
        }

        let namespace = parse_namespace(&did, &id);

        Ok(Self {
            did,
            method,
            namespace,
            id,
        })
    }

    pub fn did(&self) -> &str {
        self.did.as_ref()
    }

    pub fn method(&self) -> &str {
        self.did[self.method.clone()].as_ref()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.clone().map(|range| &self.did[range])
    }

    /// The method-specific id, including the namespace if there is one.
    pub fn id(&self) -> &str {
        self.did[self.id.clone()].as_ref()
    }

    pub(crate) fn from_parts(
        did: String,
        method: DidRange,
        namespace: Option<DidRange>,
        id: DidRange,
    ) -> Self {
        Self {
            did,
            method,
            namespace,
            id,
        }
    }
}

impl TryFrom<String> for Did {
    type Error = ParseError;

    fn try_from(did: String) -> Result<Self, Self::Error> {
        Self::parse(did)
    }
}

impl FromStr for Did {
    type Err = ParseError;

    fn from_str(did: &str) -> Result<Self, Self::Err> {
        Self::parse(did.to_string())
    }
}

impl Display for Did {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.did)
    }
}

impl Serialize for Did {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.did())
    }
}

impl<'de> Deserialize<'de> for Did {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let did = String::deserialize(deserializer)?;
        Self::parse(did).map_err(serde::de::Error::custom)
    }
}
