use std::{collections::HashMap, fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    error::ParseError,
    utils::parse::{parse_did_method_id, parse_namespace, parse_path, parse_query},
    Did, DidRange,
};

/// An absolute (`did:example:123#key-1`) or relative (`#key-1`) DID URL.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
pub struct DidUrl {
    did_url: String,
    did: Option<DidRange>,
    method: Option<DidRange>,
    id: Option<DidRange>,
    path: Option<DidRange>,
    query: Option<DidRange>,
    fragment: Option<DidRange>,
}

impl DidUrl {
    pub fn parse(did_url: String) -> Result<Self, ParseError> {
        let (did, method, id) =
            if did_url.starts_with('#') || did_url.starts_with('/') || did_url.starts_with('?') {
                (None, None, None)
            } else {
                let (did, method, id) = parse_did_method_id(&did_url)?;
                (Some(did), Some(method), Some(id))
            };

        let mut path = None;
        let mut query = None;
        let mut fragment = None;

        let mut current_pos = id.as_ref().map_or(0, |id| id.end);

        while current_pos < did_url.len() {
            match did_url[current_pos..].chars().next() {
                Some('/') if path.is_none() && query.is_none() => {
                    let range = parse_path(&did_url, current_pos)?;
                    current_pos = range.end;
                    path = Some(range);
                }
                Some('?') if query.is_none() => {
                    let range = parse_query(&did_url, current_pos)?;
                    current_pos = range.end;
                    query = Some(range);
                }
                Some('#') => {
                    if current_pos + 1 == did_url.len() {
                        return Err(ParseError::InvalidInput("Empty fragment"));
                    }
                    fragment = Some(current_pos + 1..did_url.len());
                    current_pos = did_url.len();
                }
                _ => return Err(ParseError::InvalidInput("Unexpected character in DID URL")),
            };
        }

        if did.is_none() && path.is_none() && query.is_none() && fragment.is_none() {
            return Err(ParseError::InvalidInput("Empty DID URL"));
        }

        Ok(DidUrl {
            did_url,
            did,
            method,
            id,
            path,
            query,
            fragment,
        })
    }

    pub fn did_url(&self) -> &str {
        self.did_url.as_ref()
    }

    pub fn did(&self) -> Option<&str> {
        self.did.clone().map(|range| &self.did_url[range])
    }

    pub fn method(&self) -> Option<&str> {
        self.method.clone().map(|range| &self.did_url[range])
    }

    pub fn id(&self) -> Option<&str> {
        self.id.clone().map(|range| &self.did_url[range])
    }

    pub fn path(&self) -> Option<&str> {
        self.path.clone().map(|range| &self.did_url[range])
    }

    pub fn queries(&self) -> HashMap<String, String> {
        self.query
            .clone()
            .map(|range| {
                self.did_url[range]
                    .split('&')
                    .filter_map(|pair| pair.split_once('='))
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.clone().map(|range| &self.did_url[range])
    }

    pub fn is_relative(&self) -> bool {
        self.did.is_none()
    }

    pub fn from_fragment(fragment: String) -> Result<Self, ParseError> {
        Self::parse(format!("#{}", fragment))
    }
}

impl TryFrom<String> for DidUrl {
    type Error = ParseError;

    fn try_from(did_url: String) -> Result<Self, Self::Error> {
        Self::parse(did_url)
    }
}

impl FromStr for DidUrl {
    type Err = ParseError;

    fn from_str(did_url: &str) -> Result<Self, Self::Err> {
        Self::parse(did_url.to_string())
    }
}

impl Display for DidUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.did_url)
    }
}

impl Serialize for DidUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.did_url)
    }
}

impl<'de> Deserialize<'de> for DidUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let did_url = String::deserialize(deserializer)?;
        DidUrl::parse(did_url).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<&DidUrl> for Did {
    type Error = ParseError;

    fn try_from(did_url: &DidUrl) -> Result<Self, Self::Error> {
        match (did_url.did(), &did_url.method, &did_url.id) {
            (Some(did), Some(method), Some(id)) => {
                let did = did.to_string();
                let namespace = parse_namespace(&did, id);
                Ok(Did::from_parts(did, method.clone(), namespace, id.clone()))
            }
            _ => Err(ParseError::InvalidInput(
                "Unable to construct a DID from relative DID URL",
            )),
        }
    }
}
