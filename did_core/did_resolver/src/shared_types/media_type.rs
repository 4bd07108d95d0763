use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaType {
    #[serde(rename = "application/did+json")]
    DidJson,
    #[serde(rename = "application/did+ld+json")]
    DidLdJson,
    #[serde(rename = "application/ld+json")]
    LdJson,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::DidJson => "application/did+json",
            MediaType::DidLdJson => "application/did+ld+json",
            MediaType::LdJson => "application/ld+json",
        }
    }
}

impl Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // parameters such as `;profile=...` do not change the representation
        match s.split(';').next().map(str::trim) {
            Some("application/did+json") => Ok(MediaType::DidJson),
            Some("application/did+ld+json") => Ok(MediaType::DidLdJson),
            Some("application/ld+json") => Ok(MediaType::LdJson),
            _ => Err(format!("Unsupported media type: {}", s)),
        }
    }
}
