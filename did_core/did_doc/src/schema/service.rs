use std::collections::HashMap;

use did_parser::DidUrl;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use typed_builder::TypedBuilder;

use super::{types::uri::Uri, utils::OneOrList};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    id: DidUrl,
    #[serde(rename = "type")]
    service_type: OneOrList<String>,
    service_endpoint: OneOrList<Uri>,
    #[builder(default)]
    #[serde(flatten)]
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    extra: HashMap<String, Value>,
}

impl Service {
    pub fn id(&self) -> &DidUrl {
        &self.id
    }

    pub fn service_type(&self) -> &OneOrList<String> {
        &self.service_type
    }

    pub fn service_endpoint(&self) -> &OneOrList<Uri> {
        &self.service_endpoint
    }

    pub fn extra_field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}
