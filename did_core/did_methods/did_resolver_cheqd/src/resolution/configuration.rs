use std::{collections::BTreeSet, fmt, sync::Arc};

use typed_builder::TypedBuilder;

/// Public cheqd DID resolver, expecting the DID to be appended verbatim.
pub const DEFAULT_RESOLVER_ENDPOINT: &str = "https://resolver.cheqd.net/1.0/identifiers/";
pub const CHEQD_METHOD: &str = "cheqd";

type MethodPredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Decides which DID methods a resolver instance serves.
#[derive(Clone)]
pub enum MethodMatcher {
    Exact(String),
    AnyOf(BTreeSet<String>),
    Custom {
        /// Shown in logs and `Debug` output in place of the closure.
        name: String,
        predicate: MethodPredicate,
    },
}

impl MethodMatcher {
    pub fn exact(method: impl Into<String>) -> Self {
        Self::Exact(method.into())
    }

    pub fn any_of<I, S>(methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::AnyOf(methods.into_iter().map(Into::into).collect())
    }

    pub fn custom<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::Custom {
            name: name.into(),
            predicate: Arc::new(predicate),
        }
    }

    pub fn matches(&self, method: &str) -> bool {
        match self {
            Self::Exact(expected) => expected == method,
            Self::AnyOf(methods) => methods.contains(method),
            Self::Custom { predicate, .. } => predicate(method),
        }
    }
}

impl Default for MethodMatcher {
    fn default() -> Self {
        Self::exact(CHEQD_METHOD)
    }
}

impl fmt::Debug for MethodMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(method) => f.debug_tuple("Exact").field(method).finish(),
            Self::AnyOf(methods) => f.debug_tuple("AnyOf").field(methods).finish(),
            Self::Custom { name, .. } => f.debug_struct("Custom").field("name", name).finish(),
        }
    }
}

/// How the DID is appended to the resolver endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EndpointJoin {
    /// `<endpoint><did>`; the endpoint is expected to end with `/`.
    #[default]
    Concatenate,
    /// `<endpoint>/<did>`, with exactly one `/` between the two.
    PathSeparator,
}

impl EndpointJoin {
    pub fn join(&self, endpoint: &str, did: &str) -> String {
        match self {
            Self::Concatenate => format!("{endpoint}{did}"),
            Self::PathSeparator => format!("{}/{did}", endpoint.trim_end_matches('/')),
        }
    }
}

/// Shape of the `authentication` entries in the produced document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthenticationShape {
    /// Entries are DID URLs pointing into `verificationMethod`.
    #[default]
    References,
    /// Entries are full verification methods.
    Embedded,
}

#[derive(Clone, TypedBuilder)]
pub struct DidCheqdResolverConfiguration {
    #[builder(default = DEFAULT_RESOLVER_ENDPOINT.to_string(), setter(into))]
    endpoint: String,
    #[builder(default, setter(strip_option, into))]
    auth_token: Option<String>,
    #[builder(default)]
    method_matcher: MethodMatcher,
    #[builder(default)]
    endpoint_join: EndpointJoin,
    #[builder(default)]
    authentication_shape: AuthenticationShape,
}

impl DidCheqdResolverConfiguration {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::builder().endpoint(endpoint).build()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    pub fn method_matcher(&self) -> &MethodMatcher {
        &self.method_matcher
    }

    pub fn endpoint_join(&self) -> EndpointJoin {
        self.endpoint_join
    }

    pub fn authentication_shape(&self) -> AuthenticationShape {
        self.authentication_shape
    }
}

impl Default for DidCheqdResolverConfiguration {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Debug for DidCheqdResolverConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DidCheqdResolverConfiguration")
            .field("endpoint", &self.endpoint)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "<redacted>"))
            .field("method_matcher", &self.method_matcher)
            .field("endpoint_join", &self.endpoint_join)
            .field("authentication_shape", &self.authentication_shape)
            .finish()
    }
}
