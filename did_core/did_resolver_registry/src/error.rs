use std::error::Error;

#[derive(Debug)]
pub enum DidResolverRegistryError {
    UnsupportedMethod(String),
}

impl std::fmt::Display for DidResolverRegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DidResolverRegistryError::UnsupportedMethod(method) => {
                write!(f, "Unsupported DID method: {}", method)
            }
        }
    }
}

impl Error for DidResolverRegistryError {}
