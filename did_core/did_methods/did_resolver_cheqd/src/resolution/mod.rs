pub mod configuration;
pub mod envelope;
pub mod resolver;
mod transformer;
pub mod transport;

pub use configuration::{
    AuthenticationShape, DidCheqdResolverConfiguration, EndpointJoin, MethodMatcher,
};
pub use resolver::DidCheqdResolver;
pub use transport::{HttpTransport, HyperTransport, TransportBody};
