//! Resolver for [did:cheqd](https://docs.cheqd.io/product/architecture/adr-list/adr-001-cheqd-did-method)
//! DIDs that delegates to a remote HTTP DID resolver, such as the public
//! `https://resolver.cheqd.net/1.0/identifiers/`.
//!
//! The remote resolver answers `GET <endpoint><did>` with a resolution envelope
//! (`didDocument`, `didDocumentMetadata`, `didResolutionMetadata`). The envelope's document is
//! projected onto the canonical [`did_resolver::did_doc`] shape and validated by
//! [`did_resolver::did_doc::parse_document`] before being handed back.
//!
//! The resolver is read-only: updates and deactivations must go through the cheqd network's own
//! transactions and are always rejected here.

pub mod error;
pub mod resolution;
