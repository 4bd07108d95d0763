pub extern crate did_parser;

pub mod error;
mod parsing;
pub mod schema;

pub use parsing::parse_document;
