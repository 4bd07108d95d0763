pub extern crate did_doc;
pub extern crate did_parser;

pub mod error;
pub mod shared_types;
pub mod traits;
