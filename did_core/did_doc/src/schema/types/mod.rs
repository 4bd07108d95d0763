pub mod context;
pub mod uri;
