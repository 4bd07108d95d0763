pub mod method_handler;
pub mod resolvable;
