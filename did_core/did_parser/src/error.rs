use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    InvalidInput(&'static str),
}

impl std::error::Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::InvalidInput(reason) => write!(f, "Invalid input: {}", reason),
        }
    }
}
