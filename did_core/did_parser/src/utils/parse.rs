use crate::{error::ParseError, DidRange};

const DID_SCHEME: &str = "did";

fn is_did_url_delimiter(c: char) -> bool {
    c == '/' || c == '?' || c == '#'
}

fn find_method_start_and_end(did_url: &str) -> Result<(usize, usize), ParseError> {
    // did = "did:" method-name ":" method-specific-id
    let method_start = did_url
        .find(':')
        .ok_or(ParseError::InvalidInput("Failed to find method start"))?;
    if &did_url[..method_start] != DID_SCHEME {
        return Err(ParseError::InvalidInput("Invalid scheme"));
    }
    let method_end = did_url[method_start + 1..]
        .find(':')
        .map(|i| i + method_start + 1)
        .ok_or(ParseError::InvalidInput("Failed to find method end"))?;

    Ok((method_start, method_end))
}

fn validate_method(method: &str) -> Result<(), ParseError> {
    // method-char = %x61-7A / DIGIT
    if method.is_empty() {
        return Err(ParseError::InvalidInput("Empty method name"));
    }
    if !method
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    {
        return Err(ParseError::InvalidInput("Invalid characters in method name"));
    }
    Ok(())
}

fn validate_id(id: &str) -> Result<(), ParseError> {
    // method-specific-id = *( *idchar ":" ) 1*idchar
    if id.is_empty() {
        return Err(ParseError::InvalidInput("Empty method-specific-id"));
    }
    if id.ends_with(':') {
        return Err(ParseError::InvalidInput(
            "Method-specific-id cannot end with ':'",
        ));
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || ".-_%:".contains(c))
    {
        return Err(ParseError::InvalidInput(
            "Invalid characters in method-specific-id",
        ));
    }
    Ok(())
}

/// Returns the ranges of the whole DID, the method name and the method-specific id.
pub(crate) fn parse_did_method_id(
    did_url: &str,
) -> Result<(DidRange, DidRange, DidRange), ParseError> {
    let (method_start, method_end) = find_method_start_and_end(did_url)?;
    let method_range = method_start + 1..method_end;
    validate_method(&did_url[method_range.clone()])?;

    let id_start = method_end + 1;
    let id_end = did_url[id_start..]
        .find(is_did_url_delimiter)
        .map_or(did_url.len(), |i| i + id_start);
    let id_range = id_start..id_end;
    validate_id(&did_url[id_range.clone()])?;

    Ok((0..id_end, method_range, id_range))
}

/// The namespace is the first colon-delimited segment of a method-specific id
/// that has more than one segment, e.g. `mainnet` in `did:cheqd:mainnet:zF7r`.
pub(crate) fn parse_namespace(did: &str, id: &DidRange) -> Option<DidRange> {
    did[id.clone()]
        .find(':')
        .map(|i| id.start..id.start + i)
}

pub(crate) fn parse_path(did_url: &str, current_pos: usize) -> Result<DidRange, ParseError> {
    if !did_url[current_pos..].starts_with('/') {
        return Err(ParseError::InvalidInput("Path must start with '/'"));
    }
    let path_end = did_url[current_pos..]
        .find(|c: char| c == '?' || c == '#')
        .map_or(did_url.len(), |i| i + current_pos);

    if path_end - current_pos <= 1 {
        return Err(ParseError::InvalidInput("Empty path"));
    }

    Ok(current_pos..path_end)
}

pub(crate) fn parse_query(did_url: &str, current_pos: usize) -> Result<DidRange, ParseError> {
    let query_start = current_pos + 1;
    let query_end = did_url[query_start..]
        .find('#')
        .map_or(did_url.len(), |i| i + query_start);

    if query_start == query_end {
        return Err(ParseError::InvalidInput("Empty query"));
    }
    for pair in did_url[query_start..query_end].split('&') {
        match pair.split_once('=') {
            Some((key, value)) if !key.is_empty() && !value.is_empty() => {}
            _ => return Err(ParseError::InvalidInput("Malformed query key value pair")),
        }
    }

    Ok(query_start..query_end)
}
