/// Query string as ordered key/value pairs.
///
/// Repeated keys are kept, so lookups take the first occurrence rather than
/// rejecting the request.
pub type QueryPairs = Vec<(String, String)>;

/// First value given for `key`, if any.
pub fn first_param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}
