/// Pull the value of `"name":"value"` out of raw record text with a literal
/// substring scan, without tokenizing.
///
/// This is a pre-filter heuristic for deciding whether a line is worth a
/// full decode, nothing more: it does not understand escaped quotes inside
/// the value, does not disambiguate a name that is a suffix of a longer
/// key, and returns only the first occurrence. The token-scanning decoder
/// is the only authoritative reading of a record.
pub fn extract_string_field<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    let pattern = format!("\"{name}\":\"");
    let start = text.find(&pattern)? + pattern.len();
    let len = text[start..].find('"')?;
    Some(&text[start..start + len])
}
