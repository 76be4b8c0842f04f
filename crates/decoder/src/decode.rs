use crate::handlers::HANDLERS;
use crate::scanner::{Token, TokenScanner};
use querylog_domain::LogEntry;
use tracing::debug;

/// Outcome of decoding one record: the entry assembled so far and, when the
/// scan stopped early, a diagnostic saying why. The diagnostic is for
/// observability only; a partial entry is still a valid result.
#[derive(Debug)]
pub struct DecodedRecord {
    pub entry: LogEntry,
    pub diagnostic: Option<String>,
}

/// Decode one raw record line into a fresh entry.
pub fn decode_line(text: &str) -> DecodedRecord {
    let mut entry = LogEntry::default();
    let diagnostic = decode_log_entry(&mut entry, text);
    DecodedRecord { entry, diagnostic }
}

/// Decode one raw record into `entry`, flat-scanning its tokens.
///
/// Every key, recognized or not, consumes exactly one following value token,
/// so unknown newer-schema fields can never desynchronize the scan. Two
/// failure tiers apply per field: a value token of the wrong kind is ignored
/// and the scan continues, while a value-level malformation stops the scan
/// at that point. Either way the caller gets back whatever was assembled.
pub fn decode_log_entry(entry: &mut LogEntry, text: &str) -> Option<String> {
    let mut scanner = TokenScanner::new(text);
    loop {
        let key = match scanner.next() {
            None => return None,
            Some(Err(err)) => {
                let diag = format!("decode_log_entry: {err}");
                debug!("{diag}");
                return Some(diag);
            }
            Some(Ok(Token::Delim(_))) => continue,
            Some(Ok(Token::Str(key))) => key,
            Some(Ok(token)) => {
                let diag = format!("decode_log_entry: key token is {token:?}, not a string");
                debug!("{diag}");
                return Some(diag);
            }
        };

        let value = match scanner.next() {
            Some(Ok(value)) => value,
            None | Some(Err(_)) => return None,
        };

        let Some(handler) = HANDLERS.get(key.as_str()) else {
            // Unknown key: its value token is already consumed, drop it.
            continue;
        };

        if let Err(err) = handler(&value, entry) {
            let diag = format!("decode_log_entry: {key}: {err}");
            debug!("{diag}");
            return Some(diag);
        }
    }
}
