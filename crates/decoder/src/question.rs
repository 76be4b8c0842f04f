use crate::handlers::decode_base64;
use hickory_proto::op::Message;
use querylog_domain::{DecodeError, LogEntry, QueryClass, RecordType};

/// Recover qhost/qtype/qclass from a legacy packed question: base64 text
/// wrapping a wire-format DNS query message.
///
/// Overwrites all three fields unconditionally, even when current-schema
/// keys already populated them earlier in the record. Any decode or unpack
/// failure aborts the enclosing record.
pub fn unpack_question(encoded: &str, entry: &mut LogEntry) -> Result<(), DecodeError> {
    let bytes = decode_base64(encoded)?;
    let message =
        Message::from_vec(&bytes).map_err(|e| DecodeError::MalformedQuestion(e.to_string()))?;
    let query = message
        .queries
        .first()
        .ok_or(DecodeError::EmptyQuestion)?;

    let fqdn = query.name().to_string();
    let host = fqdn.strip_suffix('.').unwrap_or(&fqdn);
    if host.is_empty() {
        // A bare root name carries nothing worth keeping; tolerated as-is.
        return Ok(());
    }

    entry.qhost = host.to_string();
    entry.qtype = RecordType::from_u16(u16::from(query.query_type()))
        .map(|t| t.as_str().to_string())
        .unwrap_or_default();
    entry.qclass = QueryClass::from_u16(u16::from(query.query_class()))
        .map(|c| c.as_str().to_string())
        .unwrap_or_default();
    Ok(())
}
