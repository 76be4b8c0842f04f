use crate::client_proto::ClientProto;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One decoded query-log record.
///
/// An entry is allocated empty (`Default`), mutated only while its line is
/// being decoded, and never mutated after it is returned. Fields the record
/// never mentions keep their zero value, so a partially decoded entry is
/// still usable.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LogEntry {
    /// Client address as written in the record.
    pub client_ip: String,
    /// Query timestamp; `None` when the record carried no parseable time.
    pub time: Option<DateTime<Utc>>,
    /// Queried name, without the trailing root dot.
    pub qhost: String,
    /// Query type mnemonic ("A", "AAAA", ...); empty for unknown codes.
    pub qtype: String,
    /// Query class mnemonic ("IN", ...); empty for unknown codes.
    pub qclass: String,
    /// Transport protocol the client used.
    pub client_proto: ClientProto,
    /// Raw wire-format answer bytes.
    pub answer: Vec<u8>,
    /// Raw wire-format answer before filtering rewrote it.
    pub orig_answer: Vec<u8>,
    /// Upstream resolution time in whole nanoseconds. Parsed from the
    /// decimal numeral text, never through a float.
    pub elapsed_ns: i64,
    /// Upstream server that answered the query.
    pub upstream: String,
    /// Filtering outcome attached to the query.
    pub result: FilterResult,
}

/// Filtering outcome fields. Written in records either nested under a
/// `Result` object or flattened at the top level; the decoder accepts both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterResult {
    pub is_filtered: bool,
    /// Text of the rule that matched, if any.
    pub rule: String,
    pub filter_id: i64,
    /// Block reason code.
    pub reason: i64,
    /// Blocked-service name, if the query matched one.
    pub service_name: String,
}
