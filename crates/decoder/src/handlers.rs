//! Static field dispatch table.
//!
//! One handler per recognized key name. A handler checks the value token's
//! concrete kind, converts it, and writes the target field. A kind mismatch
//! is not an error (schema drift across log versions merely changed value
//! types); a conversion failure is a [`DecodeError`] and aborts the record.
use crate::question::unpack_question;
use crate::scanner::Token;
use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, Utc};
use querylog_domain::{DecodeError, LogEntry};
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

pub type FieldHandler = fn(&Token, &mut LogEntry) -> Result<(), DecodeError>;

/// Built once, read-only afterwards; shared by any number of callers.
pub static HANDLERS: LazyLock<FxHashMap<&'static str, FieldHandler>> = LazyLock::new(|| {
    let entries: [(&'static str, FieldHandler); 18] = [
        ("IP", handle_ip),
        ("T", handle_time),
        ("Time", handle_time),
        ("QH", handle_qhost),
        ("QT", handle_qtype),
        ("QC", handle_qclass),
        ("CP", handle_client_proto),
        ("Answer", handle_answer),
        ("OrigAnswer", handle_orig_answer),
        ("IsFiltered", handle_is_filtered),
        ("Rule", handle_rule),
        ("FilterID", handle_filter_id),
        ("Reason", handle_reason),
        ("ServiceName", handle_service_name),
        ("Upstream", handle_upstream),
        ("Elapsed", handle_elapsed),
        ("Result", handle_result),
        ("Question", handle_question),
    ];
    entries.into_iter().collect()
});

fn handle_ip(token: &Token, entry: &mut LogEntry) -> Result<(), DecodeError> {
    if let Token::Str(v) = token {
        // Aliased across schema versions; the first applied value wins.
        if entry.client_ip.is_empty() {
            entry.client_ip = v.clone();
        }
    }
    Ok(())
}

// Shared by the legacy "T" and current "Time" keys.
fn handle_time(token: &Token, entry: &mut LogEntry) -> Result<(), DecodeError> {
    let Token::Str(v) = token else {
        return Ok(());
    };
    if entry.time.is_some() {
        return Ok(());
    }
    let parsed = DateTime::parse_from_rfc3339(v)
        .map_err(|e| DecodeError::InvalidTimestamp(format!("{v:?}: {e}")))?;
    entry.time = Some(parsed.with_timezone(&Utc));
    Ok(())
}

fn handle_qhost(token: &Token, entry: &mut LogEntry) -> Result<(), DecodeError> {
    if let Token::Str(v) = token {
        entry.qhost = v.clone();
    }
    Ok(())
}

fn handle_qtype(token: &Token, entry: &mut LogEntry) -> Result<(), DecodeError> {
    if let Token::Str(v) = token {
        entry.qtype = v.clone();
    }
    Ok(())
}

fn handle_qclass(token: &Token, entry: &mut LogEntry) -> Result<(), DecodeError> {
    if let Token::Str(v) = token {
        entry.qclass = v.clone();
    }
    Ok(())
}

fn handle_client_proto(token: &Token, entry: &mut LogEntry) -> Result<(), DecodeError> {
    if let Token::Str(v) = token {
        entry.client_proto = v.parse()?;
    }
    Ok(())
}

fn handle_answer(token: &Token, entry: &mut LogEntry) -> Result<(), DecodeError> {
    if let Token::Str(v) = token {
        entry.answer = decode_base64(v)?;
    }
    Ok(())
}

fn handle_orig_answer(token: &Token, entry: &mut LogEntry) -> Result<(), DecodeError> {
    if let Token::Str(v) = token {
        entry.orig_answer = decode_base64(v)?;
    }
    Ok(())
}

fn handle_is_filtered(token: &Token, entry: &mut LogEntry) -> Result<(), DecodeError> {
    if let Token::Bool(v) = token {
        entry.result.is_filtered = *v;
    }
    Ok(())
}

fn handle_rule(token: &Token, entry: &mut LogEntry) -> Result<(), DecodeError> {
    if let Token::Str(v) = token {
        entry.result.rule = v.clone();
    }
    Ok(())
}

fn handle_filter_id(token: &Token, entry: &mut LogEntry) -> Result<(), DecodeError> {
    if let Token::Number(v) = token {
        entry.result.filter_id = parse_i64(v)?;
    }
    Ok(())
}

fn handle_reason(token: &Token, entry: &mut LogEntry) -> Result<(), DecodeError> {
    if let Token::Number(v) = token {
        entry.result.reason = parse_i64(v)?;
    }
    Ok(())
}

fn handle_service_name(token: &Token, entry: &mut LogEntry) -> Result<(), DecodeError> {
    if let Token::Str(v) = token {
        entry.result.service_name = v.clone();
    }
    Ok(())
}

fn handle_upstream(token: &Token, entry: &mut LogEntry) -> Result<(), DecodeError> {
    if let Token::Str(v) = token {
        entry.upstream = v.clone();
    }
    Ok(())
}

fn handle_elapsed(token: &Token, entry: &mut LogEntry) -> Result<(), DecodeError> {
    if let Token::Number(v) = token {
        entry.elapsed_ns = parse_i64(v)?;
    }
    Ok(())
}

// "Result" is recognized purely so its payload flattens into the scan;
// the nested filtering fields carry their own globally unique keys.
fn handle_result(_token: &Token, _entry: &mut LogEntry) -> Result<(), DecodeError> {
    Ok(())
}

fn handle_question(token: &Token, entry: &mut LogEntry) -> Result<(), DecodeError> {
    if let Token::Str(v) = token {
        unpack_question(v, entry)?;
    }
    Ok(())
}

pub(crate) fn decode_base64(text: &str) -> Result<Vec<u8>, DecodeError> {
    STANDARD
        .decode(text)
        .map_err(|e| DecodeError::InvalidBase64(e.to_string()))
}

fn parse_i64(text: &str) -> Result<i64, DecodeError> {
    text.parse::<i64>()
        .map_err(|_| DecodeError::InvalidNumber(text.to_string()))
}
