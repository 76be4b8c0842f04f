use chrono::{TimeZone, Utc};
use querylog_decoder::decode_line;
use querylog_domain::ClientProto;

#[test]
fn test_decode_basic_record() {
    let decoded = decode_line(r#"{"IP":"1.2.3.4","QH":"example.com","QT":"A"}"#);
    assert_eq!(decoded.diagnostic, None);
    assert_eq!(decoded.entry.client_ip, "1.2.3.4");
    assert_eq!(decoded.entry.qhost, "example.com");
    assert_eq!(decoded.entry.qtype, "A");
}

#[test]
fn test_decode_first_address_wins() {
    let decoded = decode_line(r#"{"IP":"1.1.1.1","IP":"2.2.2.2"}"#);
    assert_eq!(decoded.diagnostic, None);
    assert_eq!(decoded.entry.client_ip, "1.1.1.1");
}

#[test]
fn test_decode_bad_timestamp_aborts_record() {
    let decoded = decode_line(r#"{"T":"not-a-time"}"#);
    assert!(decoded.diagnostic.is_some());
    assert_eq!(decoded.entry.time, None);
}

#[test]
fn test_decode_timestamp() {
    let decoded = decode_line(r#"{"T":"2024-06-01T12:00:00Z"}"#);
    assert_eq!(decoded.diagnostic, None);
    assert_eq!(
        decoded.entry.time,
        Some(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap())
    );
}

#[test]
fn test_decode_timestamp_alias_normalizes_offset() {
    let decoded = decode_line(r#"{"Time":"2024-06-01T12:00:00+02:00"}"#);
    assert_eq!(
        decoded.entry.time,
        Some(Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap())
    );
}

#[test]
fn test_decode_first_timestamp_wins_across_aliases() {
    let decoded =
        decode_line(r#"{"T":"2024-06-01T12:00:00Z","Time":"2030-01-01T00:00:00Z"}"#);
    assert_eq!(decoded.diagnostic, None);
    assert_eq!(
        decoded.entry.time,
        Some(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap())
    );
}

#[test]
fn test_decode_later_timestamp_alias_ignored_even_if_malformed() {
    // Once the field is set, later occurrences are not even parsed.
    let decoded = decode_line(r#"{"T":"2024-06-01T12:00:00Z","Time":"garbage"}"#);
    assert_eq!(decoded.diagnostic, None);
    assert!(decoded.entry.time.is_some());
}

#[test]
fn test_decode_elapsed_exact() {
    let decoded = decode_line(r#"{"Elapsed":123456789}"#);
    assert_eq!(decoded.diagnostic, None);
    assert_eq!(decoded.entry.elapsed_ns, 123_456_789);
}

#[test]
fn test_decode_elapsed_beyond_f64_mantissa() {
    // 2^53 + 1 would be rounded by any float round-trip.
    let decoded = decode_line(r#"{"Elapsed":9007199254740993}"#);
    assert_eq!(decoded.entry.elapsed_ns, 9_007_199_254_740_993);
}

#[test]
fn test_decode_bad_numeral_aborts_record() {
    let decoded = decode_line(r#"{"FilterID":1e5,"QH":"late.example"}"#);
    assert!(decoded.diagnostic.is_some());
    assert_eq!(decoded.entry.result.filter_id, 0);
    assert_eq!(decoded.entry.qhost, "");
}

#[test]
fn test_decode_unknown_keys_do_not_change_outcome() {
    let plain = decode_line(r#"{"IP":"1.2.3.4","QH":"a.com"}"#);
    let noisy = decode_line(
        r#"{"Fresh":42,"IP":"1.2.3.4","Nested":{"Deep":true},"QH":"a.com","Tail":"x"}"#,
    );
    assert_eq!(noisy.diagnostic, None);
    assert_eq!(noisy.entry, plain.entry);
}

#[test]
fn test_decode_type_mismatch_is_ignored() {
    // IsFiltered expects a boolean; a string leaves it at the zero value
    // and does not stop later keys from being applied.
    let decoded = decode_line(r#"{"IsFiltered":"yes","QH":"example.com"}"#);
    assert_eq!(decoded.diagnostic, None);
    assert!(!decoded.entry.result.is_filtered);
    assert_eq!(decoded.entry.qhost, "example.com");
}

#[test]
fn test_decode_value_error_keeps_earlier_fields_only() {
    let decoded = decode_line(r#"{"QH":"example.com","CP":"bogus","IP":"1.2.3.4"}"#);
    assert!(decoded.diagnostic.is_some());
    assert_eq!(decoded.entry.qhost, "example.com");
    assert_eq!(decoded.entry.client_proto, ClientProto::Plain);
    assert_eq!(decoded.entry.client_ip, "");
}

#[test]
fn test_decode_client_proto() {
    let decoded = decode_line(r#"{"CP":"doh"}"#);
    assert_eq!(decoded.entry.client_proto, ClientProto::Doh);

    let decoded = decode_line(r#"{"CP":""}"#);
    assert_eq!(decoded.diagnostic, None);
    assert_eq!(decoded.entry.client_proto, ClientProto::Plain);
}

#[test]
fn test_decode_answer_base64() {
    let decoded = decode_line(r#"{"Answer":"AAEC","OrigAnswer":"/w=="}"#);
    assert_eq!(decoded.diagnostic, None);
    assert_eq!(decoded.entry.answer, vec![0, 1, 2]);
    assert_eq!(decoded.entry.orig_answer, vec![0xFF]);
}

#[test]
fn test_decode_bad_base64_aborts_record() {
    let decoded = decode_line(r#"{"Answer":"%%%","IP":"1.2.3.4"}"#);
    assert!(decoded.diagnostic.is_some());
    assert!(decoded.entry.answer.is_empty());
    assert_eq!(decoded.entry.client_ip, "");
}

#[test]
fn test_decode_filtering_fields() {
    let decoded = decode_line(
        r#"{"IsFiltered":true,"Rule":"||ads.example^","FilterID":3,"Reason":3,"ServiceName":"ads"}"#,
    );
    assert_eq!(decoded.diagnostic, None);
    assert!(decoded.entry.result.is_filtered);
    assert_eq!(decoded.entry.result.rule, "||ads.example^");
    assert_eq!(decoded.entry.result.filter_id, 3);
    assert_eq!(decoded.entry.result.reason, 3);
    assert_eq!(decoded.entry.result.service_name, "ads");
}

#[test]
fn test_decode_nested_result_object_flattens() {
    // Older versions wrote filtering fields under a "Result" object. The
    // key itself is a recognized no-op; the nested keys are picked up by
    // the flat scan.
    let decoded = decode_line(r#"{"Result":{"IsFiltered":true,"Reason":3},"QH":"a.com"}"#);
    assert_eq!(decoded.diagnostic, None);
    assert!(decoded.entry.result.is_filtered);
    assert_eq!(decoded.entry.result.reason, 3);
    assert_eq!(decoded.entry.qhost, "a.com");
}

#[test]
fn test_decode_upstream() {
    let decoded = decode_line(r#"{"Upstream":"tls://dns.example:853"}"#);
    assert_eq!(decoded.entry.upstream, "tls://dns.example:853");
}

#[test]
fn test_decode_non_string_key_aborts_record() {
    let decoded = decode_line(r#"{"IP":"1.2.3.4",42:"x"}"#);
    assert!(decoded.diagnostic.is_some());
    assert_eq!(decoded.entry.client_ip, "1.2.3.4");
}

#[test]
fn test_decode_unreadable_text_yields_empty_entry() {
    let decoded = decode_line("@@@@");
    assert!(decoded.diagnostic.is_some());
    assert_eq!(decoded.entry, Default::default());
}

#[test]
fn test_decode_empty_input_is_success() {
    let decoded = decode_line("");
    assert_eq!(decoded.diagnostic, None);
    assert_eq!(decoded.entry, Default::default());
}

#[test]
fn test_decode_is_deterministic() {
    let line = r#"{"IP":"1.2.3.4","QH":"example.com","QT":"A","Elapsed":77}"#;
    let first = decode_line(line);
    let second = decode_line(line);
    assert_eq!(first.entry, second.entry);
    assert_eq!(first.diagnostic, second.diagnostic);
}
