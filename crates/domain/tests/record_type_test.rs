use dnsock_domain::{DomainError, RecordType, RRSIG_TYPE_CODE};
use std::str::FromStr;

#[test]
fn test_record_type_parse_is_case_insensitive() {
    assert_eq!(RecordType::from_str("a").unwrap(), RecordType::A);
    assert_eq!(RecordType::from_str("Aaaa").unwrap(), RecordType::AAAA);
    assert_eq!(RecordType::from_str("txt").unwrap(), RecordType::TXT);
}

#[test]
fn test_record_type_unknown_is_unsupported() {
    let err = RecordType::from_str("BOGUS").unwrap_err();
    assert!(matches!(err, DomainError::UnsupportedRecordType(ref t) if t == "BOGUS"));
}

#[test]
fn test_record_type_display_round_trips() {
    for record_type in RecordType::all() {
        let parsed = RecordType::from_str(&record_type.to_string()).unwrap();
        assert_eq!(parsed, record_type);
    }
}

#[test]
fn test_record_type_wire_codes() {
    assert_eq!(RecordType::A.to_u16(), 1);
    assert_eq!(RecordType::AAAA.to_u16(), 28);
    assert_eq!(RecordType::CAA.to_u16(), 257);
    assert_eq!(RRSIG_TYPE_CODE, 46);
}

#[test]
fn test_record_type_is_supported() {
    assert!(RecordType::is_supported("mx"));
    assert!(!RecordType::is_supported("RRSIG"));
}
