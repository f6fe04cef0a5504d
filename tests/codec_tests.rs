//! Codec Tests
//!
//! Tests for command encoding and response decoding.

use std::io::Cursor;

use advlock::protocol::{
    decode_response, encode_command, encode_handshake, read_response, write_command, Command,
    Status,
};
use advlock::AdvlockError;

// =============================================================================
// Command Encoding Tests
// =============================================================================

#[test]
fn test_encode_set() {
    let encoded = encode_command(&Command::set(b"mykey".as_slice()));
    assert_eq!(encoded, b"set mykey\n");
}

#[test]
fn test_encode_del() {
    let encoded = encode_command(&Command::del(b"mykey".as_slice()));
    assert_eq!(encoded, b"del mykey\n");
}

#[test]
fn test_encode_key_with_spaces() {
    // Keys are raw bytes; inner spaces pass through untouched
    let encoded = encode_command(&Command::set(b"two words".as_slice()));
    assert_eq!(encoded, b"set two words\n");
}

#[test]
fn test_encode_binary_key() {
    let key: Vec<u8> = vec![0x20, 0x7F, 0xFE, 0xFF];
    let encoded = encode_command(&Command::set(key.clone()));

    let mut expected = b"set ".to_vec();
    expected.extend_from_slice(&key);
    expected.push(b'\n');
    assert_eq!(encoded, expected);
}

#[test]
fn test_encode_handshake() {
    assert_eq!(encode_handshake(), b"0.1\n");
}

// =============================================================================
// Response Decoding Tests
// =============================================================================

#[test]
fn test_decode_ok() {
    let resp = decode_response(b"000,OK\n").unwrap();
    assert_eq!(resp.code, 0);
    assert_eq!(resp.message, "OK");
    assert_eq!(resp.status(), Status::Ok);
}

#[test]
fn test_decode_without_trailing_newline() {
    let resp = decode_response(b"001,Already acquired").unwrap();
    assert_eq!(resp.code, 1);
    assert_eq!(resp.message, "Already acquired");
    assert_eq!(resp.status(), Status::AlreadyAcquired);
}

#[test]
fn test_decode_leading_zeros() {
    let resp = decode_response(b"004,Not acquired\n").unwrap();
    assert_eq!(resp.code, 4);
    assert_eq!(resp.status(), Status::NotAcquired);
}

#[test]
fn test_decode_empty_message() {
    // The 3-digit-plus-comma prefix is the validation boundary;
    // nothing after the comma is still a well-formed line
    let resp = decode_response(b"000,\n").unwrap();
    assert_eq!(resp.code, 0);
    assert_eq!(resp.message, "");
}

#[test]
fn test_decode_all_codes_round_trip() {
    for code in 0..=999u16 {
        let line = format!("{:03},message", code);
        let resp = decode_response(line.as_bytes()).unwrap();
        assert_eq!(resp.code, code);
        assert_eq!(resp.message, "message");
    }
}

#[test]
fn test_decode_non_utf8_message() {
    // Message bytes outside UTF-8 decode lossily rather than failing
    let resp = decode_response(b"000,\xFF\xFE\n").unwrap();
    assert_eq!(resp.code, 0);
    assert!(!resp.message.is_empty());
}

// =============================================================================
// Malformed Response Tests
// =============================================================================

#[test]
fn test_decode_empty_line() {
    let result = decode_response(b"\n");
    assert!(matches!(result, Err(AdvlockError::Protocol(_))));
}

#[test]
fn test_decode_short_prefix() {
    let result = decode_response(b"00,OK\n");
    assert!(matches!(result, Err(AdvlockError::Protocol(_))));
}

#[test]
fn test_decode_long_prefix() {
    // Four digits push the comma out of position
    let result = decode_response(b"0000,OK\n");
    assert!(matches!(result, Err(AdvlockError::Protocol(_))));
}

#[test]
fn test_decode_missing_comma() {
    let result = decode_response(b"000 OK\n");
    assert!(matches!(result, Err(AdvlockError::Protocol(_))));
}

#[test]
fn test_decode_non_digit_code() {
    let result = decode_response(b"0a0,OK\n");
    assert!(matches!(result, Err(AdvlockError::Protocol(_))));
}

#[test]
fn test_decode_error_names_the_line() {
    let err = decode_response(b"garbage\n").unwrap_err();
    assert!(err.to_string().contains("malformed response"));
    assert!(err.to_string().contains("garbage"));
}

// =============================================================================
// Status Mapping Tests
// =============================================================================

#[test]
fn test_status_from_code() {
    assert_eq!(Status::from_code(0), Status::Ok);
    assert_eq!(Status::from_code(1), Status::AlreadyAcquired);
    assert_eq!(Status::from_code(2), Status::EmptyKey);
    assert_eq!(Status::from_code(3), Status::UnknownCommand);
    assert_eq!(Status::from_code(4), Status::NotAcquired);
    assert_eq!(Status::from_code(42), Status::Other(42));
}

#[test]
fn test_status_code_round_trip() {
    for code in [0u16, 1, 2, 3, 4, 5, 255, 999] {
        assert_eq!(Status::from_code(code).code(), code);
    }
}

#[test]
fn test_only_ok_is_ok() {
    assert!(Status::Ok.is_ok());
    assert!(!Status::AlreadyAcquired.is_ok());
    assert!(!Status::NotAcquired.is_ok());
    assert!(!Status::Other(0xBEEF).is_ok());
}

// =============================================================================
// Stream I/O Tests
// =============================================================================

#[test]
fn test_stream_write_command() {
    let mut buffer = Vec::new();
    write_command(&mut buffer, &Command::set(b"key".as_slice())).unwrap();
    assert_eq!(buffer, b"set key\n");
}

#[test]
fn test_stream_read_response() {
    let mut cursor = Cursor::new(b"000,OK\n".to_vec());
    let mut line_buf = Vec::new();
    let resp = read_response(&mut cursor, &mut line_buf).unwrap();
    assert_eq!(resp.code, 0);
    assert_eq!(resp.message, "OK");
}

#[test]
fn test_stream_read_multiple_responses() {
    let mut cursor = Cursor::new(b"000,OK\n001,Already acquired\n".to_vec());
    let mut line_buf = Vec::new();

    let first = read_response(&mut cursor, &mut line_buf).unwrap();
    assert_eq!(first.code, 0);

    let second = read_response(&mut cursor, &mut line_buf).unwrap();
    assert_eq!(second.code, 1);
    assert_eq!(second.message, "Already acquired");
}

#[test]
fn test_stream_read_empty_is_transport_error() {
    // No data at all means the peer closed: a transport failure,
    // not a parse failure
    let mut cursor = Cursor::new(Vec::new());
    let mut line_buf = Vec::new();
    let result = read_response(&mut cursor, &mut line_buf);
    assert!(matches!(result, Err(AdvlockError::Transport(_))));
}
