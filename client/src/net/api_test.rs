use super::*;

#[test]
fn success_body_yields_test_cases_text() {
    let text = decode_generate_response(200, r#"{"testCases":"Test 1: ..."}"#).unwrap();
    assert_eq!(text, "Test 1: ...");
}

#[test]
fn success_text_keeps_whitespace() {
    let body = r#"{"testCases":"Test 1:\n  - status 200\n\nTest 2:\n  - status 404\n"}"#;
    let text = decode_generate_response(201, body).unwrap();
    assert_eq!(text, "Test 1:\n  - status 200\n\nTest 2:\n  - status 404\n");
}

#[test]
fn server_error_status_fails() {
    assert_eq!(decode_generate_response(500, "Internal Server Error"), Err(RequestFailed::Status(500)));
}

#[test]
fn non_2xx_fails_even_with_valid_body() {
    assert_eq!(decode_generate_response(404, r#"{"testCases":"stale"}"#), Err(RequestFailed::Status(404)));
    assert_eq!(decode_generate_response(302, r#"{"testCases":"stale"}"#), Err(RequestFailed::Status(302)));
    assert_eq!(decode_generate_response(199, ""), Err(RequestFailed::Status(199)));
}

#[test]
fn missing_field_yields_empty_text() {
    assert_eq!(decode_generate_response(200, "{}").unwrap(), "");
    assert_eq!(decode_generate_response(200, r#"{"testCases":null}"#).unwrap(), "");
    assert_eq!(decode_generate_response(200, r#"{"testCases":""}"#).unwrap(), "");
}

#[test]
fn empty_body_yields_empty_text() {
    assert_eq!(decode_generate_response(204, "").unwrap(), "");
    assert_eq!(decode_generate_response(200, "  \n").unwrap(), "");
}

#[test]
fn malformed_body_fails_with_decode() {
    let err = decode_generate_response(200, "<html>oops</html>").unwrap_err();
    assert!(matches!(err, RequestFailed::Decode(_)));
}

#[test]
fn non_object_json_fails_with_decode() {
    assert!(matches!(decode_generate_response(200, "[]"), Err(RequestFailed::Decode(_))));
    assert!(matches!(decode_generate_response(200, r#"{"testCases":7}"#), Err(RequestFailed::Decode(_))));
}

#[test]
fn request_failed_messages_name_the_cause() {
    assert_eq!(RequestFailed::Status(503).to_string(), "unexpected status: 503");
    assert_eq!(RequestFailed::Transport("offline".to_owned()).to_string(), "transport error: offline");
    assert_eq!(RequestFailed::Unavailable.to_string(), "not available on server");
}

#[test]
fn generate_is_unavailable_outside_browser() {
    let result = futures::executor::block_on(generate_test_cases("http://localhost:5000/generate-test-cases"));
    assert_eq!(result, Err(RequestFailed::Unavailable));
}
