use super::*;

#[test]
fn ask_endpoint_appends_path() {
    assert_eq!(ask_endpoint("http://localhost:8000"), "http://localhost:8000/ask");
}

#[test]
fn ask_endpoint_does_not_double_slash() {
    assert_eq!(ask_endpoint("https://hr.example.com/api/"), "https://hr.example.com/api/ask");
}

#[test]
fn parse_ask_response_accepts_minimal_body() {
    let resp = parse_ask_response(r#"{"answer": "line one\nline two"}"#).unwrap();
    assert_eq!(resp.answer, "line one\nline two");
}

#[test]
fn parse_ask_response_rejects_malformed_json() {
    let err = parse_ask_response("<html>502 Bad Gateway</html>").unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
    assert_eq!(err.user_message(), "Failed to get answer. Please try again.");
}
