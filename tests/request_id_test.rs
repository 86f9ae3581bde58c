use axum::http::{HeaderMap, HeaderValue};

use medlingo::infrastructure::observability::{REQUEST_ID_HEADER, RequestId};

fn headers_with(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(REQUEST_ID_HEADER, HeaderValue::from_str(value).unwrap());
    headers
}

#[test]
fn given_well_formed_header_when_reading_request_id_then_keeps_it() {
    let request_id = RequestId::from_headers(&headers_with("consult-42")).unwrap();

    assert_eq!(request_id.as_str(), "consult-42");
}

#[test]
fn given_missing_header_when_reading_request_id_then_returns_none() {
    assert!(RequestId::from_headers(&HeaderMap::new()).is_none());
}

#[test]
fn given_overlong_header_when_reading_request_id_then_ignores_it() {
    let value = "a".repeat(129);

    assert!(RequestId::from_headers(&headers_with(&value)).is_none());
}

#[test]
fn given_header_with_spaces_when_reading_request_id_then_ignores_it() {
    assert!(RequestId::from_headers(&headers_with("drop table")).is_none());
}

#[test]
fn given_generated_ids_when_compared_then_they_differ() {
    let first = RequestId::generate();
    let second = RequestId::generate();

    assert_ne!(first, second);
    assert_eq!(first.as_str().len(), 36);
}
