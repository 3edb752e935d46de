use std::collections::HashMap;

use http::Method;
use serde::Serialize;

use crate::client::RestClient;

fn headers(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

#[test]
fn empty_parameters_target_the_endpoint_exactly() {
    let client = RestClient::new("http://localhost:8080/api", Method::GET, None, None);
    assert_eq!(client.target(""), "http://localhost:8080/api");
}

#[test]
fn parameters_concatenate_without_a_separator() {
    let client = RestClient::new("http://localhost:8080/api", Method::GET, None, None);
    assert_eq!(client.target("?x=1"), "http://localhost:8080/api?x=1");
    assert_eq!(client.target("/items"), "http://localhost:8080/api/items");
}

#[test]
fn request_without_body_carries_only_request_headers() {
    let client = RestClient::new(
        "http://localhost:8080/api",
        Method::GET,
        Some(headers(&[
            ("X-Custom-Header", "test_validate_verify"),
            ("Accept", "*/*"),
        ])),
        None,
    );

    let request = client.build_request("http://localhost:8080/api/items").unwrap();

    assert_eq!(request.method(), Method::GET);
    assert_eq!(request.uri(), "http://localhost:8080/api/items");
    assert!(request.body().is_none());
    assert_eq!(request.headers().len(), 2);
    assert_eq!(
        request.headers()["X-Custom-Header"],
        "test_validate_verify"
    );
    assert_eq!(request.headers()["Accept"], "*/*");
}

#[test]
fn body_is_tagged_with_the_configured_content_type() {
    let mut client = RestClient::new("http://localhost:8080/api", Method::POST, None, None);
    client.body = "<note/>".to_string();
    client.content_type = "application/xml".to_string();

    let request = client.build_request("http://localhost:8080/api").unwrap();

    assert_eq!(request.body().as_deref(), Some("<note/>"));
    assert_eq!(request.headers()["Content-Type"], "application/xml");
}

#[test]
fn content_headers_join_the_body_headers() {
    let mut client = RestClient::new(
        "http://localhost:8080/api",
        Method::POST,
        None,
        Some(headers(&[("X-Checksum", "abc")])),
    );
    client.body = r#"{"a":1}"#.to_string();

    let request = client.build_request("http://localhost:8080/api").unwrap();

    assert_eq!(request.headers()["Content-Type"], "application/json");
    assert_eq!(request.headers()["X-Checksum"], "abc");
    assert_eq!(request.headers().len(), 2);
}

#[test]
fn content_headers_without_a_body_are_rejected() {
    let client = RestClient::new(
        "http://localhost:8080/api",
        Method::GET,
        None,
        Some(headers(&[("X-Checksum", "abc")])),
    );

    let result = client.build_request("http://localhost:8080/api");

    assert!(result.is_err());
}

#[test]
fn empty_content_headers_without_a_body_are_fine() {
    let client = RestClient::new(
        "http://localhost:8080/api",
        Method::GET,
        None,
        Some(HashMap::new()),
    );

    let request = client.build_request("http://localhost:8080/api").unwrap();

    assert!(request.body().is_none());
    assert!(request.headers().is_empty());
}

#[derive(Serialize)]
struct Payload {
    a: i32,
}

#[test]
fn payload_serializes_to_a_json_body() {
    let client =
        RestClient::with_payload("http://x/api", Method::POST, &Payload { a: 1 }, None, None)
            .unwrap();

    assert_eq!(client.body, r#"{"a":1}"#);
    assert_eq!(client.content_type, "application/json");
}

#[test]
fn payload_content_type_can_be_overridden() {
    let client = RestClient::with_payload_as(
        "http://x/api",
        Method::PUT,
        &Payload { a: 2 },
        "application/vnd.api+json",
        None,
        None,
    )
    .unwrap();

    assert_eq!(client.body, r#"{"a":2}"#);
    assert_eq!(client.content_type, "application/vnd.api+json");
}

#[test]
fn invalid_header_names_surface_when_building() {
    let client = RestClient::new(
        "http://localhost:8080/api",
        Method::GET,
        Some(headers(&[("bad header", "value")])),
        None,
    );

    assert!(client.build_request("http://localhost:8080/api").is_err());
}
