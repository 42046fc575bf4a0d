use crate::config::Config;
use crate::data::sample::sample_properties;
use crate::data::source::LoadedProperties;
use crate::domain::property::PropertyRecord;
use crate::router::AppState;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

/// AppState over the fixed sample records, as if the real dataset had
/// failed to load.
pub fn sample_state() -> AppState {
    let data = LoadedProperties {
        records: sample_properties(),
        fallback: true,
    };
    AppState::new(data, &Config::default())
}

/// AppState over `count` generated records loaded "for real".
pub fn generated_state(count: usize) -> AppState {
    let records: Vec<PropertyRecord> = (1..=count)
        .map(|i| PropertyRecord {
            area: Some("JP Road".to_string()),
            project_name: Some(format!("Project {i:02}")),
            ..Default::default()
        })
        .collect();

    let data = LoadedProperties {
        records,
        fallback: false,
    };
    AppState::new(data, &Config::default())
}

/// Build a GET request for the router under test.
pub fn get(path_and_query: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(path_and_query)
        .body(Body::from(String::new()))
        .expect("Failed to build test request")
}

/// Drain a response body into a string.
pub fn body_string(resp: &mut Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .expect("Failed to read response body");
    String::from_utf8(bytes).expect("Response body was not UTF-8")
}
