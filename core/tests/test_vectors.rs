//! Verify URL building and response decoding against JSON test vectors
//! stored in `test-vectors/`.
//!
//! Decoded JSON is compared as parsed values, not raw strings, so key order
//! in the vectors does not matter.

use std::collections::BTreeMap;

use chainrest::dispatch::{build_request, parse_response};
use chainrest::{Absence, ApiError, Content, HttpMethod, HttpResponse, Locator, Outcome};
use serde_json::Value;

/// Segments in vectors may be strings or numbers; both go in by string form.
fn segment(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Locator
// ---------------------------------------------------------------------------

#[test]
fn locator_test_vectors() {
    let raw = include_str!("../../test-vectors/locator.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let mut locator = Locator::new(case["domain"].as_str().unwrap())
            .with_namespace(case["namespace"].as_str().map(str::to_string));
        for part in case["segments"].as_array().unwrap() {
            locator.push(segment(part));
        }

        assert_eq!(locator.urn(), case["expected_urn"].as_str().unwrap(), "{name}: urn");
        assert_eq!(locator.build(), case["expected_url"].as_str().unwrap(), "{name}: url");

        // The built request targets the same URL for every verb.
        for method in [HttpMethod::Get, HttpMethod::Post, HttpMethod::Put, HttpMethod::Delete] {
            let req = build_request(method, &locator, &BTreeMap::new(), None).unwrap();
            assert_eq!(req.url, locator.build(), "{name}: {method} url");
            assert!(req.body.is_none(), "{name}: {method} body");
        }
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[test]
fn response_test_vectors() {
    let raw = include_str!("../../test-vectors/responses.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let sim = &case["simulated_response"];
        let response = HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            headers: sim["content_type"]
                .as_str()
                .map(|ct| vec![("Content-Type".to_string(), ct.to_string())])
                .unwrap_or_default(),
            body: sim["body"].as_str().map(str::to_string),
        };
        let result = parse_response(Ok(response));

        if let Some(expected) = case.get("expected_text") {
            let outcome = result.unwrap();
            let expected = Content::Text(expected.as_str().unwrap().to_string());
            assert_eq!(outcome, Outcome::Content(expected), "{name}: text");
        } else if let Some(expected) = case.get("expected_json") {
            let outcome = result.unwrap();
            assert_eq!(outcome, Outcome::Content(Content::Json(expected.clone())), "{name}: json");
        } else if let Some(status) = case.get("expected_absent_status") {
            let outcome = result.unwrap();
            let status = status.as_u64().unwrap() as u16;
            assert_eq!(outcome, Outcome::Absent(Absence::Status(status)), "{name}: absent");
        } else if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "Deserialization" => {
                    assert!(matches!(err, ApiError::Deserialization(_)), "{name}: expected Deserialization")
                }
                other => panic!("{name}: unknown expected_error: {other}"),
            }
        } else {
            panic!("{name}: case has no expectation");
        }
    }
}
