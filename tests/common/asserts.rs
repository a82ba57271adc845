#![allow(dead_code)]

use super::headers::header_value;
use http::StatusCode;
use origin_policy_rs::constants::header;
use origin_policy_rs::{Headers, RequestDecision};

pub fn assert_preflight(decision: RequestDecision) -> Headers {
    match decision {
        RequestDecision::Preflight(result) => {
            assert_eq!(result.status, StatusCode::OK);
            result.headers
        }
        other => panic!("expected preflight decision, got {:?}", other),
    }
}

pub fn assert_forbidden(decision: RequestDecision) -> Headers {
    match decision {
        RequestDecision::Forbidden(result) => {
            assert_eq!(result.status, StatusCode::FORBIDDEN);
            result.headers
        }
        other => panic!("expected forbidden decision, got {:?}", other),
    }
}

pub fn assert_cors_headers(headers: &Headers, origin: &str) {
    assert_eq!(
        header_value(headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(origin)
    );
    assert_eq!(
        header_value(headers, header::ACCESS_CONTROL_ALLOW_METHODS),
        Some("GET, POST, PUT, DELETE, OPTIONS")
    );
    assert_eq!(
        header_value(headers, header::ACCESS_CONTROL_ALLOW_HEADERS),
        Some("X-Requested-With, Content-Type, Accept, Authorization")
    );
    assert_eq!(
        header_value(headers, header::ACCESS_CONTROL_MAX_AGE),
        Some("3600")
    );
}
