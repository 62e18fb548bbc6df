//! Integration tests for the core crate.

use queue_core::api::{ErrorBody, JoinRequest};
use queue_core::model::{JoinResult, QueueState, QueueStatus, StatusSnapshot};
use queue_core::validation::{validate_name, NameError, MAX_NAME_LEN};

#[test]
fn test_queue_status_serde() {
    let called = QueueStatus::Called;
    let serialized = serde_json::to_string(&called).unwrap();
    assert_eq!(serialized, r#""CALLED""#);
    let deserialized: QueueStatus = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized, called);
}

#[test]
fn test_queue_status_case_insensitive() {
    for raw in [r#""waiting""#, r#""Waiting""#, r#""WAITING""#] {
        let status: QueueStatus = serde_json::from_str(raw).unwrap();
        assert_eq!(status, QueueStatus::Waiting);
    }
    let status: QueueStatus = serde_json::from_str(r#""called""#).unwrap();
    assert_eq!(status, QueueStatus::Called);
    let status: QueueStatus = serde_json::from_str(r#""done""#).unwrap();
    assert_eq!(status, QueueStatus::Done);
}

#[test]
fn test_queue_status_rejects_unknown() {
    let res = serde_json::from_str::<QueueStatus>(r#""CANCELLED""#);
    assert!(res.is_err());
}

#[test]
fn test_status_snapshot_decode() {
    let json = r#"{"ticket":7,"status":"CALLED","position":0,"current_ticket":7}"#;
    let snap: StatusSnapshot = serde_json::from_str(json).unwrap();
    assert_eq!(
        snap,
        StatusSnapshot {
            ticket: 7,
            status: QueueStatus::Called,
            position: 0,
            current_ticket: 7,
        }
    );
}

#[test]
fn test_status_snapshot_ignores_extra_fields() {
    let json = r#"{"ticket":3,"status":"WAITING","position":2,"current_ticket":1,"eta_seconds":40}"#;
    let snap: StatusSnapshot = serde_json::from_str(json).unwrap();
    assert_eq!(snap.ticket, 3);
    assert_eq!(snap.status, QueueStatus::Waiting);
}

#[test]
fn test_status_snapshot_missing_field_fails() {
    let json = r#"{"ticket":3,"position":2,"current_ticket":1}"#;
    assert!(serde_json::from_str::<StatusSnapshot>(json).is_err());
}

#[test]
fn test_join_request_encode() {
    let req = JoinRequest { name: "Anna".into() };
    assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"name":"Anna"}"#);
}

#[test]
fn test_join_result_decode() {
    let json = r#"{"ticket":7,"position":2,"current_ticket":5}"#;
    let r: JoinResult = serde_json::from_str(json).unwrap();
    assert_eq!(r.ticket, 7);
    assert_eq!(r.position, 2);
    assert_eq!(r.current_ticket, 5);
}

#[test]
fn test_queue_state_decode() {
    let json = r#"{"current_ticket":4,"last_ticket":9,"length":5}"#;
    let s: QueueState = serde_json::from_str(json).unwrap();
    assert_eq!(s.current_ticket, 4);
    assert_eq!(s.last_ticket, 9);
    assert_eq!(s.length, 5);
}

#[test]
fn test_error_body_decode() {
    let body: ErrorBody = serde_json::from_str(r#"{"error":"db down"}"#).unwrap();
    assert_eq!(body.error, "db down");
}

#[test]
fn validates_trimmed_name() {
    assert_eq!(validate_name("  Anna  ").unwrap(), "Anna");
}

#[test]
fn rejects_empty_name() {
    assert_eq!(validate_name("   "), Err(NameError::Empty));
    assert_eq!(validate_name(""), Err(NameError::Empty));
}

#[test]
fn rejects_over_long_name() {
    let long = "x".repeat(MAX_NAME_LEN + 1);
    assert_eq!(validate_name(&long), Err(NameError::TooLong));
    let max = "x".repeat(MAX_NAME_LEN);
    assert_eq!(validate_name(&max).unwrap(), max);
}
