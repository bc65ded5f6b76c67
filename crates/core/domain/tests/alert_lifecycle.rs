use domain::{Alert, AlertStatus, DomainError, Reading, Severity};
use std::sync::Arc;

fn new_alert() -> Alert {
    let reading = Reading::new("r-1", "dev-1", "s-1", 1_000, 81.0).expect("reading");
    Alert::new("a-1", Arc::new(reading), "TEMPERATURE", Some(Severity::High), 1_000)
        .expect("alert")
}

#[test]
fn alert_copies_reading_scope() {
    let alert = new_alert();
    assert_eq!(alert.device_id(), "dev-1");
    assert_eq!(alert.sensor_id(), "s-1");
    assert_eq!(alert.reading().value(), 81.0);
    assert_eq!(alert.status(), AlertStatus::New);
    assert!(alert.linked_ticket_id().is_none());
}

#[test]
fn severity_defaults_to_medium() {
    let reading = Reading::new("r-1", "dev-1", "s-1", 1_000, 81.0).expect("reading");
    let alert = Alert::new("a-2", Arc::new(reading), "TEMPERATURE", None, 1_000).expect("alert");
    assert_eq!(alert.severity(), Severity::Medium);
}

#[test]
fn acknowledge_succeeds_once() {
    let mut alert = new_alert();
    alert.acknowledge("op1", 2_000).expect("acknowledge");
    assert_eq!(alert.status(), AlertStatus::Acknowledged);
    assert_eq!(alert.acknowledged_by(), Some("op1"));
    assert_eq!(alert.acknowledged_at_ms(), Some(2_000));

    let err = alert.acknowledge("op2", 3_000).expect_err("second acknowledge");
    assert!(matches!(err, DomainError::InvalidTransition(_)));
    assert_eq!(alert.acknowledged_by(), Some("op1"));
    assert_eq!(alert.acknowledged_at_ms(), Some(2_000));
}

#[test]
fn acknowledge_rejected_after_resolve() {
    let mut alert = new_alert();
    alert.resolve(2_000);
    let err = alert.acknowledge("op1", 3_000).expect_err("resolved");
    assert!(matches!(err, DomainError::InvalidTransition(_)));
    assert_eq!(alert.status(), AlertStatus::Resolved);
}

#[test]
fn acknowledge_requires_actor() {
    let mut alert = new_alert();
    let err = alert.acknowledge("  ", 2_000).expect_err("blank actor");
    assert!(matches!(err, DomainError::Validation(_)));
    assert_eq!(alert.status(), AlertStatus::New);
}

#[test]
fn resolve_is_idempotent() {
    let mut alert = new_alert();
    alert.acknowledge("op1", 2_000).expect("acknowledge");
    alert.resolve(3_000);
    alert.resolve(4_000);
    assert_eq!(alert.status(), AlertStatus::Resolved);
    assert_eq!(alert.resolved_at_ms(), Some(3_000));
}

#[test]
fn resolve_allowed_directly_from_new() {
    let mut alert = new_alert();
    alert.resolve(2_000);
    assert_eq!(alert.status(), AlertStatus::Resolved);
    assert!(alert.acknowledged_by().is_none());
}

#[test]
fn link_ticket_is_write_once() {
    let mut alert = new_alert();
    alert.link_ticket("t-1").expect("link");
    alert.link_ticket("t-1").expect("same ticket");
    let err = alert.link_ticket("t-2").expect_err("relink");
    assert!(matches!(err, DomainError::InvalidTransition(_)));
    assert_eq!(alert.linked_ticket_id(), Some("t-1"));
    assert_eq!(alert.status(), AlertStatus::New);
}

#[test]
fn status_parses() {
    assert_eq!(AlertStatus::parse("acknowledged").expect("parse"), AlertStatus::Acknowledged);
    assert!(AlertStatus::parse("open").is_err());
}
