use api_contract::{
    AcknowledgeAlertRequest, ActionLogDto, AlertDto, CreateSensorRequest, CreateThresholdRequest,
    OpenTicketRequest, ReadingDto,
};
use serde_json::Value;

fn reading() -> ReadingDto {
    ReadingDto {
        reading_id: "r-1".to_string(),
        device_id: "d-1".to_string(),
        sensor_id: "s-1".to_string(),
        ts_ms: 1_700_000_000_000,
        value: 81.0,
    }
}

#[test]
fn alert_dto_is_camel_case() {
    let alert = AlertDto {
        alert_id: "a-1".to_string(),
        device_id: "d-1".to_string(),
        sensor_id: "s-1".to_string(),
        sensor_type: "TEMPERATURE".to_string(),
        threshold_id: Some("t-1".to_string()),
        reading: reading(),
        created_at_ms: 1_700_000_000_000,
        severity: "HIGH".to_string(),
        status: "NEW".to_string(),
        acknowledged_by: None,
        acknowledged_at_ms: None,
        linked_ticket_id: None,
        resolved_at_ms: None,
    };
    let value = serde_json::to_value(alert).expect("serialize");
    assert!(value.get("alertId").is_some());
    assert!(value.get("linkedTicketId").is_some());
    assert!(value.get("alert_id").is_none());
    let reading = value.get("reading").expect("reading");
    assert!(matches!(reading.get("tsMs"), Some(Value::Number(_))));
}

#[test]
fn action_log_keeps_optional_technician() {
    let entry = ActionLogDto {
        ts_ms: 5,
        actor: "system".to_string(),
        technician_id: None,
        text: "checked".to_string(),
    };
    let value = serde_json::to_value(entry).expect("serialize");
    assert_eq!(value.get("technicianId"), Some(&Value::Null));
    assert_eq!(value.get("actor"), Some(&Value::String("system".to_string())));
}

#[test]
fn threshold_request_accepts_short_bound_names() {
    let payload = r#"{"deviceId":"d-1","sensorType":"TEMPERATURE","max":80}"#;
    let req: CreateThresholdRequest = serde_json::from_str(payload).expect("parse");
    assert_eq!(req.max_value, Some(80.0));
    assert_eq!(req.min_value, None);
    assert!(req.severity.is_none());
}

#[test]
fn sensor_request_accepts_type_alias() {
    let payload = r#"{"type":"HUMIDITY","unit":"%"}"#;
    let req: CreateSensorRequest = serde_json::from_str(payload).expect("parse");
    assert_eq!(req.sensor_type, "HUMIDITY");
}

#[test]
fn acknowledge_request_accepts_both_names() {
    let req: AcknowledgeAlertRequest =
        serde_json::from_str(r#"{"by":"op1"}"#).expect("parse");
    assert_eq!(req.by, "op1");
    let req: AcknowledgeAlertRequest =
        serde_json::from_str(r#"{"acknowledgedBy":"op2"}"#).expect("parse");
    assert_eq!(req.by, "op2");
}

#[test]
fn ticket_description_defaults_to_empty() {
    let req: OpenTicketRequest = serde_json::from_str("{}").expect("parse");
    assert_eq!(req.description, "");
}
