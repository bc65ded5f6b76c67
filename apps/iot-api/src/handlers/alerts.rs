//! 告警 handlers
//!
//! - POST /alerts/scan - 批量重扫所有传感器的最近读数
//! - GET /alerts?status= - 列出告警（可按状态过滤）
//! - GET /alerts/{aid} - 获取告警详情
//! - POST /alerts/{aid}/acknowledge - 确认告警（仅 NEW 可确认）
//! - POST /alerts/{aid}/tickets - 从已确认告警开维修工单

use crate::AppState;
use crate::utils::parse_alert_status;
use crate::utils::response::{alert_to_dto, created, ok, ticket_to_dto, workflow_error};
use api_contract::{AcknowledgeAlertRequest, AlertDto, AlertQuery, OpenTicketRequest, ScanResponse};
use axum::{
    Json,
    extract::{Path, Query, State},
    response::Response,
};

#[derive(serde::Deserialize)]
pub struct AlertPath {
    alert_id: String,
}

pub async fn scan_alerts(State(state): State<AppState>) -> Response {
    match state.service.scan() {
        Ok(outcome) => ok(ScanResponse {
            alerts: outcome.alerts.iter().map(alert_to_dto).collect(),
            suppressed: outcome.suppressed,
        }),
        Err(err) => workflow_error(err),
    }
}

pub async fn list_alerts(
    State(state): State<AppState>,
    Query(query): Query<AlertQuery>,
) -> Response {
    let status = match parse_alert_status(query.status) {
        Ok(status) => status,
        Err(response) => return response,
    };
    match state.service.list_alerts(status) {
        Ok(items) => {
            let data: Vec<AlertDto> = items.iter().map(alert_to_dto).collect();
            ok(data)
        }
        Err(err) => workflow_error(err),
    }
}

pub async fn get_alert(State(state): State<AppState>, Path(path): Path<AlertPath>) -> Response {
    match state.service.find_alert(&path.alert_id) {
        Ok(alert) => ok(alert_to_dto(&alert)),
        Err(err) => workflow_error(err),
    }
}

pub async fn acknowledge_alert(
    State(state): State<AppState>,
    Path(path): Path<AlertPath>,
    Json(req): Json<AcknowledgeAlertRequest>,
) -> Response {
    match state.service.acknowledge_alert(&path.alert_id, &req.by) {
        Ok(alert) => ok(alert_to_dto(&alert)),
        Err(err) => workflow_error(err),
    }
}

/// 开维修工单
///
/// 告警必须处于 ACKNOWLEDGED 且尚未关联工单，否则返回 409。
pub async fn open_ticket(
    State(state): State<AppState>,
    Path(path): Path<AlertPath>,
    Json(req): Json<OpenTicketRequest>,
) -> Response {
    match state.service.open_ticket(&path.alert_id, &req.description) {
        Ok(ticket) => created(ticket_to_dto(&ticket)),
        Err(err) => workflow_error(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{body_json, state, state_with};
    use axum::http::StatusCode;
    use domain::Entity;
    use iot_workflow::{DuplicatePolicy, WorkflowConfig};

    /// 锅炉 + 温度传感器 + 上限 80，上报一条 81 的读数，返回告警 id。
    fn raise_alert(state: &AppState) -> String {
        let device = state
            .service
            .register_device("Boiler-01", "Plant-A")
            .expect("device");
        let sensor = state
            .service
            .add_sensor(device.id(), "TEMPERATURE", "°C")
            .expect("sensor");
        state
            .service
            .set_threshold(device.id(), "TEMPERATURE", None, Some(80.0), None)
            .expect("threshold");
        let outcome = state
            .service
            .ingest_reading(device.id(), sensor.id(), 81.0)
            .expect("ingest");
        outcome.alerts[0].id().to_string()
    }

    fn alert_path(alert_id: &str) -> Path<AlertPath> {
        Path(AlertPath {
            alert_id: alert_id.to_string(),
        })
    }

    #[tokio::test]
    async fn second_acknowledge_is_conflict() {
        let state = state();
        let alert_id = raise_alert(&state);
        let request = || {
            Json(AcknowledgeAlertRequest {
                by: "op1".to_string(),
            })
        };

        let response =
            acknowledge_alert(State(state.clone()), alert_path(&alert_id), request()).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["status"], "ACKNOWLEDGED");
        assert_eq!(body["data"]["acknowledgedBy"], "op1");

        let response = acknowledge_alert(State(state), alert_path(&alert_id), request()).await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "STATE.INVALID_TRANSITION");
    }

    #[tokio::test]
    async fn ticket_from_new_alert_is_conflict() {
        let state = state();
        let alert_id = raise_alert(&state);
        let response = open_ticket(
            State(state),
            alert_path(&alert_id),
            Json(OpenTicketRequest::default()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn list_filters_by_status() {
        let state = state();
        let alert_id = raise_alert(&state);

        let response = list_alerts(
            State(state.clone()),
            Query(AlertQuery {
                status: Some("acknowledged".to_string()),
            }),
        )
        .await;
        let body = body_json(response).await;
        assert!(body["data"].as_array().expect("alerts").is_empty());

        let response = list_alerts(
            State(state),
            Query(AlertQuery {
                status: Some("new".to_string()),
            }),
        )
        .await;
        let body = body_json(response).await;
        assert_eq!(body["data"][0]["alertId"], alert_id.as_str());
    }

    #[tokio::test]
    async fn invalid_status_filter_is_bad_request() {
        let response = list_alerts(
            State(state()),
            Query(AlertQuery {
                status: Some("done".to_string()),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn scan_repeats_or_suppresses_by_policy() {
        let state = state();
        raise_alert(&state);
        let body = body_json(scan_alerts(State(state.clone())).await).await;
        assert_eq!(body["data"]["alerts"].as_array().expect("alerts").len(), 1);
        assert_eq!(
            state.service.list_alerts(None).expect("alerts").len(),
            2
        );

        let state = state_with(WorkflowConfig {
            duplicate_policy: DuplicatePolicy::SuppressRepeated,
        });
        raise_alert(&state);
        let body = body_json(scan_alerts(State(state.clone())).await).await;
        assert!(body["data"]["alerts"].as_array().expect("alerts").is_empty());
        assert_eq!(body["data"]["suppressed"], 1);
    }
}
