//! 维修工单 handlers
//!
//! - GET /tickets - 列出工单
//! - GET /tickets/{tid} - 获取工单详情
//! - POST /tickets/{tid}/actions - 追加动作日志（可指定技术员）
//! - PUT /tickets/{tid}/technician - 指派或清除技术员
//! - POST /tickets/{tid}/close - 关单，并解决关联告警

use crate::AppState;
use crate::utils::normalize_optional;
use crate::utils::response::{alert_to_dto, ok, ticket_to_dto, workflow_error};
use api_contract::{
    AddTicketActionRequest, AssignTechnicianRequest, CloseTicketResponse, TicketDto,
};
use axum::{
    Json,
    extract::{Path, State},
    response::Response,
};

#[derive(serde::Deserialize)]
pub struct TicketPath {
    ticket_id: String,
}

pub async fn list_tickets(State(state): State<AppState>) -> Response {
    match state.service.list_tickets() {
        Ok(items) => {
            let data: Vec<TicketDto> = items.iter().map(ticket_to_dto).collect();
            ok(data)
        }
        Err(err) => workflow_error(err),
    }
}

pub async fn get_ticket(State(state): State<AppState>, Path(path): Path<TicketPath>) -> Response {
    match state.service.find_ticket(&path.ticket_id) {
        Ok(ticket) => ok(ticket_to_dto(&ticket)),
        Err(err) => workflow_error(err),
    }
}

pub async fn add_ticket_action(
    State(state): State<AppState>,
    Path(path): Path<TicketPath>,
    Json(req): Json<AddTicketActionRequest>,
) -> Response {
    let technician_id = normalize_optional(req.technician_id);
    match state
        .service
        .add_ticket_action(&path.ticket_id, &req.text, technician_id.as_deref())
    {
        Ok(ticket) => ok(ticket_to_dto(&ticket)),
        Err(err) => workflow_error(err),
    }
}

pub async fn assign_technician(
    State(state): State<AppState>,
    Path(path): Path<TicketPath>,
    Json(req): Json<AssignTechnicianRequest>,
) -> Response {
    let technician_id = normalize_optional(req.technician_id);
    match state
        .service
        .assign_technician(&path.ticket_id, technician_id.as_deref())
    {
        Ok(ticket) => ok(ticket_to_dto(&ticket)),
        Err(err) => workflow_error(err),
    }
}

/// 关单
///
/// 动作日志为空时返回 422；成功后工单关联的告警变为 RESOLVED。
pub async fn close_ticket(State(state): State<AppState>, Path(path): Path<TicketPath>) -> Response {
    match state.service.close_ticket(&path.ticket_id) {
        Ok(closure) => ok(CloseTicketResponse {
            ticket: ticket_to_dto(&closure.ticket),
            alert: closure.alert.as_ref().map(alert_to_dto),
        }),
        Err(err) => workflow_error(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{body_json, state};
    use axum::http::StatusCode;
    use domain::Entity;

    /// 走到"已开工单"一步，返回 (工单 id, 技术员 id)。
    fn open_ticket(state: &AppState) -> (String, String) {
        let service = &state.service;
        let device = service
            .register_device("Boiler-01", "Plant-A")
            .expect("device");
        let sensor = service
            .add_sensor(device.id(), "TEMPERATURE", "°C")
            .expect("sensor");
        service
            .set_threshold(device.id(), "TEMPERATURE", None, Some(80.0), None)
            .expect("threshold");
        let technician = service
            .register_technician("Ravi", "99999")
            .expect("technician");
        let outcome = service
            .ingest_reading(device.id(), sensor.id(), 81.0)
            .expect("ingest");
        let alert_id = outcome.alerts[0].id();
        service
            .acknowledge_alert(alert_id, "op1")
            .expect("acknowledge");
        let ticket = service
            .open_ticket(alert_id, "recalibrate")
            .expect("ticket");
        (ticket.id().to_string(), technician.id().to_string())
    }

    fn ticket_path(ticket_id: &str) -> Path<TicketPath> {
        Path(TicketPath {
            ticket_id: ticket_id.to_string(),
        })
    }

    #[tokio::test]
    async fn close_requires_action_then_resolves_alert() {
        let state = state();
        let (ticket_id, technician_id) = open_ticket(&state);

        let response = close_ticket(State(state.clone()), ticket_path(&ticket_id)).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "STATE.PRECONDITION_FAILED");

        let response = add_ticket_action(
            State(state.clone()),
            ticket_path(&ticket_id),
            Json(AddTicketActionRequest {
                text: "recalibrated sensor".to_string(),
                technician_id: Some(technician_id.clone()),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(
            body["data"]["actions"][0]["actor"],
            format!("Ravi({technician_id})")
        );

        let response = close_ticket(State(state), ticket_path(&ticket_id)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["ticket"]["status"], "CLOSED");
        assert_eq!(body["data"]["alert"]["status"], "RESOLVED");
        assert_eq!(body["data"]["alert"]["linkedTicketId"], ticket_id.as_str());
    }

    #[tokio::test]
    async fn blank_action_text_is_bad_request() {
        let state = state();
        let (ticket_id, _) = open_ticket(&state);
        let response = add_ticket_action(
            State(state),
            ticket_path(&ticket_id),
            Json(AddTicketActionRequest {
                text: " ".to_string(),
                technician_id: None,
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_technician_is_not_found() {
        let state = state();
        let (ticket_id, _) = open_ticket(&state);
        let response = assign_technician(
            State(state),
            ticket_path(&ticket_id),
            Json(AssignTechnicianRequest {
                technician_id: Some("ghost".to_string()),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn blank_technician_clears_assignment() {
        let state = state();
        let (ticket_id, technician_id) = open_ticket(&state);
        let response = assign_technician(
            State(state.clone()),
            ticket_path(&ticket_id),
            Json(AssignTechnicianRequest {
                technician_id: Some(technician_id.clone()),
            }),
        )
        .await;
        let body = body_json(response).await;
        assert_eq!(body["data"]["assignedTechnicianId"], technician_id.as_str());

        let response = assign_technician(
            State(state),
            ticket_path(&ticket_id),
            Json(AssignTechnicianRequest {
                technician_id: Some("".to_string()),
            }),
        )
        .await;
        let body = body_json(response).await;
        assert_eq!(body["data"]["assignedTechnicianId"], serde_json::Value::Null);
    }
}
