//! 技术员 handlers
//!
//! - GET /technicians
//! - POST /technicians

use crate::AppState;
use crate::utils::normalize_optional;
use crate::utils::response::{created, ok, technician_to_dto, workflow_error};
use api_contract::{CreateTechnicianRequest, TechnicianDto};
use axum::{
    Json,
    extract::State,
    response::Response,
};

pub async fn list_technicians(State(state): State<AppState>) -> Response {
    match state.service.list_technicians() {
        Ok(items) => {
            let data: Vec<TechnicianDto> = items.iter().map(technician_to_dto).collect();
            ok(data)
        }
        Err(err) => workflow_error(err),
    }
}

pub async fn create_technician(
    State(state): State<AppState>,
    Json(req): Json<CreateTechnicianRequest>,
) -> Response {
    let contact = normalize_optional(req.contact).unwrap_or_default();
    match state.service.register_technician(&req.name, &contact) {
        Ok(technician) => created(technician_to_dto(&technician)),
        Err(err) => workflow_error(err),
    }
}
