//! HTTP 响应辅助函数和 DTO 转换
//!
//! 提供统一的错误响应构造函数和 DTO 转换函数：
//! - 错误响应：bad_request_error, not_found_error, conflict_error, precondition_error, internal_error
//! - 流程错误映射：workflow_error
//! - DTO 转换：device_to_dto, reading_to_dto, threshold_to_dto, alert_to_dto, ticket_to_dto, technician_to_dto
//!
//! 错误码约定：
//! - 400 INVALID.REQUEST：字段校验失败
//! - 404 RESOURCE.NOT_FOUND：实体不存在
//! - 409 STATE.INVALID_TRANSITION：状态机不允许的迁移
//! - 422 STATE.PRECONDITION_FAILED：结构性前置条件不满足
//! - 500 INTERNAL.ERROR：存储或其他内部错误

use api_contract::{
    ActionLogDto, AlertDto, ApiResponse, DeviceDto, ReadingDto, SensorDto, TechnicianDto,
    ThresholdDto, TicketDto,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::{
    Alert, Device, DomainError, Entity, MaintenanceTicket, Reading, Sensor, Technician, Threshold,
};
use iot_workflow::WorkflowError;
use tracing::error;

fn error_response(status: StatusCode, code: &str, message: impl Into<String>) -> Response {
    (status, Json(ApiResponse::<()>::error(code, message.into()))).into_response()
}

/// 错误请求响应
pub fn bad_request_error(message: impl Into<String>) -> Response {
    error_response(StatusCode::BAD_REQUEST, "INVALID.REQUEST", message)
}

/// 资源未找到错误响应
pub fn not_found_error(message: impl Into<String>) -> Response {
    error_response(StatusCode::NOT_FOUND, "RESOURCE.NOT_FOUND", message)
}

/// 非法状态迁移响应
pub fn conflict_error(message: impl Into<String>) -> Response {
    error_response(StatusCode::CONFLICT, "STATE.INVALID_TRANSITION", message)
}

/// 前置条件不满足响应
pub fn precondition_error(message: impl Into<String>) -> Response {
    error_response(
        StatusCode::UNPROCESSABLE_ENTITY,
        "STATE.PRECONDITION_FAILED",
        message,
    )
}

/// 内部错误响应
pub fn internal_error(message: impl Into<String>) -> Response {
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL.ERROR", message)
}

/// 领域错误响应
pub fn domain_error(err: &DomainError) -> Response {
    match err {
        DomainError::Validation(message) => bad_request_error(message.clone()),
        DomainError::InvalidTransition(message) => conflict_error(message.clone()),
        DomainError::Precondition(message) => precondition_error(message.clone()),
    }
}

/// 流程错误响应
pub fn workflow_error(err: WorkflowError) -> Response {
    if let Some(domain) = err.as_domain() {
        return domain_error(domain);
    }
    match err {
        WorkflowError::NotFound { .. } => not_found_error(err.to_string()),
        other => {
            error!(target: "iot.api", error = %other, "request_failed");
            internal_error(other.to_string())
        }
    }
}

/// 成功响应
pub fn ok<T: serde::Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
}

/// 创建成功响应
pub fn created<T: serde::Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(ApiResponse::success(data))).into_response()
}

/// Reading 转 ReadingDto
pub fn reading_to_dto(reading: &Reading) -> ReadingDto {
    ReadingDto {
        reading_id: reading.id().to_string(),
        device_id: reading.device_id().to_string(),
        sensor_id: reading.sensor_id().to_string(),
        ts_ms: reading.ts_ms(),
        value: reading.value(),
    }
}

/// Sensor 转 SensorDto
pub fn sensor_to_dto(sensor: &Sensor) -> SensorDto {
    SensorDto {
        sensor_id: sensor.id().to_string(),
        sensor_type: sensor.sensor_type().to_string(),
        unit: sensor.unit().to_string(),
        last_seen_ms: sensor.last_seen_ms(),
        last_reading: sensor.last_reading().map(|reading| reading_to_dto(reading)),
    }
}

/// Device 转 DeviceDto
pub fn device_to_dto(device: &Device) -> DeviceDto {
    DeviceDto {
        device_id: device.id().to_string(),
        name: device.name().to_string(),
        location: device.location().to_string(),
        sensors: device.sensors().iter().map(sensor_to_dto).collect(),
    }
}

/// Threshold 转 ThresholdDto
pub fn threshold_to_dto(threshold: &Threshold) -> ThresholdDto {
    ThresholdDto {
        threshold_id: threshold.id().to_string(),
        device_id: threshold.device_id().to_string(),
        sensor_type: threshold.sensor_type().to_string(),
        min_value: threshold.min_value(),
        max_value: threshold.max_value(),
        severity: threshold.severity().to_string(),
    }
}

/// Alert 转 AlertDto
pub fn alert_to_dto(alert: &Alert) -> AlertDto {
    AlertDto {
        alert_id: alert.id().to_string(),
        device_id: alert.device_id().to_string(),
        sensor_id: alert.sensor_id().to_string(),
        sensor_type: alert.sensor_type().to_string(),
        threshold_id: alert.threshold_id().map(str::to_string),
        reading: reading_to_dto(alert.reading()),
        created_at_ms: alert.created_at_ms(),
        severity: alert.severity().to_string(),
        status: alert.status().to_string(),
        acknowledged_by: alert.acknowledged_by().map(str::to_string),
        acknowledged_at_ms: alert.acknowledged_at_ms(),
        linked_ticket_id: alert.linked_ticket_id().map(str::to_string),
        resolved_at_ms: alert.resolved_at_ms(),
    }
}

/// MaintenanceTicket 转 TicketDto
pub fn ticket_to_dto(ticket: &MaintenanceTicket) -> TicketDto {
    TicketDto {
        ticket_id: ticket.id().to_string(),
        alert_id: ticket.alert_id().to_string(),
        device_id: ticket.device_id().to_string(),
        sensor_id: ticket.sensor_id().to_string(),
        description: ticket.description().to_string(),
        created_at_ms: ticket.created_at_ms(),
        status: ticket.status().to_string(),
        actions: ticket
            .actions()
            .iter()
            .map(|entry| ActionLogDto {
                ts_ms: entry.ts_ms,
                actor: entry.actor.clone(),
                technician_id: entry.technician_id.clone(),
                text: entry.text.clone(),
            })
            .collect(),
        assigned_technician_id: ticket.assigned_technician_id().map(str::to_string),
        closed_at_ms: ticket.closed_at_ms(),
    }
}

/// Technician 转 TechnicianDto
pub fn technician_to_dto(technician: &Technician) -> TechnicianDto {
    TechnicianDto {
        technician_id: technician.id().to_string(),
        name: technician.name().to_string(),
        contact: technician.contact().to_string(),
    }
}
