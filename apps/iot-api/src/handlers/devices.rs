//! 设备、传感器与读数上报 handlers
//!
//! - GET /devices - 列出设备（含传感器与最近读数）
//! - POST /devices - 注册设备
//! - GET /devices/{did} - 获取设备详情
//! - PUT /devices/{did} - 改名/改位置
//! - POST /devices/{did}/sensors - 添加传感器
//! - POST /devices/{did}/sensors/{sid}/readings - 上报读数并立即评估

use crate::AppState;
use crate::utils::normalize_optional;
use crate::utils::response::{
    alert_to_dto, created, device_to_dto, ok, reading_to_dto, sensor_to_dto, workflow_error,
};
use api_contract::{
    CreateDeviceRequest, CreateSensorRequest, DeviceDto, IngestReadingRequest,
    IngestReadingResponse, UpdateDeviceRequest,
};
use axum::{
    Json,
    extract::{Path, State},
    response::Response,
};
use iot_workflow::DeviceUpdate;

#[derive(serde::Deserialize)]
pub struct DevicePath {
    device_id: String,
}

#[derive(serde::Deserialize)]
pub struct SensorPath {
    device_id: String,
    sensor_id: String,
}

pub async fn list_devices(State(state): State<AppState>) -> Response {
    match state.service.list_devices() {
        Ok(devices) => {
            let data: Vec<DeviceDto> = devices.iter().map(device_to_dto).collect();
            ok(data)
        }
        Err(err) => workflow_error(err),
    }
}

pub async fn create_device(
    State(state): State<AppState>,
    Json(req): Json<CreateDeviceRequest>,
) -> Response {
    let location = req.location.unwrap_or_default();
    match state.service.register_device(&req.name, &location) {
        Ok(device) => created(device_to_dto(&device)),
        Err(err) => workflow_error(err),
    }
}

pub async fn get_device(
    State(state): State<AppState>,
    Path(path): Path<DevicePath>,
) -> Response {
    match state.service.find_device(&path.device_id) {
        Ok(device) => ok(device_to_dto(&device)),
        Err(err) => workflow_error(err),
    }
}

/// 更新设备
///
/// `name` 提供时必须非空；`location` 允许为空串。两者一起生效，
/// 校验失败时设备保持不变。
pub async fn update_device(
    State(state): State<AppState>,
    Path(path): Path<DevicePath>,
    Json(req): Json<UpdateDeviceRequest>,
) -> Response {
    let update = DeviceUpdate {
        name: req.name,
        location: req.location,
    };
    match state.service.update_device(&path.device_id, update) {
        Ok(device) => ok(device_to_dto(&device)),
        Err(err) => workflow_error(err),
    }
}

pub async fn add_sensor(
    State(state): State<AppState>,
    Path(path): Path<DevicePath>,
    Json(req): Json<CreateSensorRequest>,
) -> Response {
    let unit = normalize_optional(req.unit).unwrap_or_default();
    match state
        .service
        .add_sensor(&path.device_id, &req.sensor_type, &unit)
    {
        Ok(sensor) => created(sensor_to_dto(&sensor)),
        Err(err) => workflow_error(err),
    }
}

/// 上报读数
///
/// 读数时间取服务端时钟；返回本次立即评估产生的告警。
pub async fn ingest_reading(
    State(state): State<AppState>,
    Path(path): Path<SensorPath>,
    Json(req): Json<IngestReadingRequest>,
) -> Response {
    match state
        .service
        .ingest_reading(&path.device_id, &path.sensor_id, req.value)
    {
        Ok(outcome) => created(IngestReadingResponse {
            reading: reading_to_dto(&outcome.reading),
            alerts: outcome.alerts.iter().map(alert_to_dto).collect(),
            suppressed: outcome.suppressed,
        }),
        Err(err) => workflow_error(err),
    }
}
