//! 稳定的 DTO 与 API 响应契约。

use serde::{Deserialize, Serialize};

/// 标准 API 响应封装。
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

/// 失败响应的错误体。
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.into(),
                message: message.into(),
            }),
        }
    }
}

/// 设备创建请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeviceRequest {
    pub name: String,
    pub location: Option<String>,
}

/// 设备更新请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeviceRequest {
    pub name: Option<String>,
    pub location: Option<String>,
}

/// 设备返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDto {
    pub device_id: String,
    pub name: String,
    pub location: String,
    pub sensors: Vec<SensorDto>,
}

/// 传感器创建请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSensorRequest {
    #[serde(alias = "type")]
    pub sensor_type: String,
    pub unit: Option<String>,
}

/// 传感器返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorDto {
    pub sensor_id: String,
    pub sensor_type: String,
    pub unit: String,
    pub last_seen_ms: Option<i64>,
    pub last_reading: Option<ReadingDto>,
}

/// 读数返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingDto {
    pub reading_id: String,
    pub device_id: String,
    pub sensor_id: String,
    pub ts_ms: i64,
    pub value: f64,
}

/// 读数上报请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestReadingRequest {
    pub value: f64,
}

/// 读数上报结果：读数本身与立即评估产生的告警。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestReadingResponse {
    pub reading: ReadingDto,
    pub alerts: Vec<AlertDto>,
    pub suppressed: usize,
}

/// 阈值创建请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateThresholdRequest {
    pub device_id: String,
    pub sensor_type: String,
    #[serde(alias = "min")]
    pub min_value: Option<f64>,
    #[serde(alias = "max")]
    pub max_value: Option<f64>,
    pub severity: Option<String>,
}

/// 阈值返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdDto {
    pub threshold_id: String,
    pub device_id: String,
    pub sensor_type: String,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub severity: String,
}

/// 告警查询参数。
#[derive(Debug, Default, Deserialize)]
pub struct AlertQuery {
    pub status: Option<String>,
}

/// 告警返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertDto {
    pub alert_id: String,
    pub device_id: String,
    pub sensor_id: String,
    pub sensor_type: String,
    pub threshold_id: Option<String>,
    pub reading: ReadingDto,
    pub created_at_ms: i64,
    pub severity: String,
    pub status: String,
    pub acknowledged_by: Option<String>,
    pub acknowledged_at_ms: Option<i64>,
    pub linked_ticket_id: Option<String>,
    pub resolved_at_ms: Option<i64>,
}

/// 告警确认请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcknowledgeAlertRequest {
    #[serde(alias = "acknowledgedBy")]
    pub by: String,
}

/// 批量重扫结果。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponse {
    pub alerts: Vec<AlertDto>,
    pub suppressed: usize,
}

/// 工单创建请求体。
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenTicketRequest {
    #[serde(default)]
    pub description: String,
}

/// 动作日志条目。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionLogDto {
    pub ts_ms: i64,
    pub actor: String,
    pub technician_id: Option<String>,
    pub text: String,
}

/// 工单返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDto {
    pub ticket_id: String,
    pub alert_id: String,
    pub device_id: String,
    pub sensor_id: String,
    pub description: String,
    pub created_at_ms: i64,
    pub status: String,
    pub actions: Vec<ActionLogDto>,
    pub assigned_technician_id: Option<String>,
    pub closed_at_ms: Option<i64>,
}

/// 工单动作请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTicketActionRequest {
    pub text: String,
    pub technician_id: Option<String>,
}

/// 指派技术员请求体；`technicianId` 为空表示清除指派。
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignTechnicianRequest {
    pub technician_id: Option<String>,
}

/// 关单结果。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseTicketResponse {
    pub ticket: TicketDto,
    pub alert: Option<AlertDto>,
}

/// 技术员创建请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTechnicianRequest {
    pub name: String,
    pub contact: Option<String>,
}

/// 技术员返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicianDto {
    pub technician_id: String,
    pub name: String,
    pub contact: String,
}

/// 进程内计数器快照。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsDto {
    pub readings_ingested: u64,
    pub scans_run: u64,
    pub alerts_raised: u64,
    pub alerts_suppressed: u64,
    pub alerts_acknowledged: u64,
    pub alerts_resolved: u64,
    pub tickets_opened: u64,
    pub ticket_actions: u64,
    pub tickets_closed: u64,
}
