//! 路由定义
//!
//! 集中管理所有 API 路由，将路径映射到对应的 handlers。
//! 路由包括：
//! - 健康检查与指标：/health, /metrics
//! - 设备与传感器：/devices/*
//! - 阈值：/thresholds
//! - 告警：/alerts/*
//! - 维修工单：/tickets/*
//! - 技术员：/technicians

use super::AppState;
use super::handlers::*;
use axum::{
    Router,
    routing::{get, post, put},
};

/// 创建 API 路由
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(get_metrics))
        .route("/devices", get(list_devices).post(create_device))
        .route("/devices/:device_id", get(get_device).put(update_device))
        .route("/devices/:device_id/sensors", post(add_sensor))
        .route(
            "/devices/:device_id/sensors/:sensor_id/readings",
            post(ingest_reading),
        )
        .route("/thresholds", get(list_thresholds).post(create_threshold))
        .route("/alerts", get(list_alerts))
        .route("/alerts/scan", post(scan_alerts))
        .route("/alerts/:alert_id", get(get_alert))
        .route("/alerts/:alert_id/acknowledge", post(acknowledge_alert))
        .route("/alerts/:alert_id/tickets", post(open_ticket))
        .route("/tickets", get(list_tickets))
        .route("/tickets/:ticket_id", get(get_ticket))
        .route("/tickets/:ticket_id/actions", post(add_ticket_action))
        .route("/tickets/:ticket_id/technician", put(assign_technician))
        .route("/tickets/:ticket_id/close", post(close_ticket))
        .route(
            "/technicians",
            get(list_technicians).post(create_technician),
        )
}
