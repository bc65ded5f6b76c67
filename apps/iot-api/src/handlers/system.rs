//! 健康检查与指标快照
//!
//! - GET /health
//! - GET /metrics

use api_contract::MetricsDto;
use axum::{Json, response::IntoResponse, response::Response};
use iot_telemetry::metrics;

use crate::utils::response::ok;

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "ok": true }))
}

pub async fn get_metrics() -> Response {
    let snapshot = metrics().snapshot();
    ok(MetricsDto {
        readings_ingested: snapshot.readings_ingested,
        scans_run: snapshot.scans_run,
        alerts_raised: snapshot.alerts_raised,
        alerts_suppressed: snapshot.alerts_suppressed,
        alerts_acknowledged: snapshot.alerts_acknowledged,
        alerts_resolved: snapshot.alerts_resolved,
        tickets_opened: snapshot.tickets_opened,
        ticket_actions: snapshot.ticket_actions,
        tickets_closed: snapshot.tickets_closed,
    })
}
