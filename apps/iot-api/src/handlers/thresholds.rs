//! 阈值 handlers
//!
//! - GET /thresholds - 列出阈值（登记顺序）
//! - POST /thresholds - 新增阈值（设备必须存在）

use crate::AppState;
use crate::utils::parse_severity;
use crate::utils::response::{created, ok, threshold_to_dto, workflow_error};
use api_contract::{CreateThresholdRequest, ThresholdDto};
use axum::{
    Json,
    extract::State,
    response::Response,
};

pub async fn list_thresholds(State(state): State<AppState>) -> Response {
    match state.service.list_thresholds() {
        Ok(items) => {
            let data: Vec<ThresholdDto> = items.iter().map(threshold_to_dto).collect();
            ok(data)
        }
        Err(err) => workflow_error(err),
    }
}

pub async fn create_threshold(
    State(state): State<AppState>,
    Json(req): Json<CreateThresholdRequest>,
) -> Response {
    let severity = match parse_severity(req.severity) {
        Ok(severity) => severity,
        Err(response) => return response,
    };
    match state.service.set_threshold(
        &req.device_id,
        &req.sensor_type,
        req.min_value,
        req.max_value,
        severity,
    ) {
        Ok(threshold) => created(threshold_to_dto(&threshold)),
        Err(err) => workflow_error(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{body_json, state};
    use axum::http::StatusCode;

    fn request(device_id: &str, min: Option<f64>, max: Option<f64>) -> CreateThresholdRequest {
        CreateThresholdRequest {
            device_id: device_id.to_string(),
            sensor_type: "TEMPERATURE".to_string(),
            min_value: min,
            max_value: max,
            severity: Some("high".to_string()),
        }
    }

    #[tokio::test]
    async fn threshold_for_unknown_device_is_not_found() {
        let response =
            create_threshold(State(state()), Json(request("missing", None, Some(80.0)))).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "RESOURCE.NOT_FOUND");
    }

    #[tokio::test]
    async fn inverted_bounds_are_rejected() {
        let state = state();
        let device = state
            .service
            .register_device("Boiler-01", "Plant-A")
            .expect("device");
        let device_id = domain::Entity::id(&device).to_string();
        let response = create_threshold(
            State(state.clone()),
            Json(request(&device_id, Some(90.0), Some(10.0))),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response =
            create_threshold(State(state.clone()), Json(request(&device_id, None, Some(80.0))))
                .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["data"]["severity"], "HIGH");
        assert_eq!(body["data"]["minValue"], serde_json::Value::Null);

        let body = body_json(list_thresholds(State(state)).await).await;
        assert_eq!(body["data"].as_array().expect("list").len(), 1);
    }
}
