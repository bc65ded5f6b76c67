use api_contract::ApiResponse;

#[test]
fn api_response_success() {
    let response = ApiResponse::success(vec!["alert-1"]);
    assert!(response.success);
    assert_eq!(response.data.as_deref(), Some(&["alert-1"][..]));
    assert!(response.error.is_none());
}

#[test]
fn api_response_error_serializes_envelope() {
    let response = ApiResponse::<()>::error("STATE.INVALID_TRANSITION", "alert already acknowledged");
    let value = serde_json::to_value(&response).expect("serialize");
    assert_eq!(value["success"], false);
    assert!(value["data"].is_null());
    assert_eq!(value["error"]["code"], "STATE.INVALID_TRANSITION");
    assert_eq!(value["error"]["message"], "alert already acknowledged");
}
