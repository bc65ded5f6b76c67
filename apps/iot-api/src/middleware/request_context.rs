//! 请求上下文中间件
//!
//! 每个请求生成 request_id/trace_id：
//! - 写入请求扩展，供 handler 读取
//! - 作为 `request` span 字段，贯穿该请求的全部日志
//! - 回写到 `x-request-id` / `x-trace-id` 响应头

use axum::{body::Body, extract::Request, http::HeaderValue, middleware::Next, response::Response};
use iot_telemetry::new_request_ids;
use std::time::Instant;
use tracing::{Instrument, info, info_span};

pub async fn request_context(mut req: Request<Body>, next: Next) -> Response {
    let ids = new_request_ids();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    req.extensions_mut().insert(ids.clone());

    let span = info_span!(
        "request",
        request_id = %ids.request_id,
        trace_id = %ids.trace_id,
        method = %method,
        path = %path
    );

    let started = Instant::now();
    let mut response = next.run(req).instrument(span.clone()).await;
    span.in_scope(|| {
        info!(
            target: "iot.api",
            status = response.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request_completed"
        );
    });
    response.headers_mut().insert(
        "x-request-id",
        HeaderValue::from_str(&ids.request_id).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    response.headers_mut().insert(
        "x-trace-id",
        HeaderValue::from_str(&ids.trace_id).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    response
}
