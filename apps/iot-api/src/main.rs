//! 设备监控 HTTP API：设备/传感器/阈值维护、读数上报、告警处置与维修工单。

mod handlers;
mod middleware;
mod routes;
mod seed;
mod utils;

use domain::{SystemClock, UuidIdSource};
use iot_config::{AlertDuplicates, AppConfig};
use iot_storage::InMemoryStores;
use iot_telemetry::init_tracing;
use iot_workflow::{DuplicatePolicy, MonitoringService, WorkflowConfig};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<MonitoringService>,
}

impl AppState {
    pub fn new(service: MonitoringService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载本地 .env（如存在），便于直接 cargo run 启动
    dotenvy::dotenv().ok();
    // 从环境变量加载运行配置
    let config = AppConfig::from_env()?;
    // 初始化结构化日志
    init_tracing();

    let workflow_config = WorkflowConfig {
        duplicate_policy: duplicate_policy(config.alert_duplicates),
    };
    let service = MonitoringService::new_with_config(
        InMemoryStores::new().into_stores(),
        Arc::new(UuidIdSource),
        Arc::new(SystemClock),
        workflow_config,
    );
    if config.seed_demo {
        seed::seed_demo(&service)?;
    }
    let state = AppState::new(service);

    let app = routes::create_api_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // 注入 request_id/trace_id
        .layer(axum::middleware::from_fn(middleware::request_context));

    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    info!(
        target: "iot.api",
        addr = %config.http_addr,
        duplicates = ?config.alert_duplicates,
        seed_demo = config.seed_demo,
        "http_listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}

fn duplicate_policy(mode: AlertDuplicates) -> DuplicatePolicy {
    match mode {
        AlertDuplicates::Repeat => DuplicatePolicy::Repeat,
        AlertDuplicates::Suppress => DuplicatePolicy::SuppressRepeated,
    }
}
