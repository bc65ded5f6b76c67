//! 追踪、请求 ID 生成与进程内计数器。

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 请求级追踪标识。
#[derive(Debug, Clone)]
pub struct RequestIds {
    pub request_id: String,
    pub trace_id: String,
}

/// 基础指标快照。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
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

/// 基础指标。
pub struct TelemetryMetrics {
    readings_ingested: AtomicU64,
    scans_run: AtomicU64,
    alerts_raised: AtomicU64,
    alerts_suppressed: AtomicU64,
    alerts_acknowledged: AtomicU64,
    alerts_resolved: AtomicU64,
    tickets_opened: AtomicU64,
    ticket_actions: AtomicU64,
    tickets_closed: AtomicU64,
}

impl TelemetryMetrics {
    pub fn new() -> Self {
        Self {
            readings_ingested: AtomicU64::new(0),
            scans_run: AtomicU64::new(0),
            alerts_raised: AtomicU64::new(0),
            alerts_suppressed: AtomicU64::new(0),
            alerts_acknowledged: AtomicU64::new(0),
            alerts_resolved: AtomicU64::new(0),
            tickets_opened: AtomicU64::new(0),
            ticket_actions: AtomicU64::new(0),
            tickets_closed: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            readings_ingested: self.readings_ingested.load(Ordering::Relaxed),
            scans_run: self.scans_run.load(Ordering::Relaxed),
            alerts_raised: self.alerts_raised.load(Ordering::Relaxed),
            alerts_suppressed: self.alerts_suppressed.load(Ordering::Relaxed),
            alerts_acknowledged: self.alerts_acknowledged.load(Ordering::Relaxed),
            alerts_resolved: self.alerts_resolved.load(Ordering::Relaxed),
            tickets_opened: self.tickets_opened.load(Ordering::Relaxed),
            ticket_actions: self.ticket_actions.load(Ordering::Relaxed),
            tickets_closed: self.tickets_closed.load(Ordering::Relaxed),
        }
    }
}

impl Default for TelemetryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

static METRICS: OnceLock<TelemetryMetrics> = OnceLock::new();

/// 获取全局指标实例。
pub fn metrics() -> &'static TelemetryMetrics {
    METRICS.get_or_init(TelemetryMetrics::new)
}

/// 初始化 tracing（默认 info）。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 生成新的 request_id 与 trace_id。
pub fn new_request_ids() -> RequestIds {
    RequestIds {
        request_id: uuid::Uuid::new_v4().to_string(),
        trace_id: uuid::Uuid::new_v4().to_string(),
    }
}

/// 记录读数采集次数。
pub fn record_reading_ingested() {
    metrics().readings_ingested.fetch_add(1, Ordering::Relaxed);
}

/// 记录批量重扫次数。
pub fn record_scan_run() {
    metrics().scans_run.fetch_add(1, Ordering::Relaxed);
}

/// 记录新告警条数。
pub fn record_alerts_raised(count: u64) {
    metrics().alerts_raised.fetch_add(count, Ordering::Relaxed);
}

/// 记录因去重策略跳过的告警条数。
pub fn record_alerts_suppressed(count: u64) {
    metrics()
        .alerts_suppressed
        .fetch_add(count, Ordering::Relaxed);
}

/// 记录告警确认次数。
pub fn record_alert_acknowledged() {
    metrics()
        .alerts_acknowledged
        .fetch_add(1, Ordering::Relaxed);
}

/// 记录告警解决次数（工单关闭触发）。
pub fn record_alert_resolved() {
    metrics().alerts_resolved.fetch_add(1, Ordering::Relaxed);
}

/// 记录工单创建次数。
pub fn record_ticket_opened() {
    metrics().tickets_opened.fetch_add(1, Ordering::Relaxed);
}

/// 记录工单动作日志追加次数。
pub fn record_ticket_action() {
    metrics().ticket_actions.fetch_add(1, Ordering::Relaxed);
}

/// 记录工单关闭次数。
pub fn record_ticket_closed() {
    metrics().tickets_closed.fetch_add(1, Ordering::Relaxed);
}
