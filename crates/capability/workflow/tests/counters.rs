//! 计数器是进程级全局状态；本测试二进制只放一个用例。

use domain::{Entity, ManualClock, SequentialIdSource, Severity};
use iot_storage::InMemoryStores;
use iot_telemetry::metrics;
use iot_workflow::MonitoringService;
use std::sync::Arc;

#[test]
fn counters_move_only_on_committed_transitions() {
    let service = MonitoringService::new(
        InMemoryStores::new().into_stores(),
        Arc::new(SequentialIdSource::new("id")),
        Arc::new(ManualClock::new(1_000)),
    );
    let device = service
        .register_device("Boiler-01", "Plant-A")
        .expect("device");
    let sensor = service
        .add_sensor(device.id(), "TEMPERATURE", "°C")
        .expect("sensor");
    service
        .set_threshold(device.id(), "TEMPERATURE", None, Some(80.0), Some(Severity::High))
        .expect("threshold");

    let before = metrics().snapshot();
    service
        .ingest_reading(device.id(), "missing", 95.0)
        .expect_err("unknown sensor");
    assert_eq!(
        metrics().snapshot().readings_ingested,
        before.readings_ingested
    );

    let outcome = service
        .ingest_reading(device.id(), sensor.id(), 95.0)
        .expect("ingest");
    let alert_id = outcome.alerts[0].id().to_string();
    service
        .acknowledge_alert(&alert_id, "operator")
        .expect("acknowledge");
    let ticket = service.open_ticket(&alert_id, "inspect").expect("open ticket");
    service
        .add_ticket_action(ticket.id(), "replaced valve", None)
        .expect("action");

    let before = metrics().snapshot();
    service.close_ticket(ticket.id()).expect("close");
    service.close_ticket(ticket.id()).expect("close again");
    let after = metrics().snapshot();
    assert_eq!(after.tickets_closed - before.tickets_closed, 1);
    assert_eq!(after.alerts_resolved - before.alerts_resolved, 1);
}
