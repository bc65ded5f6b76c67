use domain::{
    Alert, AlertStatus, Device, Entity, MaintenanceTicket, Reading, Sensor, Severity, Technician,
    Threshold,
};
use iot_storage::{InMemoryStores, Stores, lock_entity};
use std::sync::Arc;

fn stores() -> Stores {
    InMemoryStores::new().into_stores()
}

fn sample_alert(id: &str, reading_id: &str, threshold_id: &str) -> Alert {
    let reading = Reading::new(reading_id, "dev-1", "s-1", 1_000, 81.0).expect("reading");
    Alert::new(id, Arc::new(reading), "TEMPERATURE", Some(Severity::High), 1_000)
        .expect("alert")
        .with_threshold(threshold_id)
}

#[test]
fn device_in_memory_crud() {
    let stores = stores();
    let device = Device::new("dev-1", "Boiler-01", "Plant-A").expect("device");
    let handle = stores.devices.create_device(device).expect("create");

    lock_entity(&handle)
        .expect("lock")
        .add_sensor(Sensor::new("s-1", "TEMPERATURE", "°C").expect("sensor"));

    let found = stores
        .devices
        .find_device("dev-1")
        .expect("find")
        .expect("device");
    assert_eq!(lock_entity(&found).expect("lock").sensors().len(), 1);

    let list = stores.devices.list_devices().expect("list");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].name(), "Boiler-01");
    assert!(stores.devices.find_device("dev-2").expect("find").is_none());
}

#[test]
fn device_duplicate_id_rejected() {
    let stores = stores();
    let device = Device::new("dev-1", "Boiler-01", "Plant-A").expect("device");
    stores.devices.create_device(device.clone()).expect("create");
    let err = stores.devices.create_device(device).expect_err("duplicate");
    assert_eq!(err.to_string(), "device exists");
}

#[test]
fn thresholds_filtered_by_scope() {
    let stores = stores();
    let items = [
        Threshold::new("th-1", "dev-1", "TEMPERATURE", None, Some(80.0), None),
        Threshold::new("th-2", "dev-1", "humidity", Some(10.0), None, None),
        Threshold::new("th-3", "dev-2", "TEMPERATURE", None, Some(60.0), None),
        Threshold::new("th-4", "dev-1", "temperature", Some(0.0), None, None),
    ];
    for item in items {
        stores
            .thresholds
            .create_threshold(item.expect("threshold"))
            .expect("create");
    }

    let matched: Vec<String> = stores
        .thresholds
        .list_thresholds_for("dev-1", "Temperature")
        .expect("list")
        .iter()
        .map(|item| item.id().to_string())
        .collect();
    assert_eq!(matched, vec!["th-1", "th-4"]);
    assert_eq!(stores.thresholds.list_thresholds().expect("list").len(), 4);
}

#[test]
fn alerts_filtered_by_status() {
    let stores = stores();
    stores
        .alerts
        .create_alert(sample_alert("a-1", "r-1", "th-1"))
        .expect("create");
    let handle = stores
        .alerts
        .create_alert(sample_alert("a-2", "r-2", "th-1"))
        .expect("create");
    lock_entity(&handle)
        .expect("lock")
        .acknowledge("op1", 2_000)
        .expect("acknowledge");

    let new_alerts = stores
        .alerts
        .list_alerts_by_status(AlertStatus::New)
        .expect("list");
    assert_eq!(new_alerts.len(), 1);
    assert_eq!(new_alerts[0].id(), "a-1");

    let acknowledged = stores
        .alerts
        .list_alerts_by_status(AlertStatus::Acknowledged)
        .expect("list");
    assert_eq!(acknowledged.len(), 1);
    assert_eq!(acknowledged[0].acknowledged_by(), Some("op1"));
}

#[test]
fn has_alert_for_matches_reading_and_threshold() {
    let stores = stores();
    stores
        .alerts
        .create_alert(sample_alert("a-1", "r-1", "th-1"))
        .expect("create");
    assert!(stores.alerts.has_alert_for("r-1", "th-1").expect("query"));
    assert!(!stores.alerts.has_alert_for("r-1", "th-2").expect("query"));
    assert!(!stores.alerts.has_alert_for("r-2", "th-1").expect("query"));
}

#[test]
fn tickets_and_technicians_round_trip() {
    let stores = stores();
    let alert = sample_alert("a-1", "r-1", "th-1");
    let ticket = MaintenanceTicket::open("t-1", &alert, "recalibrate", 2_000);
    stores.tickets.create_ticket(ticket).expect("create");
    let tech = Technician::new("tech-1", "Ravi", "99999").expect("technician");
    stores.technicians.create_technician(tech).expect("create");

    let handle = stores
        .tickets
        .find_ticket("t-1")
        .expect("find")
        .expect("ticket");
    let technician = stores
        .technicians
        .find_technician("tech-1")
        .expect("find")
        .expect("technician");
    lock_entity(&handle)
        .expect("lock")
        .add_action("recalibrated sensor", Some(&technician), 3_000)
        .expect("action");

    let tickets = stores.tickets.list_tickets().expect("list");
    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].actions().len(), 1);
    assert_eq!(stores.technicians.list_technicians().expect("list").len(), 1);
    assert!(stores.technicians.find_technician("x").expect("find").is_none());
}
