//! 演示数据：一台锅炉、一个温度传感器、一条上限阈值和一名技术员。

use domain::{Entity, Severity};
use iot_workflow::{MonitoringService, WorkflowError};
use tracing::info;

pub fn seed_demo(service: &MonitoringService) -> Result<(), WorkflowError> {
    let device = service.register_device("Boiler-01", "Plant-A")?;
    let sensor = service.add_sensor(device.id(), "TEMPERATURE", "°C")?;
    let threshold = service.set_threshold(
        device.id(),
        "TEMPERATURE",
        None,
        Some(80.0),
        Some(Severity::High),
    )?;
    let technician = service.register_technician("Ravi", "99999")?;
    info!(
        target: "iot.api",
        device_id = %device.id(),
        sensor_id = %sensor.id(),
        threshold_id = %threshold.id(),
        technician_id = %technician.id(),
        "demo_seeded"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::seed_demo;
    use crate::test_support::state;

    #[test]
    fn seed_registers_demo_entities() {
        let state = state();
        seed_demo(&state.service).expect("seed");

        let devices = state.service.list_devices().expect("devices");
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].name(), "Boiler-01");
        assert_eq!(devices[0].sensors()[0].sensor_type(), "TEMPERATURE");
        let thresholds = state.service.list_thresholds().expect("thresholds");
        assert_eq!(thresholds[0].max_value(), Some(80.0));
        assert_eq!(state.service.list_technicians().expect("techs").len(), 1);
    }
}
