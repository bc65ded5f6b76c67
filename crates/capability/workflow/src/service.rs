use crate::{DeviceUpdate, DuplicatePolicy, WorkflowConfig, WorkflowError};
use domain::{
    Alert, AlertStatus, Clock, Device, DomainError, Entity, IdSource, MaintenanceTicket, Reading,
    Sensor, Severity, Technician, Threshold, TicketStatus,
};
use iot_evaluate::{AlertEvaluator, StorageThresholdSource, alert_origin};
use iot_storage::{Handle, StorageError, Stores, lock_entity};
use iot_telemetry::{
    record_alert_acknowledged, record_alert_resolved, record_alerts_raised,
    record_alerts_suppressed, record_reading_ingested, record_scan_run, record_ticket_action,
    record_ticket_closed, record_ticket_opened,
};
use std::sync::{Arc, Mutex};
use tracing::info;

/// 单条读数采集结果。
#[derive(Debug, Clone)]
pub struct IngestOutcome {
    pub reading: Arc<Reading>,
    pub alerts: Vec<Alert>,
    pub suppressed: usize,
}

/// 批量重扫结果。
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub alerts: Vec<Alert>,
    pub suppressed: usize,
}

/// 关单结果：关闭后的工单与被解决的告警。
#[derive(Debug, Clone)]
pub struct TicketClosure {
    pub ticket: MaintenanceTicket,
    pub alert: Option<Alert>,
}

/// 监控流程服务。
pub struct MonitoringService {
    stores: Stores,
    evaluator: AlertEvaluator,
    ids: Arc<dyn IdSource>,
    clock: Arc<dyn Clock>,
    config: WorkflowConfig,
    // 去重检查与告警写入需要原子完成
    alert_write: Mutex<()>,
}

impl MonitoringService {
    pub fn new(stores: Stores, ids: Arc<dyn IdSource>, clock: Arc<dyn Clock>) -> Self {
        Self::new_with_config(stores, ids, clock, WorkflowConfig::default())
    }

    pub fn new_with_config(
        stores: Stores,
        ids: Arc<dyn IdSource>,
        clock: Arc<dyn Clock>,
        config: WorkflowConfig,
    ) -> Self {
        let source = Arc::new(StorageThresholdSource::new(stores.thresholds.clone()));
        let evaluator = AlertEvaluator::new(source, ids.clone(), clock.clone());
        Self {
            stores,
            evaluator,
            ids,
            clock,
            config,
            alert_write: Mutex::new(()),
        }
    }

    pub fn register_device(&self, name: &str, location: &str) -> Result<Device, WorkflowError> {
        let device = Device::new(self.ids.next_id(), name, location)?;
        let handle = self.stores.devices.create_device(device)?;
        let device = lock_entity(&handle)?.clone();
        info!(
            target: "iot.workflow",
            device_id = %device.id(),
            name = %device.name(),
            location = %device.location(),
            "device_registered"
        );
        Ok(device)
    }

    /// 改名与改位置一起生效；名称非法时不做任何修改。
    pub fn update_device(
        &self,
        device_id: &str,
        update: DeviceUpdate,
    ) -> Result<Device, WorkflowError> {
        let handle = self.device_handle(device_id)?;
        let mut device = lock_entity(&handle)?;
        if let Some(name) = update.name.as_deref() {
            device.rename(name)?;
        }
        if let Some(location) = update.location.as_deref() {
            device.relocate(location);
        }
        info!(
            target: "iot.workflow",
            device_id = %device.id(),
            name = %device.name(),
            location = %device.location(),
            "device_updated"
        );
        Ok(device.clone())
    }

    pub fn add_sensor(
        &self,
        device_id: &str,
        sensor_type: &str,
        unit: &str,
    ) -> Result<Sensor, WorkflowError> {
        let handle = self.device_handle(device_id)?;
        let sensor = Sensor::new(self.ids.next_id(), sensor_type, unit)?;
        lock_entity(&handle)?.add_sensor(sensor.clone());
        info!(
            target: "iot.workflow",
            device_id = %device_id,
            sensor_id = %sensor.id(),
            sensor_type = %sensor.sensor_type(),
            unit = %sensor.unit(),
            "sensor_added"
        );
        Ok(sensor)
    }

    pub fn set_threshold(
        &self,
        device_id: &str,
        sensor_type: &str,
        min_value: Option<f64>,
        max_value: Option<f64>,
        severity: Option<Severity>,
    ) -> Result<Threshold, WorkflowError> {
        self.device_handle(device_id)?;
        let threshold = Threshold::new(
            self.ids.next_id(),
            device_id,
            sensor_type,
            min_value,
            max_value,
            severity,
        )?;
        let threshold = self.stores.thresholds.create_threshold(threshold)?;
        info!(
            target: "iot.workflow",
            threshold_id = %threshold.id(),
            device_id = %threshold.device_id(),
            sensor_type = %threshold.sensor_type(),
            min_value = ?threshold.min_value(),
            max_value = ?threshold.max_value(),
            severity = %threshold.severity(),
            "threshold_set"
        );
        Ok(threshold)
    }

    pub fn register_technician(
        &self,
        name: &str,
        contact: &str,
    ) -> Result<Technician, WorkflowError> {
        let technician = Technician::new(self.ids.next_id(), name, contact)?;
        let technician = self.stores.technicians.create_technician(technician)?;
        info!(
            target: "iot.workflow",
            technician_id = %technician.id(),
            name = %technician.name(),
            "technician_registered"
        );
        Ok(technician)
    }

    /// 采集读数并立即评估。
    ///
    /// 设备锁持有到告警写入完成；评估或写入失败时传感器状态保持不变。
    pub fn ingest_reading(
        &self,
        device_id: &str,
        sensor_id: &str,
        value: f64,
    ) -> Result<IngestOutcome, WorkflowError> {
        let handle = self.device_handle(device_id)?;
        let now_ms = self.clock.now_ms();
        let mut device = lock_entity(&handle)?;
        let sensor_type = device
            .sensor(sensor_id)
            .map(|sensor| sensor.sensor_type().to_string())
            .ok_or_else(|| WorkflowError::not_found("sensor", sensor_id))?;
        let reading = Arc::new(Reading::new(
            self.ids.next_id(),
            device_id,
            sensor_id,
            now_ms,
            value,
        )?);

        let candidates = self.evaluator.evaluate_reading(&reading, &sensor_type)?;
        let (alerts, suppressed) = self.persist_alerts(candidates)?;

        let sensor = device
            .sensor_mut(sensor_id)
            .ok_or_else(|| WorkflowError::not_found("sensor", sensor_id))?;
        sensor.record_reading(reading.clone());
        drop(device);
        record_reading_ingested();
        info!(
            target: "iot.workflow",
            reading_id = %reading.id(),
            device_id = %reading.device_id(),
            sensor_id = %reading.sensor_id(),
            sensor_type = %sensor_type,
            ts_ms = reading.ts_ms(),
            value = reading.value(),
            raised = alerts.len(),
            "reading_ingested"
        );
        Ok(IngestOutcome {
            reading,
            alerts,
            suppressed,
        })
    }

    /// 批量重扫所有传感器的最近读数。
    pub fn scan(&self) -> Result<ScanOutcome, WorkflowError> {
        let devices = self.stores.devices.list_devices()?;
        let candidates = self.evaluator.scan(&devices)?;
        let (alerts, suppressed) = self.persist_alerts(candidates)?;
        record_scan_run();
        info!(
            target: "iot.workflow",
            devices = devices.len(),
            raised = alerts.len(),
            suppressed = suppressed,
            "alert_scan_completed"
        );
        Ok(ScanOutcome { alerts, suppressed })
    }

    pub fn acknowledge_alert(&self, alert_id: &str, by: &str) -> Result<Alert, WorkflowError> {
        let handle = self.alert_handle(alert_id)?;
        let mut alert = lock_entity(&handle)?;
        alert.acknowledge(by, self.clock.now_ms())?;
        record_alert_acknowledged();
        info!(
            target: "iot.workflow",
            alert_id = %alert.id(),
            acknowledged_by = ?alert.acknowledged_by(),
            "alert_acknowledged"
        );
        Ok(alert.clone())
    }

    /// 从已确认告警开工单，并把工单 id 关联回告警。
    ///
    /// 告警锁在整个过程中持有：工单写入与关联要么都发生，要么都不发生。
    pub fn open_ticket(
        &self,
        alert_id: &str,
        description: &str,
    ) -> Result<MaintenanceTicket, WorkflowError> {
        let handle = self.alert_handle(alert_id)?;
        let mut alert = lock_entity(&handle)?;
        if alert.status() != AlertStatus::Acknowledged {
            return Err(DomainError::invalid_transition(format!(
                "tickets can only be opened from ACKNOWLEDGED alerts (alert {} is {})",
                alert.id(),
                alert.status()
            ))
            .into());
        }
        if let Some(existing) = alert.linked_ticket_id() {
            return Err(DomainError::invalid_transition(format!(
                "alert {} already linked to ticket {existing}",
                alert.id()
            ))
            .into());
        }
        let ticket =
            MaintenanceTicket::open(self.ids.next_id(), &alert, description, self.clock.now_ms());
        self.stores.tickets.create_ticket(ticket.clone())?;
        alert.link_ticket(ticket.id())?;
        record_ticket_opened();
        info!(
            target: "iot.workflow",
            ticket_id = %ticket.id(),
            alert_id = %ticket.alert_id(),
            device_id = %ticket.device_id(),
            sensor_id = %ticket.sensor_id(),
            "ticket_opened"
        );
        Ok(ticket)
    }

    pub fn add_ticket_action(
        &self,
        ticket_id: &str,
        text: &str,
        technician_id: Option<&str>,
    ) -> Result<MaintenanceTicket, WorkflowError> {
        let technician = technician_id
            .map(|id| self.find_technician(id))
            .transpose()?;
        let handle = self.ticket_handle(ticket_id)?;
        let mut ticket = lock_entity(&handle)?;
        ticket.add_action(text, technician.as_ref(), self.clock.now_ms())?;
        record_ticket_action();
        info!(
            target: "iot.workflow",
            ticket_id = %ticket.id(),
            technician_id = ?technician_id,
            status = %ticket.status(),
            actions = ticket.actions().len(),
            "ticket_action_added"
        );
        Ok(ticket.clone())
    }

    pub fn assign_technician(
        &self,
        ticket_id: &str,
        technician_id: Option<&str>,
    ) -> Result<MaintenanceTicket, WorkflowError> {
        let technician = technician_id
            .map(|id| self.find_technician(id))
            .transpose()?;
        let handle = self.ticket_handle(ticket_id)?;
        let mut ticket = lock_entity(&handle)?;
        ticket.assign_technician(technician.as_ref());
        info!(
            target: "iot.workflow",
            ticket_id = %ticket.id(),
            technician_id = ?ticket.assigned_technician_id(),
            "ticket_technician_assigned"
        );
        Ok(ticket.clone())
    }

    /// 关单，随后解决工单记录的告警。
    ///
    /// 告警句柄在关单前取得；重复关单不再计数。
    pub fn close_ticket(&self, ticket_id: &str) -> Result<TicketClosure, WorkflowError> {
        let handle = self.ticket_handle(ticket_id)?;
        let alert_id = lock_entity(&handle)?.alert_id().to_string();
        let alert_handle = self.stores.alerts.find_alert(&alert_id)?;
        let now_ms = self.clock.now_ms();

        let mut ticket = lock_entity(&handle)?;
        let mut alert = alert_handle.as_ref().map(lock_entity).transpose()?;
        let was_open = ticket.status() == TicketStatus::Open;
        ticket.close(now_ms)?;
        if was_open {
            record_ticket_closed();
            info!(
                target: "iot.workflow",
                ticket_id = %ticket.id(),
                alert_id = %ticket.alert_id(),
                actions = ticket.actions().len(),
                "ticket_closed"
            );
        }
        if let Some(alert) = alert.as_mut() {
            if alert.status() != AlertStatus::Resolved {
                alert.resolve(now_ms);
                record_alert_resolved();
                info!(
                    target: "iot.workflow",
                    alert_id = %alert.id(),
                    ticket_id = %ticket.id(),
                    "alert_resolved"
                );
            }
        }
        Ok(TicketClosure {
            ticket: ticket.clone(),
            alert: alert.map(|alert| alert.clone()),
        })
    }

    pub fn list_devices(&self) -> Result<Vec<Device>, WorkflowError> {
        Ok(self.stores.devices.list_devices()?)
    }

    pub fn find_device(&self, device_id: &str) -> Result<Device, WorkflowError> {
        let handle = self.device_handle(device_id)?;
        let device = lock_entity(&handle)?.clone();
        Ok(device)
    }

    pub fn list_thresholds(&self) -> Result<Vec<Threshold>, WorkflowError> {
        Ok(self.stores.thresholds.list_thresholds()?)
    }

    pub fn list_alerts(&self, status: Option<AlertStatus>) -> Result<Vec<Alert>, WorkflowError> {
        let alerts = match status {
            Some(status) => self.stores.alerts.list_alerts_by_status(status)?,
            None => self.stores.alerts.list_alerts()?,
        };
        Ok(alerts)
    }

    pub fn find_alert(&self, alert_id: &str) -> Result<Alert, WorkflowError> {
        let handle = self.alert_handle(alert_id)?;
        let alert = lock_entity(&handle)?.clone();
        Ok(alert)
    }

    pub fn list_tickets(&self) -> Result<Vec<MaintenanceTicket>, WorkflowError> {
        Ok(self.stores.tickets.list_tickets()?)
    }

    pub fn find_ticket(&self, ticket_id: &str) -> Result<MaintenanceTicket, WorkflowError> {
        let handle = self.ticket_handle(ticket_id)?;
        let ticket = lock_entity(&handle)?.clone();
        Ok(ticket)
    }

    pub fn list_technicians(&self) -> Result<Vec<Technician>, WorkflowError> {
        Ok(self.stores.technicians.list_technicians()?)
    }

    pub fn find_technician(&self, technician_id: &str) -> Result<Technician, WorkflowError> {
        self.stores
            .technicians
            .find_technician(technician_id)?
            .ok_or_else(|| WorkflowError::not_found("technician", technician_id))
    }

    /// 按去重策略保存候选告警，返回 (已保存, 被跳过数)。
    fn persist_alerts(&self, candidates: Vec<Alert>) -> Result<(Vec<Alert>, usize), WorkflowError> {
        if candidates.is_empty() {
            return Ok((Vec::new(), 0));
        }
        let _guard = self
            .alert_write
            .lock()
            .map_err(|_| StorageError::lock_failed())?;
        let mut raised = Vec::with_capacity(candidates.len());
        let mut suppressed = 0usize;
        for alert in candidates {
            if self.config.duplicate_policy == DuplicatePolicy::SuppressRepeated {
                if let Some((reading_id, threshold_id)) = alert_origin(&alert) {
                    if self.stores.alerts.has_alert_for(reading_id, threshold_id)? {
                        suppressed += 1;
                        info!(
                            target: "iot.workflow",
                            reading_id = %reading_id,
                            threshold_id = %threshold_id,
                            "alert_suppressed"
                        );
                        continue;
                    }
                }
            }
            self.stores.alerts.create_alert(alert.clone())?;
            info!(
                target: "iot.workflow",
                alert_id = %alert.id(),
                device_id = %alert.device_id(),
                sensor_id = %alert.sensor_id(),
                threshold_id = ?alert.threshold_id(),
                severity = %alert.severity(),
                value = alert.reading().value(),
                "alert_raised"
            );
            raised.push(alert);
        }
        record_alerts_raised(raised.len() as u64);
        if suppressed > 0 {
            record_alerts_suppressed(suppressed as u64);
        }
        Ok((raised, suppressed))
    }

    fn device_handle(&self, device_id: &str) -> Result<Handle<Device>, WorkflowError> {
        self.stores
            .devices
            .find_device(device_id)?
            .ok_or_else(|| WorkflowError::not_found("device", device_id))
    }

    fn alert_handle(&self, alert_id: &str) -> Result<Handle<Alert>, WorkflowError> {
        self.stores
            .alerts
            .find_alert(alert_id)?
            .ok_or_else(|| WorkflowError::not_found("alert", alert_id))
    }

    fn ticket_handle(&self, ticket_id: &str) -> Result<Handle<MaintenanceTicket>, WorkflowError> {
        self.stores
            .tickets
            .find_ticket(ticket_id)?
            .ok_or_else(|| WorkflowError::not_found("ticket", ticket_id))
    }
}
