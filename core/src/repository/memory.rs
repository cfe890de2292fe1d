use std::collections::BTreeSet;

use catwatch_common::ports::repository::SecurityRepository;
use catwatch_common::sensor::Sensor;
use catwatch_common::status::{AlarmStatus, ArmingStatus};
use serde::{Deserialize, Serialize};

/// Everything a repository stores. Also the on-disk format of
/// [`super::JsonFileRepository`].
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct InMemoryRepository {
    #[serde(default)]
    sensors: BTreeSet<Sensor>,
    #[serde(default)]
    alarm_status: AlarmStatus,
    #[serde(default)]
    arming_status: ArmingStatus,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sensors(sensors: impl IntoIterator<Item = Sensor>) -> Self {
        Self {
            sensors: sensors.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, arming: ArmingStatus, alarm: AlarmStatus) -> Self {
        self.arming_status = arming;
        self.alarm_status = alarm;
        self
    }
}

impl SecurityRepository for InMemoryRepository {
    fn add_sensor(&mut self, sensor: Sensor) -> anyhow::Result<()> {
        self.sensors.replace(sensor);
        Ok(())
    }

    fn remove_sensor(&mut self, sensor: &Sensor) -> anyhow::Result<()> {
        self.sensors.remove(sensor);
        Ok(())
    }

    fn update_sensor(&mut self, sensor: &Sensor) -> anyhow::Result<()> {
        self.sensors.replace(sensor.clone());
        Ok(())
    }

    fn get_sensors(&self) -> anyhow::Result<BTreeSet<Sensor>> {
        Ok(self.sensors.clone())
    }

    fn get_alarm_status(&self) -> anyhow::Result<AlarmStatus> {
        Ok(self.alarm_status)
    }

    fn set_alarm_status(&mut self, status: AlarmStatus) -> anyhow::Result<()> {
        self.alarm_status = status;
        Ok(())
    }

    fn get_arming_status(&self) -> anyhow::Result<ArmingStatus> {
        Ok(self.arming_status)
    }

    fn set_arming_status(&mut self, status: ArmingStatus) -> anyhow::Result<()> {
        self.arming_status = status;
        Ok(())
    }
}
