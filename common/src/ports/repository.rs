use std::collections::BTreeSet;

use crate::sensor::Sensor;
use crate::status::{AlarmStatus, ArmingStatus};

/// Storage for the sensor set and the alarm / arming status.
///
/// Implementations hold no business logic. The engine is the only caller that
/// writes status values, and it serializes its calls, so `&mut self` writers
/// do not need interior locking.
pub trait SecurityRepository: Send {
    fn add_sensor(&mut self, sensor: Sensor) -> anyhow::Result<()>;

    /// Removing an unknown sensor is not an error.
    fn remove_sensor(&mut self, sensor: &Sensor) -> anyhow::Result<()>;

    /// Replaces the stored sensor with the same identity.
    fn update_sensor(&mut self, sensor: &Sensor) -> anyhow::Result<()>;

    fn get_sensors(&self) -> anyhow::Result<BTreeSet<Sensor>>;

    fn get_alarm_status(&self) -> anyhow::Result<AlarmStatus>;
    fn set_alarm_status(&mut self, status: AlarmStatus) -> anyhow::Result<()>;

    fn get_arming_status(&self) -> anyhow::Result<ArmingStatus>;
    fn set_arming_status(&mut self, status: ArmingStatus) -> anyhow::Result<()>;
}
