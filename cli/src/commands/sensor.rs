use catwatch_common::sensor::Sensor;
use catwatch_core::security::SecurityService;
use tracing::info;

use super::{SensorAction, SensorState};
use crate::terminal::print;

pub fn sensor(service: &SecurityService, action: SensorAction) -> anyhow::Result<()> {
    match action {
        SensorAction::Add { name, kind } => {
            let sensor = Sensor::new(name, kind);
            info!("Adding sensor {}", sensor);
            service.add_sensor(sensor)?;
        }
        SensorAction::Remove { name, kind } => {
            let sensor = Sensor::new(name, kind);
            info!("Removing sensor {}", sensor);
            service.remove_sensor(&sensor)?;
        }
        SensorAction::Set { name, kind, state } => {
            let active = matches!(state, SensorState::Active);
            service.change_sensor_activation_status(&Sensor::new(name, kind), active)?;
            print::alarm_line(service.get_alarm_status()?);
        }
        SensorAction::List => {}
    }

    print::sensor_table(&service.get_sensors()?);
    Ok(())
}
