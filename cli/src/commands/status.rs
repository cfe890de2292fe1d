use std::path::Path;

use catwatch_core::security::SecurityService;

use crate::terminal::print;

pub fn status(service: &SecurityService, store: &Path) -> anyhow::Result<()> {
    let arming = service.get_arming_status()?;
    let alarm = service.get_alarm_status()?;

    print::aligned_line("Store", store.display().to_string());
    print::aligned_line("Arming", arming.to_string());
    print::alarm_line(alarm);
    print::sensor_table(&service.get_sensors()?);
    Ok(())
}
