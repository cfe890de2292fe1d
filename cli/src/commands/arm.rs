use catwatch_common::status::ArmingStatus;
use catwatch_core::security::SecurityService;

use crate::terminal::print;

pub fn arm(service: &SecurityService, mode: ArmingStatus) -> anyhow::Result<()> {
    service.set_arming_status(mode)?;

    print::aligned_line("Arming", mode.to_string());
    print::alarm_line(service.get_alarm_status()?);
    Ok(())
}
