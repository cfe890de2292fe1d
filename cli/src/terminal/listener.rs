use catwatch_common::ports::listener::StatusListener;
use catwatch_common::status::AlarmStatus;
use tracing::{info, warn};

/// Echoes every engine notification to the terminal.
pub struct TerminalListener;

impl StatusListener for TerminalListener {
    fn on_status_changed(&self, status: AlarmStatus) {
        match status {
            AlarmStatus::Alarm => warn!("Alarm status is now {}: {}", status, status.description()),
            _ => info!("Alarm status is now {}", status),
        }
    }

    fn on_cat_detected(&self, cat_detected: bool) {
        if cat_detected {
            warn!("Cat detected on camera");
        } else {
            info!("No cat in view");
        }
    }

    fn on_sensor_status_changed(&self) {
        info!("Sensor status updated");
    }
}
