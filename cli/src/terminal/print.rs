use std::collections::BTreeSet;

use catwatch_common::sensor::Sensor;
use catwatch_common::status::AlarmStatus;
use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;
pub const PRINT_TARGET: &str = "catwatch::print";

const KEY_WIDTH: usize = 12;

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{}", msg);
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = UnicodeWidthStr::width(formatted.as_str());

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn aligned_line<V: Into<ColoredString>>(key: &str, value: V) {
    let dots: String = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.len()));
    let colon: String = format!("{}{}", dots.bright_black(), ":".bright_black());
    print_status(format!("{}{} {}", key.cyan(), colon, value.into()));
}

pub fn alarm_line(status: AlarmStatus) {
    let text = format!("{} ({})", status, status.description());
    let value: ColoredString = match status {
        AlarmStatus::NoAlarm => text.green(),
        AlarmStatus::PendingAlarm => text.yellow().bold(),
        AlarmStatus::Alarm => text.red().bold(),
    };
    aligned_line("Alarm", value);
}

pub fn sensor_table(sensors: &BTreeSet<Sensor>) {
    if sensors.is_empty() {
        print_status("No sensors registered");
        return;
    }

    for sensor in sensors {
        let state: ColoredString = if sensor.active {
            "active".red().bold()
        } else {
            "inactive".green()
        };
        aligned_line(&sensor.name, format!("{:<7} {}", sensor.sensor_type, state));
    }
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".bright_black();
    print(&format!("{} {}", prefix, msg.as_ref()));
}
