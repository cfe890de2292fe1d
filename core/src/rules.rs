//! Alarm transition rules.
//!
//! Each function answers "what should the alarm status become?" from values the
//! engine has already read. `None` means leave the status alone. The engine is
//! responsible for persisting the answer and notifying listeners.

use catwatch_common::status::{AlarmStatus, ArmingStatus};

/// One escalation step for a sensor being switched on.
///
/// Re-applying the step to its own output walks the whole cascade: an inactive
/// sensor tripping at `NoAlarm` goes to `PendingAlarm`, and a pending alarm
/// that sees another activation goes to `Alarm`.
pub fn escalate(current: AlarmStatus, sensor_was_active: bool) -> Option<AlarmStatus> {
    match current {
        AlarmStatus::NoAlarm if !sensor_was_active => Some(AlarmStatus::PendingAlarm),
        AlarmStatus::NoAlarm | AlarmStatus::PendingAlarm => Some(AlarmStatus::Alarm),
        AlarmStatus::Alarm => None,
    }
}

/// Every status write caused by activating a sensor, in order.
pub fn activation_path(
    arming: ArmingStatus,
    current: AlarmStatus,
    sensor_was_active: bool,
) -> Vec<AlarmStatus> {
    let mut path = Vec::new();
    if !arming.is_armed() {
        return path;
    }

    let mut status = current;
    while let Some(next) = escalate(status, sensor_was_active) {
        path.push(next);
        status = next;
    }
    path
}

/// Switching off a sensor that was active.
///
/// Only a pending alarm can be called off, and only once no other sensor is
/// still tripped. A full alarm is never reduced here.
pub fn on_deactivation(current: AlarmStatus, others_inactive: bool) -> Option<AlarmStatus> {
    match current {
        AlarmStatus::PendingAlarm if others_inactive => Some(AlarmStatus::NoAlarm),
        _ => None,
    }
}

/// A fresh classifier verdict.
pub fn on_cat_detected(
    cat_detected: bool,
    arming: ArmingStatus,
    all_sensors_inactive: bool,
) -> Option<AlarmStatus> {
    if cat_detected && arming == ArmingStatus::ArmedHome {
        Some(AlarmStatus::Alarm)
    } else if !cat_detected && all_sensors_inactive {
        Some(AlarmStatus::NoAlarm)
    } else {
        None
    }
}

/// Status write made before the sensor reset when the arming mode changes.
pub fn on_arming(arming: ArmingStatus, cat_present: bool) -> Option<AlarmStatus> {
    match arming {
        ArmingStatus::Disarmed => Some(AlarmStatus::NoAlarm),
        ArmingStatus::ArmedHome if cat_present => Some(AlarmStatus::Alarm),
        _ => None,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
