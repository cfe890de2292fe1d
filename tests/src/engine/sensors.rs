#![cfg(test)]
use catwatch_common::error::SecurityError;
use catwatch_common::sensor::{Sensor, SensorType};
use catwatch_common::status::{AlarmStatus, ArmingStatus};
use catwatch_core::listeners::AlarmEvent;
use catwatch_core::repository::InMemoryRepository;

use crate::utils::{Fixture, StubClassifier, sensors};

fn window() -> Sensor {
    Sensor::new("Testing", SensorType::Window)
}

fn armed(arming: ArmingStatus, alarm: AlarmStatus, stored: Vec<Sensor>) -> Fixture {
    let repo = InMemoryRepository::with_sensors(stored).with_status(arming, alarm);
    Fixture::new(repo, StubClassifier::answering(false))
}

#[test]
fn fresh_activation_cascades_through_pending_to_alarm() {
    for arming in [ArmingStatus::ArmedHome, ArmingStatus::ArmedAway] {
        let fx = armed(arming, AlarmStatus::NoAlarm, vec![window()]);

        fx.service.change_sensor_activation_status(&window(), true).unwrap();

        assert_eq!(fx.service.get_alarm_status().unwrap(), AlarmStatus::Alarm);
        assert_eq!(fx.alarm_writes(), vec![AlarmStatus::PendingAlarm, AlarmStatus::Alarm]);
        assert_eq!(fx.journal.lock().unwrap().count_alarm_writes(AlarmStatus::Alarm), 1);
    }
}

#[test]
fn armed_away_scenario_persists_sensor_once() {
    let fx = armed(ArmingStatus::ArmedAway, AlarmStatus::NoAlarm, vec![window()]);

    fx.service.change_sensor_activation_status(&window(), true).unwrap();

    let journal = fx.journal.lock().unwrap();
    assert_eq!(journal.sensor_updates.len(), 1);
    assert_eq!(journal.sensor_updates[0], window());
    assert!(journal.sensor_updates[0].active);
    assert_eq!(
        fx.listener.events(),
        vec![
            AlarmEvent::StatusChanged(AlarmStatus::PendingAlarm),
            AlarmEvent::StatusChanged(AlarmStatus::Alarm),
            AlarmEvent::SensorStatusChanged,
        ]
    );
}

#[test]
fn activation_while_pending_raises_alarm() {
    for already_active in [false, true] {
        let fx = armed(
            ArmingStatus::ArmedHome,
            AlarmStatus::PendingAlarm,
            vec![window().with_active(already_active)],
        );

        fx.service.change_sensor_activation_status(&window(), true).unwrap();

        assert_eq!(fx.alarm_writes(), vec![AlarmStatus::Alarm]);
    }
}

#[test]
fn alarm_is_sticky_under_sensor_changes() {
    let fx = armed(ArmingStatus::ArmedAway, AlarmStatus::Alarm, vec![window()]);

    fx.service.change_sensor_activation_status(&window(), true).unwrap();
    fx.service.change_sensor_activation_status(&window(), false).unwrap();

    assert!(fx.alarm_writes().is_empty());
    assert_eq!(fx.service.get_alarm_status().unwrap(), AlarmStatus::Alarm);
    assert_eq!(fx.listener.count(AlarmEvent::SensorStatusChanged), 2);
}

#[test]
fn last_active_sensor_off_calls_off_pending_alarm() {
    let mut stored = sensors(3, false);
    let tripped = Sensor::new("Test9", SensorType::Motion).with_active(true);
    stored.push(tripped.clone());
    let fx = armed(ArmingStatus::ArmedAway, AlarmStatus::PendingAlarm, stored);

    fx.service.change_sensor_activation_status(&tripped, false).unwrap();

    assert_eq!(fx.alarm_writes(), vec![AlarmStatus::NoAlarm]);
    assert!(!fx.sensor(&tripped).active);
}

#[test]
fn pending_alarm_holds_while_another_sensor_is_active() {
    let stored = sensors(2, true);
    let first = stored[0].clone();
    let fx = armed(ArmingStatus::ArmedAway, AlarmStatus::PendingAlarm, stored);

    fx.service.change_sensor_activation_status(&first, false).unwrap();

    assert!(fx.alarm_writes().is_empty());
    assert_eq!(fx.service.get_alarm_status().unwrap(), AlarmStatus::PendingAlarm);
}

#[test]
fn deactivating_inactive_sensor_never_touches_alarm() {
    let fx = armed(ArmingStatus::ArmedAway, AlarmStatus::PendingAlarm, vec![window()]);

    fx.service.change_sensor_activation_status(&window(), false).unwrap();

    assert!(fx.alarm_writes().is_empty());
    assert_eq!(fx.journal.lock().unwrap().sensor_updates.len(), 1);
    assert_eq!(fx.listener.events(), vec![AlarmEvent::SensorStatusChanged]);
}

#[test]
fn disarmed_system_ignores_activation() {
    let fx = armed(ArmingStatus::Disarmed, AlarmStatus::NoAlarm, vec![window()]);

    fx.service.change_sensor_activation_status(&window(), true).unwrap();

    assert!(fx.alarm_writes().is_empty());
    assert!(fx.sensor(&window()).active);
    assert_eq!(fx.listener.events(), vec![AlarmEvent::SensorStatusChanged]);
}

#[test]
fn stored_activation_wins_over_caller_copy() {
    // The caller's copy claims inactive, the repository knows better.
    let fx = armed(
        ArmingStatus::ArmedAway,
        AlarmStatus::PendingAlarm,
        vec![window().with_active(true)],
    );

    fx.service.change_sensor_activation_status(&window(), false).unwrap();

    assert_eq!(fx.alarm_writes(), vec![AlarmStatus::NoAlarm]);
}

#[test]
fn unknown_sensor_fails_fast() {
    let fx = armed(ArmingStatus::ArmedAway, AlarmStatus::NoAlarm, vec![window()]);
    let ghost = Sensor::new("Ghost", SensorType::Door);

    let err = fx
        .service
        .change_sensor_activation_status(&ghost, true)
        .unwrap_err();

    assert_eq!(
        err.downcast_ref::<SecurityError>(),
        Some(&SecurityError::SensorNotFound("Ghost (door)".into()))
    );
    assert!(fx.alarm_writes().is_empty());
    assert!(fx.listener.events().is_empty());
}

#[test]
fn adding_and_removing_sensors_has_no_side_effects() {
    let fx = armed(ArmingStatus::ArmedAway, AlarmStatus::PendingAlarm, Vec::new());

    fx.service.add_sensor(window().with_active(true)).unwrap();
    assert_eq!(fx.service.get_sensors().unwrap().len(), 1);
    fx.service.remove_sensor(&window()).unwrap();

    assert!(fx.service.get_sensors().unwrap().is_empty());
    assert!(fx.alarm_writes().is_empty());
    assert!(fx.listener.events().is_empty());
    assert_eq!(fx.service.get_alarm_status().unwrap(), AlarmStatus::PendingAlarm);
}

#[test]
fn deactivating_active_sensor_without_alarm_writes_nothing() {
    let fx = armed(
        ArmingStatus::ArmedHome,
        AlarmStatus::NoAlarm,
        vec![window().with_active(true)],
    );

    fx.service.change_sensor_activation_status(&window(), false).unwrap();

    assert!(fx.alarm_writes().is_empty());
    assert!(!fx.sensor(&window()).active);
    assert_eq!(fx.listener.events(), vec![AlarmEvent::SensorStatusChanged]);
}
