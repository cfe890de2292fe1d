#![cfg(test)]
use std::sync::{Arc, Mutex, OnceLock, Weak, mpsc};
use std::thread;
use std::time::Duration;

use catwatch_common::ports::listener::StatusListener;
use catwatch_common::sensor::{Sensor, SensorType};
use catwatch_common::status::{AlarmStatus, ArmingStatus};
use catwatch_core::listeners::AlarmEvent;
use catwatch_core::repository::InMemoryRepository;
use catwatch_core::security::SecurityService;

use crate::utils::{Fixture, RecordingListener, StubClassifier, sensors};

#[test]
fn concurrent_activations_escalate_exactly_once() {
    let stored = sensors(8, false);
    let repo = InMemoryRepository::with_sensors(stored.clone())
        .with_status(ArmingStatus::ArmedAway, AlarmStatus::NoAlarm);
    let fx = Fixture::new(repo, StubClassifier::answering(false));

    thread::scope(|scope| {
        for sensor in &stored {
            let service = &fx.service;
            scope.spawn(move || service.change_sensor_activation_status(sensor, true).unwrap());
        }
    });

    assert_eq!(fx.service.get_alarm_status().unwrap(), AlarmStatus::Alarm);
    assert_eq!(fx.alarm_writes(), vec![AlarmStatus::PendingAlarm, AlarmStatus::Alarm]);
    assert!(fx.service.get_sensors().unwrap().iter().all(|s| s.active));
    assert_eq!(fx.listener.count(AlarmEvent::SensorStatusChanged), 8);
}

/// Reads the alarm status back from inside the notification.
struct EchoListener {
    service: OnceLock<Weak<SecurityService>>,
    seen: Mutex<Vec<AlarmStatus>>,
}

impl StatusListener for EchoListener {
    fn on_status_changed(&self, _status: AlarmStatus) {
        if let Some(service) = self.service.get().and_then(Weak::upgrade) {
            let current = service.get_alarm_status().unwrap();
            self.seen.lock().unwrap().push(current);
        }
    }

    fn on_cat_detected(&self, _cat_detected: bool) {}

    fn on_sensor_status_changed(&self) {}
}

#[test]
fn listeners_may_call_back_into_the_engine() {
    let stored = sensors(1, false);
    let repo = InMemoryRepository::with_sensors(stored.clone())
        .with_status(ArmingStatus::ArmedHome, AlarmStatus::NoAlarm);
    let service = Arc::new(SecurityService::new(
        Box::new(repo),
        Box::new(StubClassifier::answering(false)),
    ));
    let echo = Arc::new(EchoListener {
        service: OnceLock::new(),
        seen: Mutex::new(Vec::new()),
    });
    let _ = echo.service.set(Arc::downgrade(&service));
    service.add_listener(echo.clone());

    service.change_sensor_activation_status(&stored[0], true).unwrap();

    // Delivery happens after the whole cascade was applied.
    assert_eq!(*echo.seen.lock().unwrap(), vec![AlarmStatus::Alarm, AlarmStatus::Alarm]);
}

#[test]
fn removed_listener_hears_nothing() {
    let repo = InMemoryRepository::with_sensors(sensors(1, false));
    let fx = Fixture::new(repo, StubClassifier::answering(false));
    let extra: Arc<dyn StatusListener> = Arc::new(RecordingListener::default());
    let listener: Arc<dyn StatusListener> = fx.listener.clone();

    assert!(fx.service.add_listener(extra.clone()));
    assert!(!fx.service.add_listener(listener.clone()));
    assert!(fx.service.remove_listener(&listener));
    assert!(!fx.service.remove_listener(&listener));

    fx.service.cat_detected(false).unwrap();

    assert!(fx.listener.events().is_empty());
}

/// Holds up the first status notification until released, and reads the
/// alarm status back while held.
struct GateListener {
    service: OnceLock<Weak<SecurityService>>,
    parked: Mutex<Option<mpsc::Sender<()>>>,
    release: Mutex<Option<mpsc::Receiver<()>>>,
    statuses: Mutex<Vec<AlarmStatus>>,
    read_back: Mutex<Vec<AlarmStatus>>,
}

impl StatusListener for GateListener {
    fn on_status_changed(&self, status: AlarmStatus) {
        let parked = self.parked.lock().unwrap().take();
        if let Some(parked) = parked {
            parked.send(()).unwrap();
            let release = self.release.lock().unwrap().take().unwrap();
            release.recv().unwrap();
            if let Some(service) = self.service.get().and_then(Weak::upgrade) {
                let current = service.get_alarm_status().unwrap();
                self.read_back.lock().unwrap().push(current);
            }
        }
        self.statuses.lock().unwrap().push(status);
    }

    fn on_cat_detected(&self, _cat_detected: bool) {}

    fn on_sensor_status_changed(&self) {}
}

#[test]
fn notifications_follow_write_order_across_threads() {
    let hall = Sensor::new("Hall", SensorType::Motion);
    let repo = InMemoryRepository::with_sensors([hall.clone()])
        .with_status(ArmingStatus::ArmedAway, AlarmStatus::PendingAlarm);
    let service = Arc::new(SecurityService::new(
        Box::new(repo),
        Box::new(StubClassifier::answering(false)),
    ));

    let (parked_tx, parked_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel();
    let gate = Arc::new(GateListener {
        service: OnceLock::new(),
        parked: Mutex::new(Some(parked_tx)),
        release: Mutex::new(Some(release_rx)),
        statuses: Mutex::new(Vec::new()),
        read_back: Mutex::new(Vec::new()),
    });
    let _ = gate.service.set(Arc::downgrade(&service));
    service.add_listener(gate.clone());

    // Writes NoAlarm, then stalls inside the listener.
    let clearing = {
        let service = service.clone();
        thread::spawn(move || service.cat_detected(false).unwrap())
    };
    parked_rx.recv().unwrap();

    // Writes PendingAlarm and Alarm while the first broadcast is still running.
    let tripping = {
        let service = service.clone();
        let hall = hall.clone();
        thread::spawn(move || service.change_sensor_activation_status(&hall, true).unwrap())
    };
    thread::sleep(Duration::from_millis(50));
    release_tx.send(()).unwrap();

    clearing.join().unwrap();
    tripping.join().unwrap();

    let stored = service.get_alarm_status().unwrap();
    assert_eq!(stored, AlarmStatus::Alarm);
    assert_eq!(
        *gate.statuses.lock().unwrap(),
        vec![AlarmStatus::NoAlarm, AlarmStatus::PendingAlarm, AlarmStatus::Alarm]
    );
    assert_eq!(gate.statuses.lock().unwrap().last(), Some(&stored));
    // Reading from inside a held broadcast does not block on the waiting writer.
    assert_eq!(gate.read_back.lock().unwrap().len(), 1);
}
