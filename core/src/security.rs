//! The alarm engine.
//!
//! [`SecurityService`] receives sensor, arming and camera events, applies the
//! [`crate::rules`] against the repository and tells listeners what changed.
//!
//! All state-mutating calls serialize through one mutex guarding the repository
//! and the transient cat flag. Notifications raised while the lock is held are
//! buffered and broadcast once it is released. Each operation draws a delivery
//! ticket while it still holds the lock, and broadcasts run in ticket order, so
//! listeners hear about writes in the order they were made.

use std::collections::BTreeSet;
use std::sync::{Arc, Condvar, Mutex, PoisonError, RwLock};

use anyhow::Result;
use catwatch_common::config::{Config, DEFAULT_CONFIDENCE_THRESHOLD};
use catwatch_common::error::SecurityError;
use catwatch_common::image::Image;
use catwatch_common::ports::classifier::ImageClassifier;
use catwatch_common::ports::listener::StatusListener;
use catwatch_common::ports::repository::SecurityRepository;
use catwatch_common::sensor::Sensor;
use catwatch_common::status::{AlarmStatus, ArmingStatus};
use tracing::{debug, info, warn};

use crate::listeners::{AlarmEvent, ListenerRegistry};
use crate::rules;

pub struct SecurityService {
    state: Mutex<EngineState>,
    /// Ticket whose events are being, or are next to be, broadcast.
    serving: Mutex<u64>,
    turn: Condvar,
    classifier: Box<dyn ImageClassifier>,
    listeners: RwLock<ListenerRegistry>,
    confidence_threshold: f32,
}

struct EngineState {
    repository: Box<dyn SecurityRepository>,
    cat_detected: bool,
    next_ticket: u64,
}

impl SecurityService {
    pub fn new(
        repository: Box<dyn SecurityRepository>,
        classifier: Box<dyn ImageClassifier>,
    ) -> Self {
        Self {
            state: Mutex::new(EngineState {
                repository,
                cat_detected: false,
                next_ticket: 0,
            }),
            serving: Mutex::new(0),
            turn: Condvar::new(),
            classifier,
            listeners: RwLock::new(ListenerRegistry::new()),
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }

    pub fn with_config(
        repository: Box<dyn SecurityRepository>,
        classifier: Box<dyn ImageClassifier>,
        cfg: &Config,
    ) -> Self {
        let mut service = Self::new(repository, classifier);
        service.confidence_threshold = cfg.confidence_threshold;
        service
    }

    /// Changes the arming mode.
    ///
    /// Disarming clears any alarm. Arming resets every known sensor to inactive,
    /// and arming at home while a cat is in view raises the alarm first.
    pub fn set_arming_status(&self, arming: ArmingStatus) -> Result<()> {
        self.transact(|tx| tx.set_arming_status(arming))
    }

    /// Switches a sensor on or off and updates the alarm status accordingly.
    ///
    /// Only the identity of `sensor` is used; its current activation is read
    /// from the repository. Fails with [`SecurityError::SensorNotFound`] for
    /// sensors the repository does not know.
    pub fn change_sensor_activation_status(&self, sensor: &Sensor, active: bool) -> Result<()> {
        self.transact(|tx| tx.change_sensor_activation_status(sensor, active))
    }

    /// Runs the classifier on `image` and feeds the verdict to [`Self::cat_detected`].
    ///
    /// The classifier runs outside the state lock. If it fails, nothing changes.
    pub fn process_image(&self, image: &Image) -> Result<()> {
        let cat = self
            .classifier
            .contains_cat(image, self.confidence_threshold)?;
        debug!(cat, threshold = self.confidence_threshold, "Image classified");
        self.cat_detected(cat)
    }

    /// Applies a cat-presence verdict that was obtained elsewhere.
    pub fn cat_detected(&self, cat: bool) -> Result<()> {
        self.transact(|tx| tx.cat_detected(cat))
    }

    /// The only way the alarm status is written. Always notifies listeners.
    pub fn set_alarm_status(&self, status: AlarmStatus) -> Result<()> {
        self.transact(|tx| tx.set_alarm_status(status))
    }

    pub fn add_sensor(&self, sensor: Sensor) -> Result<()> {
        self.with_state(|state| state.repository.add_sensor(sensor))
    }

    pub fn remove_sensor(&self, sensor: &Sensor) -> Result<()> {
        self.with_state(|state| state.repository.remove_sensor(sensor))
    }

    pub fn get_sensors(&self) -> Result<BTreeSet<Sensor>> {
        self.with_state(|state| state.repository.get_sensors())
    }

    pub fn get_alarm_status(&self) -> Result<AlarmStatus> {
        self.with_state(|state| state.repository.get_alarm_status())
    }

    pub fn get_arming_status(&self) -> Result<ArmingStatus> {
        self.with_state(|state| state.repository.get_arming_status())
    }

    /// Last verdict seen by [`Self::cat_detected`].
    pub fn is_cat_detected(&self) -> Result<bool> {
        self.with_state(|state| Ok(state.cat_detected))
    }

    /// Returns `false` if the listener was already registered.
    pub fn add_listener(&self, listener: Arc<dyn StatusListener>) -> bool {
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .add(listener)
    }

    /// Returns `false` if the listener was not registered.
    pub fn remove_listener(&self, listener: &Arc<dyn StatusListener>) -> bool {
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(listener)
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut EngineState) -> Result<T>) -> Result<T> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| SecurityError::StatePoisoned)?;
        f(&mut state)
    }

    /// Runs `f` under the state lock, then delivers whatever it queued, even
    /// when `f` failed halfway: a status that reached the repository is always
    /// announced.
    fn transact<T>(&self, f: impl FnOnce(&mut Transaction<'_>) -> Result<T>) -> Result<T> {
        let (result, events, ticket) = {
            let mut state = self
                .state
                .lock()
                .map_err(|_| SecurityError::StatePoisoned)?;
            let mut tx = Transaction {
                state: &mut *state,
                events: Vec::new(),
            };
            let result = f(&mut tx);
            let events = tx.events;
            if events.is_empty() {
                return result;
            }
            let ticket = state.next_ticket;
            state.next_ticket += 1;
            (result, events, ticket)
        };

        self.deliver(ticket, &events);
        result
    }

    /// Waits until every earlier ticket has been broadcast, then broadcasts
    /// `events`. The state lock is not held here, so listeners may read from
    /// the engine.
    fn deliver(&self, ticket: u64, events: &[AlarmEvent]) {
        let mut serving = self.serving.lock().unwrap_or_else(PoisonError::into_inner);
        while *serving != ticket {
            serving = self
                .turn
                .wait(serving)
                .unwrap_or_else(PoisonError::into_inner);
        }
        drop(serving);

        // Passes the turn on even if a listener panics.
        let _turn = Turn(self);
        let registry = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        registry.broadcast(events);
    }
}

struct Turn<'a>(&'a SecurityService);

impl Drop for Turn<'_> {
    fn drop(&mut self) {
        let mut serving = self.0.serving.lock().unwrap_or_else(PoisonError::into_inner);
        *serving += 1;
        self.0.turn.notify_all();
    }
}

/// One locked unit of work with its pending notifications.
struct Transaction<'a> {
    state: &'a mut EngineState,
    events: Vec<AlarmEvent>,
}

impl Transaction<'_> {
    fn set_alarm_status(&mut self, status: AlarmStatus) -> Result<()> {
        self.state.repository.set_alarm_status(status)?;
        match status {
            AlarmStatus::Alarm => warn!(%status, "Alarm raised"),
            _ => info!(%status, "Alarm status changed"),
        }
        self.events.push(AlarmEvent::StatusChanged(status));
        Ok(())
    }

    fn set_arming_status(&mut self, arming: ArmingStatus) -> Result<()> {
        if let Some(status) = rules::on_arming(arming, self.state.cat_detected) {
            self.set_alarm_status(status)?;
        }

        if arming.is_armed() {
            let snapshot = self.state.repository.get_sensors()?;
            debug!(sensors = snapshot.len(), "Resetting sensors on arming");
            for sensor in &snapshot {
                self.change_sensor_activation_status(sensor, false)?;
            }
        }

        self.state.repository.set_arming_status(arming)?;
        info!(%arming, "Arming status changed");
        Ok(())
    }

    fn change_sensor_activation_status(&mut self, sensor: &Sensor, active: bool) -> Result<()> {
        let sensors = self.state.repository.get_sensors()?;
        let stored = sensors
            .get(sensor)
            .cloned()
            .ok_or_else(|| SecurityError::sensor_not_found(sensor))?;

        if active {
            let arming = self.state.repository.get_arming_status()?;
            let current = self.state.repository.get_alarm_status()?;
            let path = rules::activation_path(arming, current, stored.active);
            debug!(sensor = %stored, %arming, %current, steps = path.len(), "Sensor activated");
            for status in path {
                self.set_alarm_status(status)?;
            }
        } else if stored.active {
            let current = self.state.repository.get_alarm_status()?;
            let others_inactive = sensors
                .iter()
                .filter(|other| !other.same_identity(&stored))
                .all(|other| !other.active);
            debug!(sensor = %stored, %current, others_inactive, "Sensor deactivated");
            if let Some(status) = rules::on_deactivation(current, others_inactive) {
                self.set_alarm_status(status)?;
            }
        }

        let updated = stored.with_active(active);
        self.state.repository.update_sensor(&updated)?;
        self.events.push(AlarmEvent::SensorStatusChanged);
        Ok(())
    }

    fn cat_detected(&mut self, cat: bool) -> Result<()> {
        let arming = self.state.repository.get_arming_status()?;
        // Sensors only matter when no cat is in view.
        let all_inactive = !cat
            && self
                .state
                .repository
                .get_sensors()?
                .iter()
                .all(|sensor| !sensor.active);

        self.state.cat_detected = cat;
        if let Some(status) = rules::on_cat_detected(cat, arming, all_inactive) {
            self.set_alarm_status(status)?;
        }
        self.events.push(AlarmEvent::CatDetected(cat));
        Ok(())
    }
}
