use crate::status::AlarmStatus;

/// Observer of the alarm engine.
///
/// Notifications are delivered after the engine has released its state lock,
/// in the order the underlying writes were made. Implementations may read from
/// the engine, but must not call its state-changing methods from inside a
/// notification: that call would wait for the broadcast it is part of.
pub trait StatusListener: Send + Sync {
    fn on_status_changed(&self, status: AlarmStatus);
    fn on_cat_detected(&self, cat_detected: bool);
    fn on_sensor_status_changed(&self);
}
