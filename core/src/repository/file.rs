use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use catwatch_common::ports::repository::SecurityRepository;
use catwatch_common::sensor::Sensor;
use catwatch_common::status::{AlarmStatus, ArmingStatus};
use tracing::debug;

use super::InMemoryRepository;

/// Pretend database: an [`InMemoryRepository`] mirrored to a JSON file.
pub struct JsonFileRepository {
    path: PathBuf,
    data: InMemoryRepository,
}

impl JsonFileRepository {
    /// Loads the snapshot at `path`. A missing file yields an empty, disarmed store.
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let data = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)
                .with_context(|| format!("corrupt store at {}", path.display()))?,
            Err(e) if e.kind() == ErrorKind::NotFound => InMemoryRepository::default(),
            Err(e) => {
                return Err(e).with_context(|| format!("cannot read store at {}", path.display()));
            }
        };
        debug!(path = %path.display(), "Opened sensor store");
        Ok(Self { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> anyhow::Result<()> {
        let raw = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("cannot write store at {}", self.path.display()))
    }
}

impl SecurityRepository for JsonFileRepository {
    fn add_sensor(&mut self, sensor: Sensor) -> anyhow::Result<()> {
        self.data.add_sensor(sensor)?;
        self.save()
    }

    fn remove_sensor(&mut self, sensor: &Sensor) -> anyhow::Result<()> {
        self.data.remove_sensor(sensor)?;
        self.save()
    }

    fn update_sensor(&mut self, sensor: &Sensor) -> anyhow::Result<()> {
        self.data.update_sensor(sensor)?;
        self.save()
    }

    fn get_sensors(&self) -> anyhow::Result<BTreeSet<Sensor>> {
        self.data.get_sensors()
    }

    fn get_alarm_status(&self) -> anyhow::Result<AlarmStatus> {
        self.data.get_alarm_status()
    }

    fn set_alarm_status(&mut self, status: AlarmStatus) -> anyhow::Result<()> {
        self.data.set_alarm_status(status)?;
        self.save()
    }

    fn get_arming_status(&self) -> anyhow::Result<ArmingStatus> {
        self.data.get_arming_status()
    }

    fn set_arming_status(&mut self, status: ArmingStatus) -> anyhow::Result<()> {
        self.data.set_arming_status(status)?;
        self.save()
    }
}
