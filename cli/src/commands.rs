pub mod arm;
pub mod image;
pub mod sensor;
pub mod status;

use std::path::PathBuf;

use catwatch_common::config::{DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_STORE_PATH};
use catwatch_common::sensor::SensorType;
use catwatch_common::status::ArmingStatus;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "catwatch")]
#[command(about = "A home security monitor that knows about cats.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON file holding sensors and status between runs
    #[arg(long, global = true, default_value = DEFAULT_STORE_PATH)]
    pub store: PathBuf,

    /// Classifier confidence (percent) required to report a cat
    #[arg(long, global = true, default_value_t = DEFAULT_CONFIDENCE_THRESHOLD)]
    pub threshold: f32,

    /// Less output. Repeat to only show warnings
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show arming mode, alarm status and sensors
    #[command(alias = "st")]
    Status,
    /// Change the arming mode (home, away, disarmed)
    #[command(alias = "a")]
    Arm { mode: ArmingStatus },
    /// Manage sensors
    #[command(alias = "s")]
    Sensor {
        #[command(subcommand)]
        action: SensorAction,
    },
    /// Feed a raw grayscale frame to the cat detector
    #[command(alias = "i")]
    Image {
        path: PathBuf,
        /// Use the random stand-in classifier instead of the brightness heuristic
        #[arg(long)]
        random: bool,
    },
}

#[derive(Subcommand)]
pub enum SensorAction {
    /// Register a new sensor
    Add { name: String, kind: SensorType },
    /// Forget a sensor
    Remove { name: String, kind: SensorType },
    /// Report a sensor as active or inactive
    Set {
        name: String,
        kind: SensorType,
        state: SensorState,
    },
    /// List known sensors
    List,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SensorState {
    Active,
    Inactive,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
