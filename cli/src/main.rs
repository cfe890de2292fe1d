mod commands;
mod terminal;

use std::sync::Arc;

use catwatch_common::config::Config;
use catwatch_common::ports::classifier::ImageClassifier;
use catwatch_core::classifier::{BrightnessClassifier, RandomClassifier};
use catwatch_core::repository::JsonFileRepository;
use catwatch_core::security::SecurityService;
use commands::{CommandLine, Commands, arm, image, sensor, status};
use terminal::{listener::TerminalListener, logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet)?;

    let cfg = Config {
        store_path: commands.store.clone(),
        quiet: commands.quiet,
        ..Config::default()
    }
    .with_threshold(commands.threshold)?;

    let classifier: Box<dyn ImageClassifier> = match &commands.command {
        Commands::Image { random: true, .. } => Box::new(RandomClassifier::new()),
        _ => Box::new(BrightnessClassifier),
    };
    let repository = JsonFileRepository::open(&cfg.store_path)?;
    let store = repository.path().to_path_buf();
    let service = SecurityService::with_config(Box::new(repository), classifier, &cfg);
    service.add_listener(Arc::new(TerminalListener));

    match commands.command {
        Commands::Status => {
            print::header("system status", cfg.quiet);
            status::status(&service, &store)
        }
        Commands::Arm { mode } => {
            print::header("changing arming mode", cfg.quiet);
            arm::arm(&service, mode)
        }
        Commands::Sensor { action } => {
            print::header("sensors", cfg.quiet);
            sensor::sensor(&service, action)
        }
        Commands::Image { path, .. } => {
            print::header("processing camera frame", cfg.quiet);
            image::image(&service, &path)
        }
    }
}
