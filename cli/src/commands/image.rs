use std::path::Path;

use anyhow::Context;
use catwatch_common::image::Image;
use catwatch_core::security::SecurityService;

use crate::terminal::print;

pub fn image(service: &SecurityService, path: &Path) -> anyhow::Result<()> {
    let frame = Image::from_file(path)
        .with_context(|| format!("cannot load frame from {}", path.display()))?;
    service.process_image(&frame)?;

    print::alarm_line(service.get_alarm_status()?);
    Ok(())
}
