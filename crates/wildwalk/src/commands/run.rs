use crate::settings::{resolve_path, Settings};
use std::path::Path;
use wildwalk_client::HttpSightingSource;
use wildwalk_core::{TracingLogger, Walker};
use wildwalk_handlers::build_handlers;

pub fn run(config: Option<&Path>, center: Option<(f64, f64)>, cycles: Option<u64>) -> anyhow::Result<()> {
    let path = resolve_path(config)?;
    let mut settings = Settings::load(&path)?;

    if let Some((latitude, longitude)) = center {
        settings.walk.latitude = latitude;
        settings.walk.longitude = longitude;
        settings.walk.steps = None;
    }
    if cycles.is_some() {
        settings.walk.max_cycles = cycles;
    }

    let source = HttpSightingSource::new(&settings.source)?;
    let mut walker = Walker::new(&settings.walk, source, Box::new(TracingLogger))?;

    let handlers = build_handlers(&settings.handlers, &settings.species)?;
    if handlers.is_empty() {
        tracing::warn!("no handlers configured; encounters will only be tracked");
    }
    for handler in handlers {
        walker.add_handler(handler);
    }

    tracing::info!(
        Steps = walker.plan().len(),
        Latitude = settings.walk.latitude,
        Longitude = settings.walk.longitude,
        "starting walk"
    );
    walker.run()?;
    Ok(())
}
