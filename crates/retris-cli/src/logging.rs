use std::{fs::File, path::Path};

use anyhow::Context as _;
use log::LevelFilter;

/// Sends log records to `log_file`, filtered at `level` and then by `RUST_LOG`.
///
/// The terminal belongs to the game screen, so without a file nothing is logged.
pub(crate) fn init(log_file: Option<&Path>, level: LevelFilter) -> anyhow::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("failed to initialize logger")?;
    Ok(())
}
