// File-based logging via tracing. Writes to ~/.local/share/scilent/scilent.log.

use tracing_appender::rolling;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Config;

pub fn init(config: &Config) -> anyhow::Result<()> {
    let data_dir = dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("scilent");
    std::fs::create_dir_all(&data_dir)?;

    let file_appender = rolling::never(&data_dir, "scilent.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let directive = format!("scilent={}", config.general.log_level);
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .with(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .init();

    // The guard must outlive the program; leak it so the file writer stays open.
    std::mem::forget(guard);
    Ok(())
}
