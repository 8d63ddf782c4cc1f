use std::path::Path;

use anyhow::Context as _;
use krb_shared::telemetry::{self, TraceSettings, TRACE_FOLDER};

use crate::cli::Cli;

/// Traces go to a file under `traces/` unless `--stdout` is given or the file
/// can not be created
pub fn init(cli: &Cli) -> anyhow::Result<()> {
    if !cli.is_to_std_out {
        match init_to_file() {
            Ok(path) => {
                eprintln!("Tracing started to file {path:?}");
                return Ok(());
            }
            Err(e) => eprintln!("Failed to start logging to file: {e:#}"),
        }
    }
    tracing_subscriber::fmt()
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to start tracing: {e}"))
}

fn init_to_file() -> anyhow::Result<std::path::PathBuf> {
    let settings = TraceSettings::new("krb_admin", "info");
    let (file, path) = settings.create_trace_file(Path::new(TRACE_FOLDER))?;
    telemetry::install(settings.subscriber(file)).context("failed to start tracing to file")?;
    Ok(path)
}
