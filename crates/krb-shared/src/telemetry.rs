//! Bunyan formatted traces for the binaries and the tests

use anyhow::Context;
use std::{
    fs::{create_dir_all, File},
    path::{Path, PathBuf},
};
use tracing::{subscriber::set_global_default, Subscriber};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt::MakeWriter, layer::SubscriberExt, EnvFilter, Registry};

/// Folder trace files are created in, relative to the working directory
pub const TRACE_FOLDER: &str = "traces";

/// Names the traces and picks the filter used when `RUST_LOG` is not set
#[derive(Debug, Clone)]
pub struct TraceSettings {
    pub app_name: String,
    pub default_filter: String,
}

impl TraceSettings {
    pub fn new(app_name: impl Into<String>, default_filter: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            default_filter: default_filter.into(),
        }
    }

    /// Builds a subscriber that writes bunyan JSON lines to `sink`
    ///
    /// See <https://docs.rs/tracing-subscriber/0.3.19/tracing_subscriber/filter/struct.EnvFilter.html#directives>
    /// for the accepted filter directives
    pub fn subscriber<Sink>(&self, sink: Sink) -> impl Subscriber + Sync + Send
    where
        Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.default_filter));
        Registry::default()
            .with(env_filter)
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(self.app_name.clone(), sink))
    }

    /// Creates a new timestamped file in `folder` and returns it with its path
    pub fn create_trace_file(&self, folder: &Path) -> anyhow::Result<(File, PathBuf)> {
        create_dir_all(folder)
            .with_context(|| format!("failed to create trace folder {folder:?}"))?;
        let file_path = folder.join(trace_file_name(&self.app_name));
        let file = File::create(&file_path)
            .with_context(|| format!("failed to create trace file {file_path:?}"))?;
        Ok((file, file_path))
    }
}

/// Sets `subscriber` as the global default and forwards `log` records to it.
///
/// Only succeeds once per process.
pub fn install(subscriber: impl Subscriber + Sync + Send) -> anyhow::Result<()> {
    LogTracer::init().context("failed to set logger")?;
    set_global_default(subscriber).context("failed to set subscriber")?;
    Ok(())
}

fn trace_file_name(app_name: &str) -> String {
    format!(
        "{}_{app_name}.log",
        chrono::Local::now().format("%Y-%m-%dT%H-%M-%S")
    )
}
