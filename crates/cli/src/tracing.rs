use std::fs::File;
use std::path::PathBuf;
use anyhow::Context;
use clap_verbosity_flag::{LogLevel, Verbosity};
use tracing_subscriber::fmt::Subscriber as FmtSubscriber;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_log::AsTrace;

/// Log to the trace file if one is given, otherwise to stdout without times and levels so that log lines
/// read alongside the shell output.
pub fn configure_tracing<IL: LogLevel>(path: Option<PathBuf>, verbosity: Verbosity<IL>) -> anyhow::Result<()> {
    const SUBSCRIBER_FAILED_MESSAGE: &str = "setting default subscriber failed";
    match path {
        Some(path) => {
            let trace_file: File = File::create(&path)
                .with_context(|| format!("Creating trace file. path: {}", path.display()))?;

            let file_subscriber = FmtSubscriber::builder()
                .with_writer(trace_file)
                .with_ansi(false)
                .with_max_level(verbosity.log_level_filter().as_trace())
                .finish();

            tracing::subscriber::set_global_default(file_subscriber)
                .context(SUBSCRIBER_FAILED_MESSAGE)?;
        },
        _ => {
            let stdout_subscriber = FmtSubscriber::builder()
                .with_level(false)
                .with_target(false)
                .with_line_number(false)
                .with_span_events(FmtSpan::NONE)
                .without_time()
                .with_max_level(verbosity.log_level_filter().as_trace())
                .finish();

            tracing::subscriber::set_global_default(stdout_subscriber)
                .context(SUBSCRIBER_FAILED_MESSAGE)?;
        }
    };

    Ok(())
}
