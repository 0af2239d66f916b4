use anyhow::Context;
use std::env;
use std::fs;
use std::io;
use std::path::Path;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

pub const LOG_FILE: &str = "ao_log.txt";

/// Initialize console and session file logging.
///
/// `RUST_LOG` wins when set; otherwise `info` with the overrider at `debug`.
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_to(Path::new(LOG_FILE))
}

pub fn init_logging_to(log_path: &Path) -> anyhow::Result<()> {
    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let enable_backtrace = env::var("RUST_BACKTRACE").map(|v| v == "1").unwrap_or(false);

    // One log per session
    if let Err(e) = fs::remove_file(log_path) {
        if e.kind() != io::ErrorKind::NotFound {
            eprintln!("Warning: Failed to remove existing {}: {}", log_path.display(), e);
        }
    }
    let log_file = fs::File::create(log_path)
        .with_context(|| format!("Failed to create {}", log_path.display()))?;

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(&log_level).add_directive("slv_ao=debug".parse()?),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_span_events(FmtSpan::CLOSE)
                .with_target(true)
                .with_thread_names(true)
                .with_ansi(true),
        )
        .with(
            fmt::layer()
                .with_writer(log_file)
                .with_span_events(FmtSpan::CLOSE)
                .with_target(true)
                .with_thread_ids(true)
                .with_thread_names(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false),
        )
        .try_init()
        .context("A global tracing subscriber is already installed")?;

    std::panic::set_hook(Box::new(move |panic_info| {
        tracing::error!("Panic occurred: {}", panic_info);

        if let Some(location) = panic_info.location() {
            tracing::error!(
                "Panic location: {}:{}:{}",
                location.file(),
                location.line(),
                location.column()
            );
        }

        if enable_backtrace {
            tracing::error!("Backtrace:\n{:?}", std::backtrace::Backtrace::capture());
        }
    }));

    tracing::info!("Logging initialized with level: {}", log_level);
    tracing::info!("File logging enabled: {}", log_path.display());
    Ok(())
}

/// Log the environment the overrider runs in.
pub fn log_system_info() {
    tracing::info!("=== System Information ===");
    tracing::info!("OS: {}", env::consts::OS);
    tracing::info!("Architecture: {}", env::consts::ARCH);
    tracing::info!("{} {}", crate::APP_NAME, crate::VERSION);
    tracing::info!("==========================");
}
