//!
//! Setup logging subsystem.
//!

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{filter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config;

/// Guard holding the non-blocking log writers; logs are flushed until it is
/// dropped.
#[derive(Debug)]
pub struct TelemetryGuard {
    _log_guards: Vec<WorkerGuard>,
}

///
/// Setup logging sub-system.
/// Expects the log config and the list of names of crates to watch on the
/// console output. The `RUST_LOG` environment variable overrides the config
/// settings.
///
pub fn setup<Str: AsRef<str>>(
    conf: &config::Log,
    _service_name: &str,
    crates_to_watch: Vec<Str>,
) -> TelemetryGuard {
    let mut guards = Vec::new();

    let file_layer = if conf.file.enabled {
        let mut path = crate::env::workspace_path();
        path.push(&conf.file.path);
        let file_appender = tracing_appender::rolling::hourly(&path, &conf.file.file_name);
        let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
        guards.push(guard);

        let file_filter = filter::Targets::new().with_default(conf.file.level.into_level());
        let file_layer = fmt::layer()
            .json()
            .with_writer(file_writer)
            .with_filter(file_filter);

        Some(file_layer)
    } else {
        None
    };

    let subscriber = tracing_subscriber::registry().with(file_layer).with(
        EnvFilter::builder()
            .with_default_directive(tracing::Level::TRACE.into())
            .from_env_lossy(),
    );

    if conf.console.enabled {
        let (console_writer, guard) = tracing_appender::non_blocking(std::io::stdout());
        guards.push(guard);

        let level = conf.console.level.into_level();
        let mut console_filter = filter::Targets::new().with_default(tracing::Level::WARN);
        for watched_crate in crates_to_watch {
            console_filter = console_filter.with_target(watched_crate.as_ref(), level);
        }

        match conf.console.log_format {
            config::LogFormat::Default => {
                let logging_layer = fmt::layer()
                    .with_timer(fmt::time::time())
                    .pretty()
                    .with_writer(console_writer);

                subscriber
                    .with(logging_layer.with_filter(console_filter))
                    .init();
            }
            config::LogFormat::Json => {
                let logging_layer = fmt::layer().json().with_writer(console_writer);

                subscriber
                    .with(logging_layer.with_filter(console_filter))
                    .init();
            }
        }
    } else {
        subscriber.init();
    }

    TelemetryGuard {
        _log_guards: guards,
    }
}
