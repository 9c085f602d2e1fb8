use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Initialise logging. The default level is `info`; `debug` can be enabled
/// via the settings file, in which case `RUST_LOG` may override the level.
/// When `file` is given, output is appended to that file instead of stderr.
pub fn init(debug: bool, file: Option<PathBuf>) {
    // Without debug logging `RUST_LOG` is ignored so a stray environment
    // variable cannot turn on verbose output.
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match file.as_ref().and_then(|p| Some((p.parent()?, p.file_name()?))) {
        Some((dir, name)) => {
            let dir = if dir.as_os_str().is_empty() {
                std::path::Path::new(".")
            } else {
                dir
            };
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(name.to_string_lossy())
                .build(dir);
            match appender {
                Ok(appender) => {
                    let _ = builder.with_writer(appender).with_ansi(false).try_init();
                }
                Err(e) => {
                    let _ = builder.with_writer(std::io::stderr).try_init();
                    tracing::warn!(error = %e, "log file unavailable, logging to stderr");
                }
            }
        }
        None => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
    }
}
