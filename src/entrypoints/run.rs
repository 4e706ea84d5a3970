use super::cli::{get_env, parse_args};
use super::metadata::log_version_info;
use crate::app::{GeoAlongApp, settings::Settings};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Install the tracing subscriber.
///
/// `RUST_LOG` wins, then `LOG_LEVEL`, then the level implied by `--verbose`.
fn setup_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = get_env::<String>("LOG_LEVEL").unwrap_or_else(|| settings.log_level().to_string());
        EnvFilter::new(level)
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Native entry point
pub fn native_main() -> ExitCode {
    let settings = match parse_args::<Settings>() {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    setup_logging(&settings);
    log_version_info();

    let app = GeoAlongApp::new(settings);
    let stdout = std::io::stdout();
    match app.run(&mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
