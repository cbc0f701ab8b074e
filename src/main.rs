use std::io::IsTerminal;
use std::process::ExitCode;

use singleton_di::{root, SingletonConfig, SETUP_FAILED_MESSAGE};
use tokio::io::{AsyncReadExt, stdin};
use tracing::{error, info};
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt,
    prelude::*,
};

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let config = match SingletonConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            println!("{}", SETUP_FAILED_MESSAGE);
            return ExitCode::FAILURE;
        }
    };

    let exit = match root::run(config.into_options()).await {
        Ok(report) => {
            info!(calls = report.records.len(), "All work completed");
            println!("Press any key to exit...");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            println!("{}", SETUP_FAILED_MESSAGE);
            ExitCode::FAILURE
        }
    };

    wait_for_key().await;
    exit
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(log_filter())
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(std::io::stdout().is_terminal()),
        )
        .init();
}

/// `info` unless `RUST_LOG` says otherwise.
fn log_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
}

/// Blocks until a byte arrives on stdin, unless stdin is not interactive.
async fn wait_for_key() {
    if !std::io::stdin().is_terminal() {
        return;
    }
    let mut buf = [0u8; 1];
    let _ = stdin().read(&mut buf).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn hint_for(rust_log: Option<&str>) -> Option<LevelFilter> {
        match rust_log {
            Some(value) => std::env::set_var(EnvFilter::DEFAULT_ENV, value),
            None => std::env::remove_var(EnvFilter::DEFAULT_ENV),
        }
        let hint = log_filter().max_level_hint();
        std::env::remove_var(EnvFilter::DEFAULT_ENV);
        hint
    }

    #[test]
    #[serial]
    fn filter_defaults_to_info() {
        assert_eq!(hint_for(None), Some(LevelFilter::INFO));
    }

    #[test]
    #[serial]
    fn rust_log_overrides_global_level() {
        assert_eq!(hint_for(Some("warn")), Some(LevelFilter::WARN));
        assert_eq!(hint_for(Some("error")), Some(LevelFilter::ERROR));
        assert_eq!(hint_for(Some("debug")), Some(LevelFilter::DEBUG));
    }
}
