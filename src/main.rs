//! Landsat Dashboard Server
//!
//! Run with: cargo run --bin landsat-dashboard
//!
//! # Configuration
//!
//! Loaded from `--config`, or the first of
//! `~/.config/landsat-dashboard/config.toml`,
//! `/etc/landsat-dashboard/config.toml` and `./config.toml`.
//! Environment variables (`LANDSAT_HOST`, `LANDSAT_PORT`, `LANDSAT_SEED`, ...)
//! override file values, and command-line flags override both.
//! `RUST_LOG` overrides the configured log level.

use clap::Parser;
use landsat_dashboard::api::{serve, AppState};
use landsat_dashboard::config::{Config, LoggingConfig};
use std::path::PathBuf;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used while the configured one is not yet known
const BOOTSTRAP_FILTER: &str = "landsat_dashboard=info";

#[derive(Parser)]
#[command(name = "landsat-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve the Landsat data dashboard")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Fixed seed for the simulated data
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Config problems are logged through a temporary subscriber
    let config = tracing::subscriber::with_default(bootstrap_subscriber(std::io::stderr), || {
        load_config(&args)
    })?;

    init_tracing(&config.logging);

    tracing::info!(
        "Starting Landsat dashboard v{}",
        env!("CARGO_PKG_VERSION")
    );
    tracing::info!("Default section: {}", config.render.default_section);
    match config.render.seed {
        Some(seed) => tracing::info!("Simulated data seed: {}", seed),
        None => tracing::info!("Simulated data re-drawn on every render"),
    }

    let state = AppState::from_config(&config);
    serve(state).await?;

    tracing::info!("Landsat dashboard stopped");
    Ok(())
}

/// Config file (or default locations), then environment, then flags
fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if args.seed.is_some() {
        config.render.seed = args.seed;
    }
    Ok(config)
}

fn bootstrap_subscriber<W>(writer: W) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| BOOTSTRAP_FILTER.into()),
        )
        .with_writer(writer)
        .finish()
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.filter_directive().into());

    let registry = tracing_subscriber::registry().with(filter);
    if logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tempfile::NamedTempFile;

    /// Collects everything the subscriber writes
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_invalid_env_overrides_are_logged() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[render]\nseed = 7").unwrap();
        let path = file.path().to_string_lossy().to_string();

        std::env::set_var("LANDSAT_PORT", "notaport");
        std::env::set_var("LANDSAT_SEED", "xyz");

        let captured = Captured::default();
        let args = Args::parse_from(["landsat-dashboard", "--config", &path, "--port", "18765"]);
        let config = tracing::subscriber::with_default(bootstrap_subscriber(captured.clone()), || {
            load_config(&args)
        })
        .unwrap();

        std::env::remove_var("LANDSAT_PORT");
        std::env::remove_var("LANDSAT_SEED");

        assert_eq!(config.server.port, 18765);
        assert_eq!(config.render.seed, Some(7));

        let logs = captured.text();
        assert!(logs.contains("Ignoring invalid LANDSAT_PORT: notaport"), "{}", logs);
        assert!(logs.contains("Ignoring invalid LANDSAT_SEED: xyz"), "{}", logs);
    }

    #[test]
    fn test_flags_override_config() {
        let args = Args::parse_from(["landsat-dashboard", "--host", "127.0.0.1", "--seed", "3"]);
        let config = load_config(&args).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.render.seed, Some(3));
    }
}
