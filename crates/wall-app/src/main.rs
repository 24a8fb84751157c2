mod app_state;
mod cli;
mod input;

use std::path::{Path, PathBuf};

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use wall_config::schema::LogLevel;

/// Crates covered by the default log filter.
const LOG_TARGETS: &[&str] = &[
    "newswall",
    "wall_common",
    "wall_config",
    "wall_core",
    "wall_webview",
];

/// Fallback config location when the platform config dir is unknown.
const FALLBACK_CONFIG: &str = "newswall.toml";

/// Build the log filter: `RUST_LOG`, then either the `--log-level` override
/// or the config's level applied to the workspace crates.
fn log_filter(override_directive: Option<&str>, level: LogLevel) -> EnvFilter {
    let filter = EnvFilter::from_default_env();
    if let Some(directive) = override_directive.and_then(|d| d.parse::<Directive>().ok()) {
        return filter.add_directive(directive);
    }
    LOG_TARGETS
        .iter()
        .filter_map(|target| {
            format!("{target}={}", level.as_str())
                .parse::<Directive>()
                .ok()
        })
        .fold(filter, |filter, directive| filter.add_directive(directive))
}

/// The `[logging]` level from the config file, before logging is up.
fn peek_log_level(path: &Path) -> LogLevel {
    wall_config::toml_loader::load_from_path(path)
        .map(|config| config.logging.level)
        .unwrap_or_default()
}

fn main() {
    let args = cli::parse();

    let config_path = match args.config.as_deref() {
        Some(path) => Ok(PathBuf::from(path)),
        None => wall_config::toml_loader::default_config_path(),
    };

    let level = config_path
        .as_deref()
        .map(peek_log_level)
        .unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(args.log_level.as_deref(), level))
        .init();

    tracing::info!("News Wall v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref directive) = args.log_level {
        if directive.parse::<Directive>().is_err() {
            tracing::warn!("Ignoring invalid --log-level '{directive}'");
        }
    }

    let config_path = config_path.unwrap_or_else(|e| {
        tracing::warn!("{e}, using ./{FALLBACK_CONFIG}");
        PathBuf::from(FALLBACK_CONFIG)
    });
    tracing::info!("Using config: {}", config_path.display());

    // The runtime hosts the config watcher for the lifetime of the app
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("newswall-config")
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create tokio runtime: {e}");
            return;
        }
    };
    let (config, config_rx) =
        runtime.block_on(wall_config::ReloadManager::start(config_path.clone()));

    let registry = input::KeybindRegistry::from_config(&config.keybinds);
    tracing::info!("Keybind registry loaded ({} bindings)", registry.len());

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return;
        }
    };
    let mut app = app_state::NewsWallApp::new(config, registry, config_path)
        .with_config_reload(config_rx, runtime);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
