mod app_state;
mod boot;
mod cli;
mod command;

use labshell_common::SandboxId;
use labshell_layout::{MemoryStore, SessionStore};
use tracing::Instrument;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = cli::parse();

    // Settings are read before logging exists; failures are reported below
    let loaded = labshell_config::load_settings(args.settings.as_deref());
    let level = loaded
        .as_ref()
        .map(|s| s.logging.level.to_ascii_lowercase())
        .unwrap_or_else(|_| "info".to_string());

    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| format!("labshell={level}"));
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "labshell=info".parse().unwrap()),
            ),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("labshell v{} starting...", env!("CARGO_PKG_VERSION"));

    let settings = loaded.unwrap_or_else(|e| {
        tracing::warn!("Settings load failed, using defaults: {e}");
        labshell_config::ShellSettings::default()
    });

    let config = match boot::load_lab(&args) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Lab config unavailable: {e}");
            std::process::exit(1);
        }
    };

    let store = boot::open_store(&args, &settings.layout.storage_key).unwrap_or_else(|e| {
        tracing::warn!("Session file unusable, keeping session in memory: {e}");
        Box::new(MemoryStore::new()) as Box<dyn SessionStore>
    });

    let span = match SandboxId::from_hostname(&args.host) {
        Some(id) => tracing::info_span!("lab", sandbox = %id),
        None => tracing::info_span!("lab", host = %args.host),
    };

    let shell = span.in_scope(|| {
        app_state::LabShell::launch(app_state::Launch {
            config,
            settings,
            config_path: args.config.clone(),
            width: args.width,
            base_url: args.base_url.clone(),
            host: args.host.clone(),
            store,
        })
    });

    shell.run().instrument(span).await;
    tracing::info!("Shutdown complete");
}
