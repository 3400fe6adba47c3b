use std::io::{self, Write};

use anyhow::Context;
use mcu_core::config::{default_log_filter, APP_NAME, APP_VERSION};
use mcu_core::StoreConfig;
use mcu_cli::{open_store, Session};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so they never interleave with the menu.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    tracing::info!(version = APP_VERSION, "starting {}", APP_NAME);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{} v{}", APP_NAME, APP_VERSION)?;

    let config = StoreConfig::default();
    let store = open_store(config, &mut stdout).context("failed to write to stdout")?;

    let mut session = Session::new(store, stdin.lock(), stdout.lock());
    session.run().context("terminal session failed")?;

    tracing::info!("shutdown complete");
    Ok(())
}
