use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use termfolio::config::{Config, ConfigStore, ThemeMode};
use termfolio::logging::{init_tracing, LogMode};
use termfolio::server::{ContactServer, CredentialSource, RelayMailer};

/// Terminal portfolio with a working contact form.
#[derive(Parser, Debug)]
#[command(name = "termfolio", version, about)]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Contact endpoint URL the form posts to
    #[arg(long)]
    endpoint: Option<String>,

    /// Also run the contact endpoint in-process and point the form at it
    #[arg(long)]
    serve_embedded: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run only the contact endpoint
    Serve {
        /// Listen address, e.g. 0.0.0.0:8787
        #[arg(long)]
        bind: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for ThemeMode {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => ThemeMode::Dark,
            ThemeArg::Light => ThemeMode::Light,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let store = load_config(&cli)?;

    match cli.command {
        Some(Command::Serve { .. }) => {
            init_tracing(LogMode::Server);
            serve(store).await
        }
        None => {
            init_tracing(LogMode::Tui);
            if cli.serve_embedded {
                run_embedded(store).await
            } else {
                run_tui(store).await
            }
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<ConfigStore> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    let store = ConfigStore::new(config, path);

    store.update(|config| {
        if let Some(theme) = cli.theme {
            config.site.theme = theme.into();
        }
        if let Some(endpoint) = &cli.endpoint {
            config.contact.endpoint = endpoint.clone();
        }
        if let Some(Command::Serve { bind: Some(bind) }) = &cli.command {
            config.server.bind_addr = bind.clone();
        }
    });
    store.get().validate().context("Invalid command line override")?;
    Ok(store)
}

fn build_server(config: &Config) -> anyhow::Result<ContactServer> {
    let mailer = RelayMailer::new(
        config.server.relay_url.clone(),
        Duration::from_secs(u64::from(config.contact.timeout_seconds)),
    )
    .context("Failed to build mail relay client")?;
    Ok(ContactServer::new(
        &config.server,
        Arc::new(mailer),
        CredentialSource::Env,
    ))
}

async fn serve(store: ConfigStore) -> anyhow::Result<()> {
    let config = store.get();
    let mut server = build_server(&config)?;
    server
        .try_bind(&config.server.bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    let handle = server.handle();

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupt received, shutting down");
        }
        handle.shutdown();
    });

    server.run().await.map_err(|e| anyhow::anyhow!(e))
}

async fn run_tui(store: ConfigStore) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Handle::current();
    tokio::task::spawn_blocking(move || termfolio::ui::run(store, runtime))
        .await
        .context("UI thread panicked")??;
    Ok(())
}

async fn run_embedded(store: ConfigStore) -> anyhow::Result<()> {
    let config = store.get();
    let mut server = build_server(&config)?;
    server
        .try_bind(&config.server.bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    let url = server.contact_url();
    store.update(|config| config.contact.endpoint = url);

    let handle = server.handle();
    let server_task = tokio::spawn(server.run());

    let result = run_tui(store).await;

    handle.shutdown();
    match server_task.await {
        Ok(Err(err)) => tracing::error!(error = %err, "Embedded contact endpoint failed"),
        Err(err) => tracing::error!(error = %err, "Embedded contact endpoint panicked"),
        Ok(Ok(())) => {}
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tui_overrides() {
        let cli = Cli::try_parse_from([
            "termfolio",
            "--theme",
            "light",
            "--endpoint",
            "http://localhost:9000/api/contact",
        ])
        .unwrap();
        assert_eq!(cli.theme, Some(ThemeArg::Light));
        assert_eq!(
            cli.endpoint.as_deref(),
            Some("http://localhost:9000/api/contact")
        );
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_serve_with_bind() {
        let cli = Cli::try_parse_from(["termfolio", "serve", "--bind", "0.0.0.0:9000"]).unwrap();
        match cli.command {
            Some(Command::Serve { bind }) => assert_eq!(bind.as_deref(), Some("0.0.0.0:9000")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn config_flag_is_global() {
        let cli =
            Cli::try_parse_from(["termfolio", "serve", "--config", "/tmp/termfolio.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/termfolio.toml")));
    }

    #[test]
    fn rejects_unknown_theme() {
        assert!(Cli::try_parse_from(["termfolio", "--theme", "sepia"]).is_err());
    }

    #[test]
    fn overrides_are_applied_and_validated() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from([
            "termfolio",
            "--config",
            dir.path().join("missing.toml").to_str().unwrap(),
            "--theme",
            "light",
        ])
        .unwrap();
        let store = load_config(&cli).unwrap();
        assert_eq!(store.get().site.theme, ThemeMode::Light);

        let cli = Cli::try_parse_from([
            "termfolio",
            "--config",
            dir.path().join("missing.toml").to_str().unwrap(),
            "serve",
            "--bind",
            "not-an-address",
        ])
        .unwrap();
        assert!(load_config(&cli).is_err());
    }
}
