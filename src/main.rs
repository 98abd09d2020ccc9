use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use modelprobe::connector::api::{Container, ContainerConfig, Router};
use modelprobe::connector::http;
use modelprobe::{Commands, ProviderSettings};

#[derive(Parser)]
#[command(name = "modelprobe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Catalog JSON file; defaults to the bundled catalog
    #[arg(short, long, global = true, env = "MODELPROBE_CATALOG")]
    catalog: Option<PathBuf>,

    /// Timeout for each outbound provider call, in seconds
    #[arg(long, global = true, default_value_t = modelprobe::connector::DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let settings = ProviderSettings::from_env().with_timeout(Duration::from_secs(cli.timeout));
    let container = Container::new(ContainerConfig {
        catalog_path: cli.catalog,
        settings,
    })?;

    match cli.command {
        Commands::Serve { port, host } => {
            let addr: SocketAddr = format!("{host}:{port}")
                .parse()
                .with_context(|| format!("invalid bind address {host}:{port}"))?;
            http::serve(Arc::new(container), addr).await?;
        }
        command => {
            let router = Router::new(&container);
            let output = router.route(command).await?;
            println!("{}", output);
        }
    }

    Ok(())
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn test_connection_requires_api_key() {
        std::env::remove_var("MODELPROBE_API_KEY");
        let res = Cli::try_parse_from(["modelprobe", "test-connection", "gpt-4o"]);
        assert!(res.is_err(), "--api-key should be required");
    }

    #[test]
    fn manual_parses_prompt_and_globals() {
        let cli = Cli::try_parse_from([
            "modelprobe",
            "manual",
            "gpt-4o",
            "--api-key",
            "sk-test",
            "--prompt",
            "hello",
            "--timeout",
            "5",
        ])
        .expect("parses");
        assert_eq!(cli.timeout, 5);
        assert!(matches!(cli.command, Commands::Manual { ref prompt, .. } if prompt == "hello"));
    }

    #[test]
    fn companies_accepts_optional_search() {
        let cli = Cli::try_parse_from(["modelprobe", "companies", "--search", "gpt"])
            .expect("parses");
        assert!(
            matches!(cli.command, Commands::Companies { search: Some(ref term) } if term == "gpt")
        );

        let cli = Cli::try_parse_from(["modelprobe", "companies"]).expect("parses");
        assert!(matches!(cli.command, Commands::Companies { search: None }));
    }
}
