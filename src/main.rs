use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use stackbrowse::api::{HttpApi, QueryOptions};
use stackbrowse::cli::{run_command, Cli};
use stackbrowse::config::Config;
use stackbrowse::connectivity::{probe_from_config, ConnectivityProbe};
use stackbrowse::logging::init_tracing;
use stackbrowse::repository::Repository;
use stackbrowse::ui::app::App;
use stackbrowse::ui::runtime;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.load_config()?;
    init_tracing(&config.logging);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        site = %config.api.site,
        "stackbrowse starting"
    );

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| anyhow::anyhow!("failed to start async runtime: {}", e))?;
    let repository = Arc::new(build_repository(&config)?);

    match &cli.command {
        Some(command) => {
            let text = rt.block_on(run_command(&repository, command))?;
            print!("{}", text);
        }
        None => {
            let app = App::new(repository, rt.handle().clone());
            runtime::run(app)?;
        }
    }
    Ok(())
}

fn build_repository(config: &Config) -> anyhow::Result<Repository> {
    let api = HttpApi::new(&config.api)?;
    let probe: Arc<dyn ConnectivityProbe> = Arc::from(probe_from_config(&config.connectivity));
    Ok(Repository::new(
        Arc::new(api),
        probe,
        QueryOptions::from(&config.api),
    ))
}
