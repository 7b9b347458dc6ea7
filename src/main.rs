use clap::Parser;
use txroute::cli::{run_cli, Cli};
use txroute::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    telemetry::init_logging()?;
    run_cli(cli).await
}
