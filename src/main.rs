use clap::Parser;
use tracing_subscriber::EnvFilter;

use cloudstor::cli;
use cloudstor::cli::Args;
use cloudstor::config::load_storage_config;
use cloudstor::error::Result;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(e) = run_app(args).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_app(args: Args) -> Result<()> {
    let config = load_storage_config()?;
    cli::run(args, config).await?;
    Ok(())
}
