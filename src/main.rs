use anyhow::{Context, Result};
use clap::Parser;

use cinedex::cli::{self, Cli};
use cinedex::config::Config;
use cinedex::context::AppContext;
use cinedex::logging::init_tracing;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let ctx = {
        let _guard = runtime.enter();
        AppContext::from_config(config)?
    };

    match cli.command {
        Some(command) => runtime.block_on(cli::run(command, &ctx)),
        None => {
            cinedex::ui::run(ctx, runtime.handle().clone()).context("Terminal UI failed")
        }
    }
}
