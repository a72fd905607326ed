use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use devagency_export::{export, load_config};

#[derive(Parser, Debug)]
#[command(name = "devagency-export")]
#[command(about = "Prerender the DevAgency landing page to static HTML")]
#[command(version)]
struct Args {
    /// Output directory; receives index.html
    #[arg(long, default_value = "dist")]
    out: PathBuf,

    /// TOML file overriding presentation defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// URL of the client bundle's JS module (Trunk output); the page imports
    /// it and calls `init()`. Without it the page is static and fully shown.
    #[arg(long)]
    script: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[devagency-export] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    info!("devagency-export v{}", env!("CARGO_PKG_VERSION"));
    let config = load_config(args.config.as_deref())?;
    export(&config, &args.out, args.script.as_deref())?;
    Ok(())
}
