//! token-sync
//!
//! Regenerates `tokens.css`, `tokens.ts` and `tokens.json` from the token
//! document exported by Tokens Studio. Runs with no arguments from the
//! repository root.

use std::{io::IsTerminal, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use token_sync_core::{
    sync::{DEFAULT_INPUT, DEFAULT_OUT_DIR},
    SyncConfig,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Generate stylesheet, TypeScript and JSON artifacts from design tokens
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Token document exported from the design tool
    #[arg(long, env = "TOKEN_SYNC_INPUT", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Directory that receives the generated files
    #[arg(long, env = "TOKEN_SYNC_OUT_DIR", default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_ansi(std::io::stdout().is_terminal()))
        .init();

    let config = SyncConfig {
        input: args.input,
        out_dir: args.out_dir,
    };
    let report = token_sync_core::sync(&config)
        .with_context(|| format!("token sync from {} failed", config.input.display()))?;

    info!(
        primitive = report.counts.primitive,
        light = report.counts.light,
        dark = report.counts.dark,
        total = report.counts.total(),
        "token sync complete"
    );
    Ok(())
}
