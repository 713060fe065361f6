//! Command line tool converting Ed25519 keys between JSON Web Keys and raw
//! key bytes

use std::io::{self, Write as _};

use clap::Parser;
use ed25519_jwk::{cli::Args, Config};
use tracing::debug;
use tracing_subscriber::filter::EnvFilter;

fn main() -> eyre::Result<()> {
    // logs go to stderr, stdout only carries the result
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::from(Args::parse());

    let mut out = io::stdout().lock();
    if let Err(e) = ed25519_jwk::run(&config, &mut out) {
        debug!(error = ?e, "conversion failed");
        writeln!(out, "{e}")?;
    }
    Ok(())
}
