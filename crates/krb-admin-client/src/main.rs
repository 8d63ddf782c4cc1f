#![warn(clippy::all, rust_2018_idioms)]

use clap::Parser as _;
use krb_admin_client::{cli::Cli, CommandFailed};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(e) = krb_admin_client::tracing::init(&cli) {
        eprintln!("Failed to start tracing: {e}");
    }

    let rt = krb_admin_client::create_runtime()?;
    match rt.block_on(krb_admin_client::run(cli)) {
        Ok(()) => Ok(()),
        // Already shown to the user with the rest of the screen
        Err(e) if e.is::<CommandFailed>() => std::process::exit(1),
        Err(e) => Err(e),
    }
}
