use std::io;

use clap::Parser;
use discrate::{cli::DiscrateCli, repl::Repl};
use miette::Result;
use tracing::Level;

fn main() -> Result<()> {
    let cli = DiscrateCli::parse();

    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .init();

    let stdin = io::stdin();
    let mut repl = Repl::new(stdin.lock(), io::stdout(), cli.storage_path);
    repl.run()?;

    Ok(())
}
