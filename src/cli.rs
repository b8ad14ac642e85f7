use std::path::PathBuf;

use clap::Parser;

use crate::storage::DEFAULT_STORAGE_FILE;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct DiscrateCli {
    /// The path to the inventory storage file
    #[arg(short, long, default_value = DEFAULT_STORAGE_FILE)]
    pub storage_path: PathBuf,
}
