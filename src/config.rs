//! Command-line configuration for the `canteen` binary.

use crate::persistence::{DataFile, DEFAULT_DATA_FILE};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "canteen", version, about = "Menu and order book for a small canteen")]
pub struct Cli {
    /// JSON file the menu and orders are loaded from and saved to
    #[arg(long, env = "CANTEEN_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// Log filter directives, e.g. `info` or `canteen::orders=debug`
    #[arg(long = "log", env = "RUST_LOG")]
    pub log_filter: Option<String>,
}

impl Cli {
    pub fn data_file(&self) -> DataFile {
        DataFile::new(self.data_file.clone())
    }
}
