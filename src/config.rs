use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// Load a phone specification csv and print weight and launch analytics.
#[derive(Debug, Parser)]
#[command(name = "cell-stats", version)]
pub struct Config {
    /// Csv file with one phone per row.
    #[arg(default_value = "cells.csv")]
    pub path: PathBuf,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Log at debug level when RUST_LOG is not set.
    #[arg(short, long)]
    pub verbose: bool,
}
