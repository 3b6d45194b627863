use std::env;

use clap::Parser;
use log::error;

use cell_stats::config::{Config, Format};
use cell_stats::loader::load_csv;
use cell_stats::report::Report;
use cell_stats::CellStore;

fn main() {
    let config = Config::parse();
    if config.verbose && env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "debug");
    }
    pretty_env_logger::init();

    if let Err(err) = run(&config) {
        error!("Error reading from CSV: {}", err);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> cell_stats::Result<()> {
    let mut store = CellStore::new();
    load_csv(&config.path, &mut store)?;

    let report = Report::build(&store);
    match config.format {
        Format::Text => println!("{}", report),
        Format::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}
