pub mod activity;
pub mod catalog;
pub mod cli;
pub mod countries;
pub mod data;
pub mod eruptions;
pub mod io_utils;
pub mod map;
pub mod preview;
pub mod query;
pub mod regions;
pub mod table;

use std::{env, sync::OnceLock};

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use crate::cli::{Cli, Commands};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("volcat", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Preview(args) => preview::execute(&args),
        Commands::Eruptions(args) => eruptions::execute(&args),
        Commands::Activity(args) => activity::execute(&args),
        Commands::Regions(args) => regions::execute(&args),
        Commands::Map(args) => map::execute(&args),
        Commands::Countries(args) => countries::execute(&args),
    }
}
