use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about = "Explore the Smithsonian Holocene volcano catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Preview the first few catalog records in a formatted table
    Preview(PreviewArgs),
    /// List volcanoes whose last eruption falls inside a year range
    Eruptions(EruptionsArgs),
    /// Count activity-evidence categories for one country
    Activity(ActivityArgs),
    /// Cross-tabulate eruption counts by region and historical period
    Regions(RegionsArgs),
    /// Emit map points for volcanoes active in a year range
    Map(MapArgs),
    /// List the distinct countries present in the catalog
    Countries(CountriesArgs),
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Catalog CSV export to read
    #[arg(short = 'i', long = "input", default_value = "volcanoes.csv")]
    pub input: PathBuf,
    /// Character encoding of the input file (defaults to latin-1)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
    /// Number of records to display
    #[arg(long, default_value_t = 10)]
    pub rows: usize,
}

#[derive(Debug, Args)]
pub struct EruptionsArgs {
    /// Catalog CSV export to read
    #[arg(short = 'i', long = "input", default_value = "volcanoes.csv")]
    pub input: PathBuf,
    /// Character encoding of the input file (defaults to latin-1)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
    /// First eruption year of the range, inclusive
    #[arg(long, default_value_t = 2000)]
    pub start: i32,
    /// Last eruption year of the range, inclusive
    #[arg(long, default_value_t = 2025)]
    pub end: i32,
    /// Limit the number of rows displayed
    #[arg(long)]
    pub limit: Option<usize>,
    /// Emit matching records as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ActivityArgs {
    /// Country to analyze, matched exactly against the catalog
    pub country: String,
    /// Catalog CSV export to read
    #[arg(short = 'i', long = "input", default_value = "volcanoes.csv")]
    pub input: PathBuf,
    /// Character encoding of the input file (defaults to latin-1)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
    /// Emit the counts as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct RegionsArgs {
    /// Catalog CSV export to read
    #[arg(short = 'i', long = "input", default_value = "volcanoes.csv")]
    pub input: PathBuf,
    /// Character encoding of the input file (defaults to latin-1)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
    /// Emit the cross-tab as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct MapArgs {
    /// Catalog CSV export to read
    #[arg(short = 'i', long = "input", default_value = "volcanoes.csv")]
    pub input: PathBuf,
    /// Character encoding of the input file (defaults to latin-1)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
    /// First eruption year of the range, inclusive
    #[arg(long, default_value_t = 2015)]
    pub start: i32,
    /// Last eruption year of the range, inclusive
    #[arg(long, default_value_t = 2025)]
    pub end: i32,
    /// Emit the points as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct CountriesArgs {
    /// Catalog CSV export to read
    #[arg(short = 'i', long = "input", default_value = "volcanoes.csv")]
    pub input: PathBuf,
    /// Character encoding of the input file (defaults to latin-1)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
    /// Emit the list as JSON instead of plain lines
    #[arg(long)]
    pub json: bool,
}
