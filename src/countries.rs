//! Distinct-country listing, the values behind the country picker.

use anyhow::Result;
use log::info;

use crate::{catalog::Catalog, cli::CountriesArgs, io_utils};

pub fn execute(args: &CountriesArgs) -> Result<()> {
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    let catalog = Catalog::shared(&args.input, encoding);
    if catalog.is_empty() {
        println!("No volcano records loaded.");
        return Ok(());
    }

    let countries = catalog.distinct_countries();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&countries)?);
    } else {
        for country in &countries {
            println!("{country}");
        }
    }
    info!("Listed {} countr(ies)", countries.len());
    Ok(())
}
