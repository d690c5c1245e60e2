//! Year-range eruption listing, the data behind the frequency histogram of
//! the original dashboard.

use anyhow::Result;
use log::info;

use crate::{catalog::Catalog, cli::EruptionsArgs, io_utils, table};

pub fn execute(args: &EruptionsArgs) -> Result<()> {
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    let catalog = Catalog::shared(&args.input, encoding);
    if catalog.is_empty() {
        println!("No volcano records loaded.");
        return Ok(());
    }

    let matches = catalog.eruptions_in_year_range(args.start..=args.end);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
    } else {
        let headers = vec![
            "name".to_string(),
            "country".to_string(),
            "region".to_string(),
            "last_eruption".to_string(),
            "year".to_string(),
            "elevation_km".to_string(),
        ];
        let shown = args.limit.unwrap_or(matches.len()).min(matches.len());
        let rows: Vec<Vec<String>> = matches[..shown]
            .iter()
            .map(|record| {
                vec![
                    record.name.clone(),
                    record.country.clone(),
                    record.region.clone(),
                    record.last_eruption.clone(),
                    record
                        .eruption_year
                        .map_or_else(String::new, |y| y.to_string()),
                    record
                        .elevation_km
                        .map_or_else(String::new, |km| format!("{km:.3}")),
                ]
            })
            .collect();
        table::print_table(&headers, &rows);
        if shown < matches.len() {
            println!("... {} more row(s) not shown", matches.len() - shown);
        }
        println!(
            "{} eruption(s) between {} and {}",
            matches.len(),
            args.start,
            args.end
        );
        if let Some((min, max)) = catalog.eruption_year_bounds() {
            println!("Catalog eruption years span {min} to {max}");
        }
    }
    info!(
        "Matched {} of {} record(s) in [{}, {}]",
        matches.len(),
        catalog.len(),
        args.start,
        args.end
    );
    Ok(())
}
