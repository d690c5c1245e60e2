//! Table preview of the first few canonical records.

use anyhow::Result;
use log::info;

use crate::{catalog::Catalog, cli::PreviewArgs, io_utils, table};

pub fn execute(args: &PreviewArgs) -> Result<()> {
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    let catalog = Catalog::shared(&args.input, encoding);
    if catalog.is_empty() {
        println!("No volcano records loaded.");
        return Ok(());
    }

    let headers = vec![
        "number".to_string(),
        "name".to_string(),
        "country".to_string(),
        "region".to_string(),
        "activity_evidence".to_string(),
        "last_eruption".to_string(),
        "lat".to_string(),
        "lon".to_string(),
    ];
    let shown = args.rows.min(catalog.len());
    let rows: Vec<Vec<String>> = catalog.records()[..shown]
        .iter()
        .map(|record| {
            vec![
                record.number.clone(),
                record.name.clone(),
                record.country.clone(),
                record.region.clone(),
                record.activity_evidence.clone(),
                record.last_eruption.clone(),
                format!("{:.3}", record.lat),
                format!("{:.3}", record.lon),
            ]
        })
        .collect();
    table::print_table(&headers, &rows);
    info!(
        "Displayed {} of {} record(s) from '{}'",
        shown,
        catalog.len(),
        args.input.display()
    );
    Ok(())
}
