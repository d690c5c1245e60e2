//! Map-point projection for the geographic scatter view: position plus the
//! tooltip fields the original map displayed.

use std::ops::RangeInclusive;

use anyhow::Result;
use log::info;
use serde::Serialize;

use crate::{catalog::Catalog, cli::MapArgs, io_utils, table};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub name: String,
    pub country: String,
    pub last_eruption: String,
    pub lat: f64,
    pub lon: f64,
}

/// Project the volcanoes active inside `range` down to plottable points.
pub fn map_points(catalog: &Catalog, range: RangeInclusive<i32>) -> Vec<MapPoint> {
    catalog
        .eruptions_in_year_range(range)
        .into_iter()
        .map(|record| MapPoint {
            name: record.name.clone(),
            country: record.country.clone(),
            last_eruption: record.last_eruption.clone(),
            lat: record.lat,
            lon: record.lon,
        })
        .collect()
}

pub fn execute(args: &MapArgs) -> Result<()> {
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    let catalog = Catalog::shared(&args.input, encoding);
    if catalog.is_empty() {
        println!("No volcano records loaded.");
        return Ok(());
    }

    let points = map_points(catalog, args.start..=args.end);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&points)?);
    } else {
        let headers = vec![
            "name".to_string(),
            "country".to_string(),
            "last_eruption".to_string(),
            "lat".to_string(),
            "lon".to_string(),
        ];
        let rows: Vec<Vec<String>> = points
            .iter()
            .map(|point| {
                vec![
                    point.name.clone(),
                    point.country.clone(),
                    point.last_eruption.clone(),
                    format!("{:.3}", point.lat),
                    format!("{:.3}", point.lon),
                ]
            })
            .collect();
        table::print_table(&headers, &rows);
    }
    info!(
        "Plotted {} volcano(es) active between {} and {}",
        points.len(),
        args.start,
        args.end
    );
    Ok(())
}
