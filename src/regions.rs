//! Region-by-period eruption cross-tabulation.

use std::collections::BTreeMap;

use anyhow::Result;
use log::info;
use serde_json::json;

use crate::{catalog::Catalog, cli::RegionsArgs, io_utils, table};

/// Fixed historical periods eruption years are bucketed into. The first
/// four buckets are half-open; the last one includes 2025.
pub const PERIOD_LABELS: [&str; 5] = [
    "pre-1800",
    "1800-1899",
    "1900-1949",
    "1950-1999",
    "2000-2025",
];

/// Bucket index for an eruption year, or `None` outside every period.
pub fn period_index(year: i32) -> Option<usize> {
    match year {
        0..=1799 => Some(0),
        1800..=1899 => Some(1),
        1900..=1949 => Some(2),
        1950..=1999 => Some(3),
        2000..=2025 => Some(4),
        _ => None,
    }
}

/// Eruption counts per (region, period). Only records with both a region
/// and a bucketable eruption year contribute; every row carries all five
/// period columns, zero-filled.
pub fn region_period_counts(catalog: &Catalog) -> BTreeMap<String, [usize; PERIOD_LABELS.len()]> {
    let mut counts: BTreeMap<String, [usize; PERIOD_LABELS.len()]> = BTreeMap::new();
    for record in catalog.records() {
        if record.region.is_empty() {
            continue;
        }
        let Some(year) = record.eruption_year else {
            continue;
        };
        let Some(bucket) = period_index(year) else {
            continue;
        };
        counts.entry(record.region.clone()).or_default()[bucket] += 1;
    }
    counts
}

pub fn execute(args: &RegionsArgs) -> Result<()> {
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    let catalog = Catalog::shared(&args.input, encoding);
    if catalog.is_empty() {
        println!("No volcano records loaded.");
        return Ok(());
    }

    let counts = region_period_counts(catalog);
    if args.json {
        let rows: Vec<serde_json::Value> = counts
            .iter()
            .map(|(region, buckets)| {
                let mut row = serde_json::Map::new();
                row.insert("region".to_string(), json!(region));
                for (label, count) in PERIOD_LABELS.iter().zip(buckets) {
                    row.insert((*label).to_string(), json!(count));
                }
                serde_json::Value::Object(row)
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        let mut headers = vec!["region".to_string()];
        headers.extend(PERIOD_LABELS.iter().map(|label| (*label).to_string()));
        let rows: Vec<Vec<String>> = counts
            .iter()
            .map(|(region, buckets)| {
                let mut row = vec![region.clone()];
                row.extend(buckets.iter().map(|count| count.to_string()));
                row
            })
            .collect();
        table::print_table(&headers, &rows);
    }
    info!("Cross-tabulated {} region(s)", counts.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VolcanoRecord;

    fn rec(region: &str, year: Option<i32>) -> VolcanoRecord {
        VolcanoRecord {
            region: region.to_string(),
            eruption_year: year,
            ..VolcanoRecord::default()
        }
    }

    #[test]
    fn period_boundaries_match_the_fixed_buckets() {
        assert_eq!(period_index(0), Some(0));
        assert_eq!(period_index(1799), Some(0));
        assert_eq!(period_index(1800), Some(1));
        assert_eq!(period_index(1899), Some(1));
        assert_eq!(period_index(1900), Some(2));
        assert_eq!(period_index(1949), Some(2));
        assert_eq!(period_index(1950), Some(3));
        assert_eq!(period_index(1999), Some(3));
        assert_eq!(period_index(2000), Some(4));
        assert_eq!(period_index(2025), Some(4));
        assert_eq!(period_index(-1), None);
        assert_eq!(period_index(2026), None);
        assert_eq!(period_index(7300), None);
    }

    #[test]
    fn single_record_lands_in_one_zero_filled_row() {
        let catalog = Catalog::from_records(vec![rec("Indonesia", Some(1920))]);
        let counts = region_period_counts(&catalog);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts["Indonesia"], [0, 0, 1, 0, 0]);
    }

    #[test]
    fn records_without_region_or_year_are_excluded() {
        let catalog = Catalog::from_records(vec![
            rec("", Some(1920)),
            rec("Indonesia", None),
            rec("Indonesia", Some(2024)),
        ]);
        let counts = region_period_counts(&catalog);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts["Indonesia"], [0, 0, 0, 0, 1]);
    }

    #[test]
    fn unbucketable_years_produce_no_row() {
        // a 4-digit prefix of a BCE date parses as a large year outside
        // every period
        let catalog = Catalog::from_records(vec![rec("Indonesia", Some(7300))]);
        assert!(region_period_counts(&catalog).is_empty());
    }

    #[test]
    fn regions_accumulate_across_periods() {
        let catalog = Catalog::from_records(vec![
            rec("Japan and Kuril Islands", Some(1707)),
            rec("Japan and Kuril Islands", Some(1914)),
            rec("Japan and Kuril Islands", Some(2024)),
            rec("Indonesia", Some(1883)),
        ]);
        let counts = region_period_counts(&catalog);
        assert_eq!(counts["Japan and Kuril Islands"], [1, 0, 1, 0, 1]);
        assert_eq!(counts["Indonesia"], [0, 1, 0, 0, 0]);
        // BTreeMap iteration keeps regions sorted for display
        let regions: Vec<&String> = counts.keys().collect();
        assert_eq!(regions, ["Indonesia", "Japan and Kuril Islands"]);
    }
}
