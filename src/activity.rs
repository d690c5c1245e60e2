//! Per-country activity-evidence counts, the data behind the country bar
//! chart of the original dashboard.

use std::collections::HashMap;

use anyhow::Result;
use log::info;
use serde::Serialize;

use crate::{catalog::Catalog, cli::ActivityArgs, io_utils, table};

/// Count records per distinct activity-evidence value for one country.
/// Matching is exact equality against the trimmed country field; records
/// with no recorded evidence are left out.
pub fn activity_counts(catalog: &Catalog, country: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for record in catalog.records() {
        if record.country != country || record.activity_evidence.is_empty() {
            continue;
        }
        *counts.entry(record.activity_evidence.clone()).or_insert(0) += 1;
    }
    counts
}

/// Flatten the counts for display, descending by count with ties broken by
/// evidence value.
pub fn sorted_counts(counts: &HashMap<String, usize>) -> Vec<(String, usize)> {
    let mut items: Vec<(String, usize)> = counts
        .iter()
        .map(|(value, count)| (value.clone(), *count))
        .collect();
    items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    items
}

#[derive(Debug, Serialize)]
struct EvidenceCount {
    evidence: String,
    count: usize,
}

pub fn execute(args: &ActivityArgs) -> Result<()> {
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    let catalog = Catalog::shared(&args.input, encoding);
    if catalog.is_empty() {
        println!("No volcano records loaded.");
        return Ok(());
    }

    let counts = activity_counts(catalog, &args.country);
    if counts.is_empty() {
        println!("No volcanoes recorded for '{}'", args.country);
        return Ok(());
    }

    let items = sorted_counts(&counts);
    if args.json {
        let rows: Vec<EvidenceCount> = items
            .into_iter()
            .map(|(evidence, count)| EvidenceCount { evidence, count })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        let headers = vec!["evidence".to_string(), "count".to_string()];
        let rows: Vec<Vec<String>> = items
            .iter()
            .map(|(value, count)| vec![value.clone(), count.to_string()])
            .collect();
        table::print_table(&headers, &rows);
    }
    info!(
        "Counted {} evidence categor(ies) for '{}'",
        counts.len(),
        args.country
    );
    Ok(())
}
