//! The in-memory volcano catalog: positional CSV ingest, field coercion and
//! derivation, and the process-lifetime shared table.
//!
//! The catalog is built once and never mutated; every query is a projection
//! or filter over [`Catalog::records`]. A missing source file is the one
//! recoverable failure: [`Catalog::load_or_empty`] reports it and the views
//! gate on [`Catalog::is_empty`] instead of aborting.

use std::{
    path::{Path, PathBuf},
    sync::OnceLock,
};

use anyhow::{Context, Result};
use encoding_rs::Encoding;
use log::{error, info};
use serde::Serialize;
use thiserror::Error;

use crate::{data, io_utils};

/// Canonical column names in export order. Position, not header text,
/// determines meaning.
pub const COLUMN_NAMES: [&str; 14] = [
    "Volcano_Number",
    "Name",
    "Country",
    "Region",
    "Subregion",
    "Landform",
    "Primary_Type",
    "Activity_Evidence",
    "Last_Eruption",
    "Lat",
    "Lon",
    "Elevation_m",
    "Tectonic_Setting",
    "Dominant_Rock_Type",
];

/// Field positions within a data row.
mod col {
    pub const NUMBER: usize = 0;
    pub const NAME: usize = 1;
    pub const COUNTRY: usize = 2;
    pub const REGION: usize = 3;
    pub const SUBREGION: usize = 4;
    pub const LANDFORM: usize = 5;
    pub const PRIMARY_TYPE: usize = 6;
    pub const ACTIVITY_EVIDENCE: usize = 7;
    pub const LAST_ERUPTION: usize = 8;
    pub const LAT: usize = 9;
    pub const LON: usize = 10;
    pub const ELEVATION_M: usize = 11;
    pub const TECTONIC_SETTING: usize = 12;
    pub const DOMINANT_ROCK_TYPE: usize = 13;
}

/// Rows ahead of the data: the metadata banner and the header row.
const DATA_START_ROW: usize = 2;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("volcano catalog not found at '{}'", .0.display())]
    SourceNotFound(PathBuf),
}

/// One volcano, with coerced and derived fields. Text columns keep their
/// raw value; only `country` is trimmed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VolcanoRecord {
    pub number: String,
    pub name: String,
    pub country: String,
    pub region: String,
    pub subregion: String,
    pub landform: String,
    pub primary_type: String,
    pub activity_evidence: String,
    pub last_eruption: String,
    pub lat: f64,
    pub lon: f64,
    pub elevation_m: Option<f64>,
    pub elevation_km: Option<f64>,
    pub eruption_year: Option<i32>,
    pub tectonic_setting: String,
    pub dominant_rock_type: String,
}

impl VolcanoRecord {
    /// Build a record from one positionally-sliced row, or `None` when the
    /// row has no usable coordinates.
    fn from_fields(fields: &[String]) -> Option<VolcanoRecord> {
        let field = |idx: usize| fields.get(idx).map(String::as_str).unwrap_or("");
        let lat = data::parse_optional_f64(field(col::LAT))?;
        let lon = data::parse_optional_f64(field(col::LON))?;
        let elevation_m = data::parse_optional_f64(field(col::ELEVATION_M));
        let last_eruption = field(col::LAST_ERUPTION).to_string();
        Some(VolcanoRecord {
            number: field(col::NUMBER).to_string(),
            name: field(col::NAME).to_string(),
            country: field(col::COUNTRY).trim().to_string(),
            region: field(col::REGION).to_string(),
            subregion: field(col::SUBREGION).to_string(),
            landform: field(col::LANDFORM).to_string(),
            primary_type: field(col::PRIMARY_TYPE).to_string(),
            activity_evidence: field(col::ACTIVITY_EVIDENCE).to_string(),
            eruption_year: data::parse_year_prefix(&last_eruption),
            last_eruption,
            lat,
            lon,
            elevation_km: elevation_m.map(|m| m / 1000.0),
            elevation_m,
            tectonic_setting: field(col::TECTONIC_SETTING).to_string(),
            dominant_rock_type: field(col::DOMINANT_ROCK_TYPE).to_string(),
        })
    }
}

/// The immutable volcano table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<VolcanoRecord>,
}

impl Catalog {
    pub fn from_records(records: Vec<VolcanoRecord>) -> Catalog {
        Catalog { records }
    }

    /// Load the catalog export at `path`. Rows missing either coordinate are
    /// dropped; other malformed fields degrade to absent values.
    pub fn load(path: &Path, encoding: &'static Encoding) -> Result<Catalog> {
        let mut reader = io_utils::open_catalog_reader(path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                anyhow::Error::new(CatalogError::SourceNotFound(path.to_path_buf()))
            } else {
                anyhow::Error::new(err).context(format!("Opening catalog {path:?}"))
            }
        })?;

        let mut records = Vec::new();
        let mut dropped = 0usize;
        for (row_idx, record) in reader.byte_records().enumerate() {
            if row_idx < DATA_START_ROW {
                // banner and header rows carry no catalog data
                continue;
            }
            let record = record.with_context(|| format!("Reading row {}", row_idx + 1))?;
            let fields = io_utils::decode_record(&record, encoding)
                .with_context(|| format!("Decoding row {}", row_idx + 1))?;
            match VolcanoRecord::from_fields(&fields) {
                Some(volcano) => records.push(volcano),
                None => dropped += 1,
            }
        }
        info!(
            "Loaded {} volcano record(s) from '{}' ({} dropped without coordinates)",
            records.len(),
            path.display(),
            dropped
        );
        Ok(Catalog { records })
    }

    /// Recovery wrapper around [`Catalog::load`]: any failure is reported to
    /// the log and replaced with an empty catalog so the caller can keep
    /// going and gate display on emptiness.
    pub fn load_or_empty(path: &Path, encoding: &'static Encoding) -> Catalog {
        match Catalog::load(path, encoding) {
            Ok(catalog) => catalog,
            Err(err) => {
                error!("{err:#}; continuing with an empty catalog");
                Catalog::default()
            }
        }
    }

    /// Process-wide memoized load. The first call reads the file; every
    /// later call returns the same cached table regardless of arguments.
    pub fn shared(path: &Path, encoding: &'static Encoding) -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| Catalog::load_or_empty(path, encoding))
    }

    pub fn records(&self) -> &[VolcanoRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_names_match_the_field_positions() {
        assert_eq!(COLUMN_NAMES.len(), 14);
        assert_eq!(COLUMN_NAMES[col::COUNTRY], "Country");
        assert_eq!(COLUMN_NAMES[col::LAST_ERUPTION], "Last_Eruption");
        assert_eq!(COLUMN_NAMES[col::LAT], "Lat");
        assert_eq!(COLUMN_NAMES[col::LON], "Lon");
        assert_eq!(COLUMN_NAMES[col::ELEVATION_M], "Elevation_m");
        assert_eq!(COLUMN_NAMES[col::DOMINANT_ROCK_TYPE], "Dominant_Rock_Type");
    }

    fn fields(values: [&str; 14]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn rows_without_usable_coordinates_yield_no_record() {
        let mut row = fields([
            "211020", "Vesuvius", "Italy", "Mediterranean", "Italy", "Composite",
            "Stratovolcano(es)", "Eruption Observed", "1944 CE", "", "14.426", "1281",
            "Subduction zone", "Phonolite",
        ]);
        assert!(VolcanoRecord::from_fields(&row).is_none());
        row[col::LAT] = "40.821".to_string();
        row[col::LON] = "not a number".to_string();
        assert!(VolcanoRecord::from_fields(&row).is_none());
    }

    #[test]
    fn derived_fields_are_computed_per_row() {
        let row = fields([
            "211020", "Vesuvius", "  Italy  ", "Mediterranean", "Italy", "Composite",
            "Stratovolcano(es)", "Eruption Observed", "1944 CE", "40.821", "14.426", "1281",
            "Subduction zone", "Phonolite",
        ]);
        let record = VolcanoRecord::from_fields(&row).expect("record");
        assert_eq!(record.country, "Italy");
        assert_eq!(record.eruption_year, Some(1944));
        assert_eq!(record.elevation_m, Some(1281.0));
        assert_eq!(record.elevation_km, Some(1.281));
        assert_eq!(record.last_eruption, "1944 CE");
    }
}
