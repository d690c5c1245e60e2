//! I/O helpers for reading the volcano catalog export.
//!
//! The Smithsonian export is a comma-delimited file with a one-line metadata
//! banner ahead of the header row, encoded in a Latin-1-compatible code page.
//! Readers are therefore built without header interpretation (rows are sliced
//! positionally downstream) and each record is decoded individually.

use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Result, anyhow};
use encoding_rs::{Encoding, WINDOWS_1252};

pub const CATALOG_DELIMITER: u8 = b',';

/// Resolve an encoding label, defaulting to windows-1252 (the superset of
/// latin-1 the catalog export uses).
pub fn resolve_encoding(label: Option<&str>) -> Result<&'static Encoding> {
    if let Some(value) = label {
        Encoding::for_label(value.trim().as_bytes())
            .ok_or_else(|| anyhow!("Unknown encoding '{value}'"))
    } else {
        Ok(WINDOWS_1252)
    }
}

/// Open a positional reader over the catalog export. The banner row has a
/// different field count than the data rows, so the reader is flexible and
/// short rows surface as missing trailing fields.
pub fn open_catalog_reader(path: &Path) -> std::io::Result<csv::Reader<BufReader<File>>> {
    let file = File::open(path)?;
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(false)
        .delimiter(CATALOG_DELIMITER)
        .double_quote(true)
        .flexible(true);
    Ok(builder.from_reader(BufReader::new(file)))
}

pub fn decode_bytes(bytes: &[u8], encoding: &'static Encoding) -> Result<String> {
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        Err(anyhow!(
            "Failed to decode text with encoding {}",
            encoding.name()
        ))
    } else {
        Ok(text.into_owned())
    }
}

pub fn decode_record(record: &csv::ByteRecord, encoding: &'static Encoding) -> Result<Vec<String>> {
    record
        .iter()
        .map(|field| decode_bytes(field, encoding))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::WINDOWS_1252;

    #[test]
    fn resolve_encoding_defaults_to_latin1_superset() {
        assert_eq!(resolve_encoding(None).unwrap(), WINDOWS_1252);
        assert_eq!(resolve_encoding(Some("latin1")).unwrap(), WINDOWS_1252);
        assert!(resolve_encoding(Some("no-such-encoding")).is_err());
    }

    #[test]
    fn decode_bytes_maps_extended_characters() {
        let decoded = decode_bytes(b"Mont Pel\xE9e", WINDOWS_1252).unwrap();
        assert_eq!(decoded, "Mont Pelée");
    }
}
