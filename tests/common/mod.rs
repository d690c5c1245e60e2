#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::{TempDir, tempdir};

/// Returns the absolute path to a fixture under `tests/data`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

pub const SAMPLE_CATALOG: &str = "volcanoes_sample.csv";

/// Banner and header lines matching the Smithsonian export layout. Tests
/// that build their own catalogs prepend these so rows land at the data
/// offset the loader expects.
pub const CATALOG_PREAMBLE: &str = "Global Volcanism Program | test extract\n\
Volcano Number,Volcano Name,Country,Volcanic Region,Volcanic Subregion,Volcano Landform,Primary Volcano Type,Activity Evidence,Last Known Eruption,Latitude,Longitude,Elevation (m),Tectonic Setting,Dominant Rock Type\n";

/// Scratch directory helper that cleans up files automatically on drop.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    /// Creates a fresh scratch directory for the current test case.
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("temp dir"),
        }
    }

    /// Returns the root path for all files owned by this workspace.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes `contents` into a file under the workspace and returns the path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        let mut file = File::create(&path).expect("create temp file");
        file.write_all(contents.as_bytes())
            .expect("write temp file contents");
        path
    }

    /// Raw-byte variant for non-UTF-8 (latin-1) fixtures.
    pub fn write_bytes(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents).expect("write temp file bytes");
        path
    }

    /// Writes a catalog file: the standard preamble followed by `rows`.
    pub fn write_catalog(&self, name: &str, rows: &[&str]) -> PathBuf {
        let mut contents = String::from(CATALOG_PREAMBLE);
        for row in rows {
            contents.push_str(row);
            contents.push('\n');
        }
        self.write(name, &contents)
    }
}
