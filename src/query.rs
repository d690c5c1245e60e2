//! Read-only query operations over a loaded [`Catalog`].

use std::ops::RangeInclusive;

use itertools::Itertools;

use crate::catalog::{Catalog, VolcanoRecord};

/// Year window the default eruption views cover.
pub const DEFAULT_ERUPTION_RANGE: RangeInclusive<i32> = 2000..=2025;

impl Catalog {
    /// Records whose derived eruption year falls inside `range`, inclusive
    /// on both ends. Records without an eruption year never match.
    pub fn eruptions_in_year_range(&self, range: RangeInclusive<i32>) -> Vec<&VolcanoRecord> {
        self.records()
            .iter()
            .filter(|r| r.eruption_year.is_some_and(|y| range.contains(&y)))
            .collect()
    }

    /// The default recent window, 2000 through 2025.
    pub fn recent_eruptions(&self) -> Vec<&VolcanoRecord> {
        self.eruptions_in_year_range(DEFAULT_ERUPTION_RANGE)
    }

    /// Minimum and maximum eruption year across the catalog, or `None` when
    /// no record carries a year.
    pub fn eruption_year_bounds(&self) -> Option<(i32, i32)> {
        let mut years = self.records().iter().filter_map(|r| r.eruption_year);
        let first = years.next()?;
        Some(years.fold((first, first), |(min, max), y| (min.min(y), max.max(y))))
    }

    /// Distinct non-empty country values, sorted. Populates country pickers.
    pub fn distinct_countries(&self) -> Vec<String> {
        self.records()
            .iter()
            .map(|r| r.country.as_str())
            .filter(|c| !c.is_empty())
            .sorted()
            .dedup()
            .map(str::to_string)
            .collect()
    }
}
