//! CSV reader for the vehicle taxonomy source file.
//!
//! Expected header: `Make,Model,Model_Variant,Year_Start,Year_End,New_Gens`.
//! `Make` and `Model` are required; the rest may be empty or absent.

use std::fs::File;
use std::path::Path;

use chrono::Datelike;
use serde::Deserialize;

use crate::modules::taxonomy::domain::entities::TaxonomyRecord;
use crate::shared::errors::{SeedError, SeedResult};

const REQUIRED_COLUMNS: [&str; 2] = ["Make", "Model"];

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Make")]
    make: String,
    #[serde(rename = "Model")]
    model: String,
    #[serde(rename = "Model_Variant", default)]
    variant: Option<String>,
    #[serde(rename = "Year_Start", default)]
    year_start: Option<i32>,
    #[serde(rename = "Year_End", default)]
    year_end: Option<i32>,
    #[serde(rename = "New_Gens", default)]
    new_gens: Option<String>,
}

/// Streams a taxonomy CSV file as a finite, non-restartable sequence of
/// records. The first malformed row aborts the whole sequence.
#[derive(Debug)]
pub struct TaxonomyCsvReader {
    inner: csv::Reader<File>,
    current_year: i32,
}

impl TaxonomyCsvReader {
    pub fn open<P: AsRef<Path>>(path: P) -> SeedResult<Self> {
        Self::open_with_current_year(path, chrono::Utc::now().year())
    }

    /// `current_year` is the default for rows with no `Year_End`.
    pub fn open_with_current_year<P: AsRef<Path>>(path: P, current_year: i32) -> SeedResult<Self> {
        let file = File::open(path)?;
        let mut inner = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let headers = inner.headers()?;
        for col in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == col) {
                return Err(SeedError::MissingColumn(col.to_string()));
            }
        }

        Ok(Self {
            inner,
            current_year,
        })
    }

    pub fn records(&mut self) -> impl Iterator<Item = SeedResult<TaxonomyRecord>> + '_ {
        let current_year = self.current_year;
        self.inner
            .deserialize::<RawRow>()
            .enumerate()
            .map(move |(idx, result)| {
                // Header occupies line 1, the first data row is line 2
                let row = idx + 2;
                let raw = result?;
                to_record(raw, row, current_year)
            })
    }
}

/// Read the whole file eagerly. Convenience for the import entry point.
pub fn read_taxonomy_csv<P: AsRef<Path>>(path: P) -> SeedResult<Vec<TaxonomyRecord>> {
    let mut reader = TaxonomyCsvReader::open(path)?;
    reader.records().collect()
}

fn to_record(raw: RawRow, row: usize, current_year: i32) -> SeedResult<TaxonomyRecord> {
    if raw.make.is_empty() {
        return Err(SeedError::InvalidRow {
            row,
            message: "missing Make".to_string(),
        });
    }
    if raw.model.is_empty() {
        return Err(SeedError::InvalidRow {
            row,
            message: "missing Model".to_string(),
        });
    }

    Ok(TaxonomyRecord {
        make: raw.make,
        model: raw.model,
        variant: raw.variant.filter(|v| !v.is_empty()),
        year_start: raw.year_start.unwrap_or(current_year),
        year_end: raw.year_end.unwrap_or(current_year),
        new_gens: raw.new_gens.filter(|v| !v.is_empty()),
    })
}
