//! Reader for the comma-separated UN/LOCODE code list.
//!
//! Rows come in two shapes. A country-header row (`,"DE",,".GERMANY"`) switches the
//! country every following row belongs to. A location row carries at least
//! [`MIN_LOCATION_FIELDS`] fields and becomes one [`Location`].
//!
//! The published code lists are not always UTF-8. Fields that do not decode as
//! UTF-8 are read as Latin-1, so `K\xf6ln` becomes `Köln`.

use super::errors::IngestError;
use crate::domain::locode::entity::Location;
use csv::{ByteRecord, ReaderBuilder};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Location rows shorter than this are skipped.
pub const MIN_LOCATION_FIELDS: usize = 11;

const ADMIN_CODE: usize = 1;
const LOCATION_CODE: usize = 2;
const NAME: usize = 3;
const ALT_NAME: usize = 4;
const COORDINATES: usize = 10;

/// Country the parser is currently attributing rows to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseContext {
    pub country_code: String,
    pub country_name: String,
}

/// Result of parsing one source.
#[derive(Debug, Default)]
pub struct ParseOutcome {
    pub locations: Vec<Location>,
    /// Rows dropped for having fewer than [`MIN_LOCATION_FIELDS`] fields.
    pub skipped: usize,
    /// Country-header rows seen.
    pub headers: usize,
}

/// Stateful row parser. The country context survives between calls, so one
/// parser fed several sources carries the last header of a source into the next.
#[derive(Debug, Default)]
pub struct LocodeParser {
    context: ParseContext,
}

impl LocodeParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn context(&self) -> &ParseContext {
        &self.context
    }

    /// Forget the current country.
    pub fn reset(&mut self) {
        self.context = ParseContext::default();
    }

    pub fn parse_path(&mut self, path: &Path) -> Result<ParseOutcome, IngestError> {
        let file = File::open(path).map_err(|source| IngestError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse_reader(BufReader::new(file), path)
    }

    /// Parse rows from `reader`. `source` is only used for errors and logs.
    pub fn parse_reader<R: Read>(
        &mut self,
        reader: R,
        source: &Path,
    ) -> Result<ParseOutcome, IngestError> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut outcome = ParseOutcome::default();
        let mut raw = ByteRecord::new();
        let mut row: u64 = 0;

        loop {
            row += 1;
            let more = rdr
                .read_byte_record(&mut raw)
                .map_err(|source_err| IngestError::MalformedRecord {
                    path: source.to_path_buf(),
                    row,
                    source: source_err,
                })?;
            if !more {
                break;
            }
            let record: Vec<String> = raw.iter().map(decode_field).collect();

            if is_country_header(&record) {
                self.context.country_code = record[1].to_string();
                self.context.country_name = normalize_country_name(&record[3]);
                outcome.headers += 1;
                continue;
            }

            if record.len() < MIN_LOCATION_FIELDS {
                tracing::debug!(
                    source = %source.display(),
                    row,
                    fields = record.len(),
                    "Skipping incomplete record: {:?}",
                    record
                );
                outcome.skipped += 1;
                continue;
            }

            if self.context.country_code.is_empty() && !record[ADMIN_CODE].is_empty() {
                self.context.country_code = record[ADMIN_CODE].to_string();
            }

            outcome.locations.push(Location::new(
                &self.context.country_code,
                &self.context.country_name,
                &record[ADMIN_CODE],
                &record[LOCATION_CODE],
                &record[NAME],
                &record[ALT_NAME],
                &record[COORDINATES],
            ));
        }

        tracing::info!(
            source = %source.display(),
            locations = outcome.locations.len(),
            skipped = outcome.skipped,
            headers = outcome.headers,
            "Parsed source"
        );
        Ok(outcome)
    }
}

/// `,"XX",,"Country name"` with nothing else required.
fn is_country_header(record: &[String]) -> bool {
    let empty = |i: usize| record.get(i).is_some_and(|f| f.is_empty());
    let filled = |i: usize| record.get(i).is_some_and(|f| !f.is_empty());

    record.len() > 1 && empty(0) && filled(1) && empty(2) && filled(3)
}

/// UTF-8 when valid, otherwise Latin-1.
fn decode_field(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}

/// Lowercase and drop periods: `".GERMANY"` becomes `"germany"`.
pub fn normalize_country_name(raw: &str) -> String {
    raw.replace('.', "").to_lowercase()
}
