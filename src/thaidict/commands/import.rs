use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DictError, Result};
use crate::messages;
use crate::model::Entry;
use crate::store::{DictionaryStore, StorageBackend};
use crate::validation::validate_entry;
use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

/// Add `entries` one at a time.
///
/// Words that already exist are skipped and counted. Any other failure stops
/// the import; entries added before it stay in the dictionary.
pub fn run<B: StorageBackend>(store: &DictionaryStore<B>, entries: &[Entry]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut summary = ImportSummary::default();

    for raw in entries {
        let entry = validate_entry(&raw.english, &raw.thai, raw.category.as_deref())?;
        match store.add(&entry) {
            Ok(()) => summary.imported += 1,
            Err(DictError::DuplicateKey(key)) => {
                debug!(key = %key, "skipping duplicate during import");
                summary.skipped += 1;
                result.add_message(CmdMessage::warning(messages::duplicate(&entry.english)));
            }
            Err(e) => {
                warn!(imported = summary.imported, error = %e, "import aborted");
                return Err(e);
            }
        }
    }

    result.add_message(CmdMessage::success(messages::imported(
        summary.imported,
        summary.skipped,
    )));
    Ok(result.with_import(summary))
}

/// Read entries from a headerless `english,thai[,category]` CSV file.
///
/// A file without a single usable row is an error.
pub fn read_csv(path: &Path) -> Result<Vec<Entry>> {
    let file = File::open(path).map_err(DictError::Io)?;
    let entries = parse_csv(file)?;
    if entries.is_empty() {
        return Err(DictError::NoValidRows(path.display().to_string()));
    }
    Ok(entries)
}

/// Parse `english,thai[,category]` rows.
///
/// Rows with fewer than two columns, or with an empty english or thai cell,
/// are dropped.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Entry>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() < 2 {
            continue;
        }

        let english = record.get(0).unwrap_or_default();
        let thai = record.get(1).unwrap_or_default();
        if english.is_empty() || thai.is_empty() {
            continue;
        }

        let mut entry = Entry::new(english, thai);
        entry.category = record.get(2).filter(|c| !c.is_empty()).map(str::to_string);
        entries.push(entry);
    }

    Ok(entries)
}
