//! Static career catalog loaded once at startup.
//!
//! The catalog is a flat JSON array of career records. Every record carries an
//! `id`, a display `name` and `detail`, and an open-ended set of numeric
//! attributes used by the scorers.

mod record;

pub use record::{CareerId, CareerRecord};

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read career catalog at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("career catalog is not a valid JSON array of records: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable collection of career records in source order.
///
/// Two views are exposed: [`Catalog::records`] is the full sequence and
/// [`Catalog::unique`] drops later records that repeat an earlier name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<Arc<CareerRecord>>,
    unique: Vec<Arc<CareerRecord>>,
}

impl Catalog {
    pub fn new(records: Vec<CareerRecord>) -> Self {
        let records: Vec<Arc<CareerRecord>> = records.into_iter().map(Arc::new).collect();
        let unique = dedup_by_name(&records);
        Self { records, unique }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let records: Vec<CareerRecord> = serde_json::from_reader(reader)?;
        Ok(Self::new(records))
    }

    pub fn records(&self) -> &[Arc<CareerRecord>] {
        &self.records
    }

    pub fn unique(&self) -> &[Arc<CareerRecord>] {
        &self.unique
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn dedup_by_name(records: &[Arc<CareerRecord>]) -> Vec<Arc<CareerRecord>> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut unique = Vec::new();
    for record in records {
        if seen.insert(record.name.as_str()) {
            unique.push(Arc::clone(record));
        }
    }
    unique
}
