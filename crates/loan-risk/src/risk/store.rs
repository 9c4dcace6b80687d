use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::info;

use super::domain::{ClientId, ClientRecord};

/// Read-only table of client feature rows keyed by identifier.
///
/// Built once from a CSV source with a header row. The identifier column is
/// removed from the schema; every other column becomes a numeric feature in
/// header order.
#[derive(Debug, Clone)]
pub struct ClientRecordStore {
    id_column: String,
    schema: Vec<String>,
    records: BTreeMap<ClientId, ClientRecord>,
    loaded_at: DateTime<Utc>,
}

impl ClientRecordStore {
    pub fn from_path<P: AsRef<Path>>(path: P, id_column: &str) -> Result<Self, ClientStoreError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, id_column)
    }

    pub fn from_reader<R: Read>(reader: R, id_column: &str) -> Result<Self, ClientStoreError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let id_index = headers
            .iter()
            .position(|header| header == id_column)
            .ok_or_else(|| MalformedSourceError::MissingIdColumn {
                column: id_column.to_string(),
            })?;
        let schema: Vec<String> = headers
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != id_index)
            .map(|(_, header)| header.to_string())
            .collect();

        let mut records = BTreeMap::new();
        for (index, row) in csv_reader.records().enumerate() {
            let row = row?;
            let line = row
                .position()
                .map(|position| position.line())
                .unwrap_or(index as u64 + 2);

            if row.len() != headers.len() {
                return Err(MalformedSourceError::FieldCount {
                    line,
                    expected: headers.len(),
                    found: row.len(),
                }
                .into());
            }

            let raw_id = &row[id_index];
            let id = raw_id
                .parse::<i64>()
                .map(ClientId)
                .map_err(|_| MalformedSourceError::InvalidId {
                    line,
                    value: raw_id.to_string(),
                })?;

            let mut features = Vec::with_capacity(schema.len());
            for (index, (column, value)) in headers.iter().zip(row.iter()).enumerate() {
                if index == id_index {
                    continue;
                }
                let feature =
                    parse_feature(value).ok_or_else(|| MalformedSourceError::InvalidFeature {
                        line,
                        column: column.to_string(),
                        value: value.to_string(),
                    })?;
                features.push(feature);
            }

            match records.entry(id) {
                Entry::Occupied(_) => {
                    return Err(MalformedSourceError::DuplicateId { line, id }.into());
                }
                Entry::Vacant(slot) => {
                    slot.insert(ClientRecord { id, features });
                }
            }
        }

        info!(
            clients = records.len(),
            features = schema.len(),
            id_column,
            "client records loaded"
        );

        Ok(Self {
            id_column: id_column.to_string(),
            schema,
            records,
            loaded_at: Utc::now(),
        })
    }

    pub fn get(&self, id: ClientId) -> Option<&ClientRecord> {
        self.records.get(&id)
    }

    pub fn known_ids(&self) -> BTreeSet<ClientId> {
        self.records.keys().copied().collect()
    }

    /// Records in ascending identifier order.
    pub fn records(&self) -> impl Iterator<Item = &ClientRecord> + '_ {
        self.records.values()
    }

    pub fn feature(&self, id: ClientId, name: &str) -> Option<f64> {
        let index = self.schema.iter().position(|column| column == name)?;
        self.get(id).map(|record| record.features[index])
    }

    pub fn schema(&self) -> &[String] {
        &self.schema
    }

    pub fn id_column(&self) -> &str {
        &self.id_column
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

fn parse_feature(value: &str) -> Option<f64> {
    if value.is_empty() {
        return Some(f64::NAN);
    }
    value.parse::<f64>().ok()
}

/// Failure to build a [`ClientRecordStore`].
#[derive(Debug, thiserror::Error)]
pub enum ClientStoreError {
    #[error("failed to read client source: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid client CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed client source: {0}")]
    Malformed(#[from] MalformedSourceError),
}

/// The source parsed as CSV but does not describe a valid client table.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MalformedSourceError {
    #[error("identifier column '{column}' is missing from the header")]
    MissingIdColumn { column: String },
    #[error("line {line}: identifier '{value}' is not an integer")]
    InvalidId { line: u64, value: String },
    #[error("line {line}: identifier {id} appears more than once")]
    DuplicateId { line: u64, id: ClientId },
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: column '{column}' holds non-numeric value '{value}'")]
    InvalidFeature {
        line: u64,
        column: String,
        value: String,
    },
}
