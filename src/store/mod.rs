//! Flat-file record stores.
//!
//! Every store keeps one record per line in a plain text file and rewrites the whole file after
//! each mutation. Keyed stores ([`FlatFile`]) cache the collection in memory; the task list is
//! re-read on every call.

mod employee;
mod task;
mod user;

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use crate::errors::{StoreError, StoreResult};

pub use employee::EmployeeStore;
pub use task::{TaskFile, TaskOutcome};
pub use user::UserStore;

/// A record with a fixed number of delimiter-separated fields on a single line.
pub trait LineRecord: Clone {
    type Key: Ord + Clone;

    const DELIMITER: char;
    /// Field names in on-disk order, used in error messages.
    const FIELDS: &'static [&'static str];

    fn key(&self) -> Self::Key;
    fn from_fields(fields: &[&str]) -> Result<Self, String>;
    fn fields(&self) -> Vec<String>;
}

/// Rejects a value that would split into extra fields or lines when written out.
pub(crate) fn check_field(field: &'static str, value: &str, delimiter: Option<char>) -> StoreResult<()> {
    if value.contains(['\n', '\r']) {
        return Err(StoreError::InvalidField {
            field,
            reason: "must be a single line".into(),
        });
    }
    if let Some(delimiter) = delimiter.filter(|d| value.contains(*d)) {
        return Err(StoreError::InvalidField {
            field,
            reason: format!("must not contain '{}'", delimiter),
        });
    }
    Ok(())
}

/// Reads every line of `path`, or nothing if the file does not exist yet.
/// Each item is the 1-based line number together with the line minus its terminator.
pub(crate) fn read_lines(path: &Path) -> StoreResult<Vec<(usize, String)>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(StoreError::io(path, e)),
    };

    Ok(contents
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .enumerate()
        .map(|(i, line)| (i + 1, line.to_string()))
        .collect())
}

/// Replaces `path` with `lines`, one per line. The data goes to a temporary file next to the
/// target, which is then renamed over it.
pub(crate) fn write_lines<I, S>(path: &Path, lines: I) -> StoreResult<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;

    let temp = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
    {
        let mut writer = BufWriter::new(temp.as_file());
        for line in lines {
            writer
                .write_all(line.as_ref().as_bytes())
                .and_then(|_| writer.write_all(b"\n"))
                .map_err(|e| StoreError::io(path, e))?;
        }
        writer.flush().map_err(|e| StoreError::io(path, e))?;
    }

    temp.persist(path).map_err(|e| StoreError::Persist {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

/// Keyed collection of `R` mirrored to a flat file.
pub struct FlatFile<R: LineRecord> {
    path: PathBuf,
    records: BTreeMap<R::Key, R>,
}

impl<R: LineRecord> FlatFile<R> {
    /// Loads `path`, starting empty when the file is missing. Blank lines are skipped.
    /// A line with the wrong field count or an unparsable field fails the whole load.
    pub fn load(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let delimiter = R::DELIMITER.to_string();
        let mut records = BTreeMap::new();

        for (line_no, line) in read_lines(&path)? {
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(R::DELIMITER).collect();
            if fields.len() != R::FIELDS.len() {
                return Err(StoreError::Malformed {
                    path,
                    line: line_no,
                    reason: format!(
                        "expected {} fields ({}), found {}",
                        R::FIELDS.len(),
                        R::FIELDS.join(delimiter.as_str()),
                        fields.len()
                    ),
                });
            }
            let record = R::from_fields(&fields).map_err(|reason| StoreError::Malformed {
                path: path.clone(),
                line: line_no,
                reason,
            })?;
            records.insert(record.key(), record);
        }

        tracing::debug!("Loaded {} records from {}", records.len(), path.display());
        Ok(Self { path, records })
    }

    pub fn save(&self) -> StoreResult<()> {
        let delimiter = R::DELIMITER.to_string();
        write_lines(
            &self.path,
            self.records.values().map(|r| r.fields().join(delimiter.as_str())),
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &R::Key) -> Option<&R> {
        self.records.get(key)
    }

    pub fn contains(&self, key: &R::Key) -> bool {
        self.records.contains_key(key)
    }

    pub fn values(&self) -> impl Iterator<Item = &R> {
        self.records.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = &R::Key> {
        self.records.keys()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Inserts or replaces `record` and persists. Memory is left unchanged if the write fails.
    pub fn upsert(&mut self, record: R) -> StoreResult<()> {
        Self::validate(&record)?;
        let key = record.key();
        let previous = self.records.insert(key.clone(), record);

        if let Err(e) = self.save() {
            match previous {
                Some(previous) => self.records.insert(key, previous),
                None => self.records.remove(&key),
            };
            return Err(e);
        }
        Ok(())
    }

    /// Removes and persists. A missing key returns `Ok(None)` without touching the file.
    pub fn remove(&mut self, key: &R::Key) -> StoreResult<Option<R>> {
        let Some(removed) = self.records.remove(key) else {
            return Ok(None);
        };

        if let Err(e) = self.save() {
            self.records.insert(key.clone(), removed);
            return Err(e);
        }
        Ok(Some(removed))
    }

    fn validate(record: &R) -> StoreResult<()> {
        for (name, value) in R::FIELDS.iter().zip(record.fields()) {
            check_field(*name, &value, Some(R::DELIMITER))?;
        }
        Ok(())
    }
}
