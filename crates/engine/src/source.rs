//! Record sources
//!
//! A source produces one record collection, once, when a view mounts.
//! Fetch failures are never retried: `load_or_fallback` logs and hands back
//! the caller's static fixture instead.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use safetysync_core::{Error, Record, Result};

use crate::collection::RecordCollection;

/// Anything that can produce a record collection
pub trait RecordSource<R> {
    /// Fetch all records
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be read or decoded.
    fn fetch(&self) -> Result<Vec<R>>;

    /// Short description for logs
    fn describe(&self) -> String;
}

/// Records decoded from a JSON array file (REST API shape, camelCase)
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Source reading `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileSource { path: path.into() }
    }

    /// File path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<R: DeserializeOwned> RecordSource<R> for JsonFileSource {
    fn fetch(&self) -> Result<Vec<R>> {
        let bytes = std::fs::read(&self.path)?;
        let records: Vec<R> = serde_json::from_slice(&bytes).map_err(|e| {
            Error::SerializationError(format!("{}: {}", self.path.display(), e))
        })?;
        debug!(path = %self.path.display(), count = records.len(), "loaded records");
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fixed records held in memory (fixtures, tests)
#[derive(Debug, Clone)]
pub struct StaticSource<R> {
    records: Vec<R>,
}

impl<R> StaticSource<R> {
    /// Source that always yields `records`
    pub fn new(records: Vec<R>) -> Self {
        StaticSource { records }
    }
}

impl<R: Clone> RecordSource<R> for StaticSource<R> {
    fn fetch(&self) -> Result<Vec<R>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("{} static records", self.records.len())
    }
}

/// Fetch from `source` into a collection with unique ids
///
/// # Errors
///
/// Returns fetch errors and `DuplicateId` if the source repeats an id.
pub fn load_collection<R, S>(source: &S) -> Result<RecordCollection<R>>
where
    R: Record,
    S: RecordSource<R> + ?Sized,
{
    RecordCollection::from_records(source.fetch()?)
}

/// Fetch from `source`, substituting `fallback` on any failure
///
/// The failure is logged at warn level and not returned.
pub fn load_or_fallback<R, S>(source: &S, fallback: Vec<R>) -> Vec<R>
where
    S: RecordSource<R> + ?Sized,
{
    match source.fetch() {
        Ok(records) => records,
        Err(e) => {
            warn!(
                source = %source.describe(),
                error = %e,
                fallback = fallback.len(),
                "record fetch failed, using fallback"
            );
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use safetysync_core::{Certificate, Employee};
    use std::io::Write;

    struct Failing;

    impl RecordSource<Employee> for Failing {
        fn fetch(&self) -> Result<Vec<Employee>> {
            Err(Error::storage("backend unavailable"))
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    fn write_json(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_json_file_source_reads_api_shape() {
        let file = write_json(
            r#"[{"id": 1, "employeeId": 7, "certificateName": "Forklift",
                 "issueDate": "2024-01-10", "expirationDate": "2026-01-10"}]"#,
        );
        let source = JsonFileSource::new(file.path());
        let certs: Vec<Certificate> = source.fetch().unwrap();
        assert_eq!(certs.len(), 1);
        assert_eq!(certs[0].title, "Forklift");
    }

    #[test]
    fn test_json_file_source_missing_file() {
        let source = JsonFileSource::new("/nonexistent/safetysync/employees.json");
        let result: Result<Vec<Employee>> = source.fetch();
        assert!(matches!(result, Err(Error::IoError(_))));
    }

    #[test]
    fn test_json_file_source_bad_json_names_file() {
        let file = write_json("[{\"id\": 1");
        let source = JsonFileSource::new(file.path());
        let err = RecordSource::<Employee>::fetch(&source).unwrap_err();
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_load_or_fallback_uses_fixture_on_failure() {
        let fixture = vec![Employee::new(1u64, "Fixture", "f@x", "Ops")];
        let records = load_or_fallback(&Failing, fixture.clone());
        assert_eq!(records, fixture);
    }

    #[test]
    fn test_load_or_fallback_prefers_source() {
        let source = StaticSource::new(vec![Employee::new(2u64, "Live", "l@x", "Ops")]);
        let records = load_or_fallback(&source, Vec::new());
        assert_eq!(records[0].name, "Live");
    }

    #[test]
    fn test_load_collection_rejects_duplicates() {
        let source = StaticSource::new(vec![
            Employee::new(1u64, "a", "a", "d"),
            Employee::new(1u64, "b", "b", "d"),
        ]);
        assert!(matches!(
            load_collection(&source),
            Err(Error::DuplicateId { .. })
        ));
    }
}
