//! The in-memory hotel location store and its startup loader.
//!
//! The store is an ordered sequence of hotel id / point pairs, built
//! exactly once from a JSON dataset file and never mutated afterwards.
//! Concurrent readers therefore need no synchronization.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::LoadError;
use crate::types::point::Point;

/// One hotel location: a 32-bit hotel identifier paired with a point.
///
/// Identifiers are taken from the dataset verbatim; they are not
/// guaranteed unique or sorted, and the store does not assume either.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationRecord {
    pub hotel_id: i32,
    pub point: Point,
}

/// Immutable, ordered collection of [`LocationRecord`]s.
///
/// Iteration order is the source order of the dataset; query results
/// inherit it.
#[derive(Debug, Clone)]
pub struct LocationStore {
    records: Vec<LocationRecord>,
}

/// Dataset wire shape. Field casing differs from the RPC payloads
/// (`HotelID`/`Latitude` vs `hotelIds`/`latitude`), so the dataset
/// deserializes through these private shadow structs. Every field is
/// defaulted: a missing field yields a zero value instead of an error,
/// and unknown extra fields are ignored.
#[derive(Debug, Deserialize)]
struct DatasetRecord {
    #[serde(rename = "HotelID", default)]
    hotel_id: i32,
    #[serde(rename = "Point", default)]
    point: DatasetPoint,
}

#[derive(Debug, Default, Deserialize)]
struct DatasetPoint {
    #[serde(rename = "Latitude", default)]
    latitude: f64,
    #[serde(rename = "Longitude", default)]
    longitude: f64,
}

impl LocationStore {
    /// Builds a store from records already in memory.
    pub fn new(records: Vec<LocationRecord>) -> Self {
        Self { records }
    }

    /// Loads the store from a JSON dataset file.
    ///
    /// The file is read fully into memory and deserialized in one
    /// pass, preserving source order. No deduplication, no sorting, no
    /// retries. Both failure modes (unreadable file, malformed
    /// content) are returned to the caller; deciding whether they are
    /// fatal belongs to the process entry point, which keeps this
    /// loader testable.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: Vec<DatasetRecord> =
            serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let records = raw
            .into_iter()
            .map(|r| LocationRecord {
                hotel_id: r.hotel_id,
                point: Point::new(r.point.latitude, r.point.longitude),
            })
            .collect();

        Ok(Self { records })
    }

    /// All records, in dataset order.
    pub fn records(&self) -> &[LocationRecord] {
        &self.records
    }

    /// Number of loaded locations.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod loader_tests {
    use super::*;
    use std::io::Write;

    fn write_dataset(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        file.write_all(content.as_bytes()).expect("write dataset");
        file
    }

    #[test]
    fn test_load_preserves_source_order() {
        let file = write_dataset(
            r#"[
                {"HotelID": 3, "Point": {"Latitude": 37.7867, "Longitude": -122.4112}},
                {"HotelID": 1, "Point": {"Latitude": 37.7854, "Longitude": -122.4005}},
                {"HotelID": 2, "Point": {"Latitude": 37.7834, "Longitude": -122.4071}}
            ]"#,
        );

        let store = LocationStore::load(file.path()).unwrap();
        let ids: Vec<i32> = store.records().iter().map(|r| r.hotel_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_load_keeps_duplicate_ids() {
        let file = write_dataset(
            r#"[
                {"HotelID": 7, "Point": {"Latitude": 1.0, "Longitude": 2.0}},
                {"HotelID": 7, "Point": {"Latitude": 3.0, "Longitude": 4.0}}
            ]"#,
        );

        let store = LocationStore::load(file.path()).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].hotel_id, 7);
        assert_eq!(store.records()[1].hotel_id, 7);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let file = write_dataset(
            r#"[
                {"Point": {"Latitude": 37.7}},
                {"HotelID": 5}
            ]"#,
        );

        let store = LocationStore::load(file.path()).unwrap();
        assert_eq!(store.records()[0].hotel_id, 0);
        assert_eq!(store.records()[0].point.latitude, 37.7);
        assert_eq!(store.records()[0].point.longitude, 0.0);
        assert_eq!(store.records()[1].hotel_id, 5);
        assert_eq!(store.records()[1].point, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let file = write_dataset(
            r#"[{"HotelID": 9, "Name": "The Ritz", "Point": {"Latitude": 1.5, "Longitude": -1.5, "Altitude": 12}}]"#,
        );

        let store = LocationStore::load(file.path()).unwrap();
        assert_eq!(store.records()[0].hotel_id, 9);
        assert_eq!(store.records()[0].point, Point::new(1.5, -1.5));
    }

    #[test]
    fn test_truncated_dataset_fails_to_load() {
        let file = write_dataset(r#"[{"HotelID": 1, "Point": {"Latitude": 37.7"#);

        let err = LocationStore::load(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_fails_to_load() {
        let err = LocationStore::load("no/such/locations.json").unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }
}
