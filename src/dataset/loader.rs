// src/dataset/loader.rs

use crate::dataset::DatasetError;
use crate::domain::{RawListing, COLUMNS};
use csv::{ReaderBuilder, StringRecord};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Reads every file in `dir` as a CSV table and concatenates the rows.
///
/// Files are read in file-name order. Columns are matched by header name, so
/// a file missing a column simply yields missing values for it.
pub fn load_dir(dir: impl AsRef<Path>) -> Result<Vec<RawListing>, DatasetError> {
    let dir = dir.as_ref();

    let entries = fs::read_dir(dir)
        .map_err(|e| DatasetError::Io(dir.display().to_string(), e))?
        .map(|entry| entry.map(|e| e.path()));
    let files = table_files(dir, entries)?;

    let mut rows = Vec::new();
    for path in &files {
        let before = rows.len();
        load_file(path, &mut rows)?;
        tracing::debug!(file = %path.display(), rows = rows.len() - before, "loaded table");
    }

    tracing::info!(files = files.len(), rows = rows.len(), dir = %dir.display(), "📂 dataset loaded");
    Ok(rows)
}

/// Regular files among `entries`, sorted by name. The first entry that
/// could not be read fails the whole listing.
fn table_files(
    dir: &Path,
    entries: impl IntoIterator<Item = io::Result<PathBuf>>,
) -> Result<Vec<PathBuf>, DatasetError> {
    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| DatasetError::Io(dir.display().to_string(), e))?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn load_file(path: &Path, out: &mut Vec<RawListing>) -> Result<(), DatasetError> {
    let csv_err = |e: csv::Error| DatasetError::Csv(path.display().to_string(), e);

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(csv_err)?;

    let headers = reader.headers().map_err(csv_err)?.clone();
    let index: Vec<Option<usize>> = COLUMNS
        .iter()
        .map(|name| headers.iter().position(|h| h.trim() == *name))
        .collect();

    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        out.push(to_listing(&record, &index));
    }

    Ok(())
}

fn to_listing(record: &StringRecord, index: &[Option<usize>]) -> RawListing {
    let field = |col: usize| {
        index[col]
            .and_then(|i| record.get(i))
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    RawListing {
        title: field(0),
        address: field(1),
        bed: field(2),
        bath: field(3),
        toilet: field(4),
        parking_space: field(5),
        price: field(6),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "loader_test_{tag}_{}",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn concatenates_files_in_name_order() {
        let dir = temp_dir("concat");
        fs::write(
            dir.join("b.csv"),
            "title,address,bed,bath,toilet,pkn_space,price\nB,\"Ajah, Lagos\",4,4,5,4,\"₦90,000,000\"\n",
        )
        .unwrap();
        fs::write(
            dir.join("a.csv"),
            "title,address,bed,bath,toilet,pkn_space,price\nA,\"Lekki, Lagos\",3,3,3,3,\"₦35,000,000\"\n",
        )
        .unwrap();

        let rows = load_dir(&dir).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title.as_deref(), Some("A"));
        assert_eq!(rows[1].address.as_deref(), Some("Ajah, Lagos"));
        assert_eq!(rows[1].price.as_deref(), Some("₦90,000,000"));
    }

    #[test]
    fn empty_fields_and_missing_columns_are_missing() {
        let dir = temp_dir("missing");
        fs::write(
            dir.join("data.csv"),
            "title,address,bed,bath,toilet,price\nDuplex,\"Ikoyi, Lagos\",,2,2,100\n",
        )
        .unwrap();

        let rows = load_dir(&dir).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].bed, None);
        assert_eq!(rows[0].parking_space, None);
        assert_eq!(rows[0].price.as_deref(), Some("100"));
    }

    #[test]
    fn unreadable_entry_fails_the_listing() {
        let dir = temp_dir("entries");
        let good = dir.join("a.csv");
        fs::write(&good, "title\n").unwrap();

        let entries = vec![
            Ok(good),
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "entry vanished")),
        ];

        match table_files(&dir, entries) {
            Err(DatasetError::Io(source_dir, err)) => {
                assert_eq!(source_dir, dir.display().to_string());
                assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("expected an io error, got {other:?}"),
        }
    }

    #[test]
    fn listing_skips_subdirectories() {
        let dir = temp_dir("subdirs");
        fs::create_dir_all(dir.join("nested")).unwrap();
        fs::write(dir.join("b.csv"), "title\n").unwrap();
        fs::write(dir.join("a.csv"), "title\n").unwrap();

        let entries = fs::read_dir(&dir).unwrap().map(|e| e.map(|e| e.path()));
        let files = table_files(&dir, entries).unwrap();

        assert_eq!(files, vec![dir.join("a.csv"), dir.join("b.csv")]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = std::env::temp_dir().join("loader_test_does_not_exist_42");
        assert!(matches!(load_dir(&dir), Err(DatasetError::Io(..))));
    }
}
