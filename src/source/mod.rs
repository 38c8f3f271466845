//! Loading the source collection
//!
//! Items come from a file or stdin in one of three formats:
//!
//! - **json**: an array of `{"id": ..., "name": ...}` objects
//! - **csv**: rows with `id` and `name` headers
//! - **lines**: one name per line, ids are 1-based line numbers
//!
//! Blank lines are skipped in `lines` input but still count toward the
//! numbering, so ids stay stable when a file is edited in place.

mod error;

pub use error::{Result, SourceError};

use crate::select::Item;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Input format for item lists
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// JSON array of items
    Json,
    /// CSV with `id,name` headers
    Csv,
    /// Plain text, one name per line
    Lines,
}

impl SourceFormat {
    /// Infer the format from a file extension
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl FromStr for SourceFormat {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "txt" | "lines" | "list" => Ok(Self::Lines),
            other => Err(SourceError::UnknownFormat(other.to_string())),
        }
    }
}

/// Where the items are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSpec {
    /// A file on disk
    File {
        path: PathBuf,
        format: Option<SourceFormat>,
    },
    /// Standard input
    Stdin { format: SourceFormat },
    /// Built-in sample data
    Demo,
}

impl SourceSpec {
    /// Load the items this spec points at
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the input cannot be read or parsed, or if
    /// a file's format cannot be inferred.
    pub fn load(&self) -> Result<Vec<Item>> {
        match self {
            Self::File { path, format } => load_file(path, *format),
            Self::Stdin { format } => {
                let mut input = String::new();
                std::io::stdin().read_to_string(&mut input)?;
                parse_items(&input, *format)
            }
            Self::Demo => Ok(demo_items()),
        }
    }

    /// Whether loading again can produce different items
    #[must_use]
    pub const fn is_reloadable(&self) -> bool {
        matches!(self, Self::File { .. })
    }
}

/// Load items from a file, inferring the format from its extension
///
/// # Errors
///
/// Returns `SourceError` if the file cannot be read or parsed, or if no
/// format is given and the extension is not recognized.
pub fn load_file(path: &Path, format: Option<SourceFormat>) -> Result<Vec<Item>> {
    let format = match format {
        Some(format) => format,
        None => SourceFormat::from_path(path)
            .ok_or_else(|| SourceError::UnknownFormat(path.display().to_string()))?,
    };

    let input = fs::read_to_string(path)?;
    let items = parse_items(&input, format)?;
    debug!(path = %path.display(), ?format, items = items.len(), "source loaded");
    Ok(items)
}

/// Parse items from text in the given format
///
/// # Errors
///
/// Returns `SourceError` if the text is not valid for `format`.
pub fn parse_items(input: &str, format: SourceFormat) -> Result<Vec<Item>> {
    match format {
        SourceFormat::Json => Ok(serde_json::from_str(input)?),
        SourceFormat::Csv => {
            let mut reader = csv::ReaderBuilder::new()
                .trim(csv::Trim::All)
                .from_reader(input.as_bytes());
            reader
                .deserialize()
                .collect::<std::result::Result<Vec<Item>, _>>()
                .map_err(Into::into)
        }
        SourceFormat::Lines => Ok(input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| Item::new((idx + 1).to_string(), line.trim()))
            .collect()),
    }
}

/// Sample fruit collection
#[must_use]
pub fn demo_items() -> Vec<Item> {
    [
        "Apple",
        "Banana",
        "Cherry",
        "Date",
        "Elderberry",
        "Fig",
        "Grape",
    ]
    .iter()
    .enumerate()
    .map(|(idx, name)| Item::new((idx + 1).to_string(), *name))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_json() {
        let items = parse_items(
            r#"[{"id": "a", "name": "Alpha"}, {"id": "b", "name": "Beta"}]"#,
            SourceFormat::Json,
        )
        .unwrap();
        assert_eq!(items, vec![Item::new("a", "Alpha"), Item::new("b", "Beta")]);
    }

    #[test]
    fn test_parse_json_invalid() {
        let err = parse_items("[{\"id\": 1}]", SourceFormat::Json).unwrap_err();
        assert!(matches!(err, SourceError::JsonError(_)));
    }

    #[test]
    fn test_parse_csv() {
        let items = parse_items("id,name\n1, Apple\n2,Banana\n", SourceFormat::Csv).unwrap();
        assert_eq!(items, vec![Item::new("1", "Apple"), Item::new("2", "Banana")]);
    }

    #[test]
    fn test_parse_csv_missing_column() {
        let err = parse_items("id\n1\n", SourceFormat::Csv).unwrap_err();
        assert!(matches!(err, SourceError::CsvError(_)));
    }

    #[test]
    fn test_parse_lines_keeps_line_numbers() {
        let items = parse_items("Apple\n\n  Cherry  \n", SourceFormat::Lines).unwrap();
        assert_eq!(items, vec![Item::new("1", "Apple"), Item::new("3", "Cherry")]);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            SourceFormat::from_path(Path::new("items.JSON")),
            Some(SourceFormat::Json)
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("items.csv")),
            Some(SourceFormat::Csv)
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("items.txt")),
            Some(SourceFormat::Lines)
        );
        assert_eq!(SourceFormat::from_path(Path::new("items")), None);
    }

    #[test]
    fn test_load_file() {
        let mut file = NamedTempFile::with_suffix(".csv").unwrap();
        writeln!(file, "id,name\n7,Grape").unwrap();

        let items = load_file(file.path(), None).unwrap();
        assert_eq!(items, vec![Item::new("7", "Grape")]);

        let spec = SourceSpec::File {
            path: file.path().to_path_buf(),
            format: None,
        };
        assert!(spec.is_reloadable());
        assert_eq!(spec.load().unwrap(), items);
    }

    #[test]
    fn test_load_file_unknown_extension() {
        let file = NamedTempFile::with_suffix(".dat").unwrap();
        let err = load_file(file.path(), None).unwrap_err();
        assert!(matches!(err, SourceError::UnknownFormat(_)));

        // An explicit format overrides the extension
        assert!(load_file(file.path(), Some(SourceFormat::Lines)).unwrap().is_empty());
    }

    #[test]
    fn test_demo_items() {
        let items = demo_items();
        assert_eq!(items.len(), 7);
        assert_eq!(items[0], Item::new("1", "Apple"));
        assert_eq!(items[6], Item::new("7", "Grape"));
        assert!(!SourceSpec::Demo.is_reloadable());
    }
}
