use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::clean::{clean, Cleaned};
use crate::csv::CsvReader;
use crate::record::{read_json, ReadError};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog not found: {}. Fetch the product data first.", .0.display())]
    NotFound(PathBuf),
    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error in {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: ReadError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Csv,
    Json,
}

impl CatalogFormat {
    /// `.json` files are JSON, everything else is read as CSV
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => CatalogFormat::Json,
            _ => CatalogFormat::Csv,
        }
    }
}

/// Parse and clean catalog source text
pub fn parse_catalog(source: &str, format: CatalogFormat) -> Result<Cleaned, ReadError> {
    let records = match format {
        CatalogFormat::Csv => CsvReader::parse(source)?,
        CatalogFormat::Json => read_json(source)?,
    };
    Ok(clean(records))
}

/// Load a catalog file, choosing the format by extension
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Cleaned, CatalogError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CatalogError::NotFound(path.to_path_buf()),
        _ => CatalogError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let cleaned = parse_catalog(&source, CatalogFormat::from_path(path)).map_err(|e| CatalogError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    info!(path = %path.display(), items = cleaned.catalog.len(), "Catalog loaded");
    if cleaned.dropped.total() > 0 {
        warn!(
            incomplete = cleaned.dropped.incomplete,
            non_positive = cleaned.dropped.non_positive,
            duplicates = cleaned.dropped.duplicates,
            "Dropped invalid catalog records"
        );
    }
    Ok(cleaned)
}
