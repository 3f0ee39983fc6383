pub mod clean;
pub mod csv;
pub mod loader;
pub mod record;
pub mod summary;

pub use clean::{clean, Cleaned, DropReport};
pub use csv::CsvReader;
pub use loader::{load_catalog, parse_catalog, CatalogError, CatalogFormat};
pub use record::{read_json, RawRecord, ReadError};
pub use summary::CatalogSummary;
