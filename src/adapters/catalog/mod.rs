//! Catalog source adapters. Implement CatalogSource.
//!
//! HTTP(S) via reqwest, local JSON files via tokio fs, and a bundled sample catalog.

pub mod file_source;
pub mod http_source;
pub mod sample_source;

pub use file_source::FileCatalogSource;
pub use http_source::HttpCatalogSource;
pub use sample_source::SampleCatalogSource;

use crate::ports::CatalogSource;
use std::sync::Arc;

/// Pick a source for a configured location: URLs go over HTTP, anything else is a file path.
pub fn source_for(location: Option<&str>) -> Arc<dyn CatalogSource> {
    match location.map(str::trim).filter(|s| !s.is_empty()) {
        Some(loc) if loc.starts_with("http://") || loc.starts_with("https://") => {
            Arc::new(HttpCatalogSource::new(loc.to_string()))
        }
        Some(path) => Arc::new(FileCatalogSource::new(path)),
        None => Arc::new(SampleCatalogSource),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_for_location() {
        assert_eq!(
            source_for(Some("https://example.org/workshops.json")).describe(),
            "https://example.org/workshops.json"
        );
        assert_eq!(
            source_for(Some("./workshops.json")).describe(),
            "file ./workshops.json"
        );
        assert_eq!(source_for(Some("  ")).describe(), "bundled sample catalog");
        assert_eq!(source_for(None).describe(), "bundled sample catalog");
    }
}
