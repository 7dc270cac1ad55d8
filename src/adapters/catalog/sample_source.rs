//! Bundled sample catalog. Used when no catalog source is configured.

use crate::domain::LoadError;
use crate::ports::CatalogSource;

const SAMPLE_CATALOG: &str = include_str!("workshops.json");

pub struct SampleCatalogSource;

#[async_trait::async_trait]
impl CatalogSource for SampleCatalogSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        Ok(SAMPLE_CATALOG.to_string())
    }

    fn describe(&self) -> String {
        "bundled sample catalog".to_string()
    }
}
