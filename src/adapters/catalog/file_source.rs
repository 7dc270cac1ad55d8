//! File catalog source. Reads a local JSON file.

use crate::domain::LoadError;
use crate::ports::CatalogSource;
use std::path::{Path, PathBuf};
use tokio::fs;

pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl CatalogSource for FileCatalogSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        fs::read_to_string(&self.path)
            .await
            .map_err(|e| LoadError::Unreachable(format!("{}: {}", self.path.display(), e)))
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_fetch_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id":"ws1","title":"T","level":"Beginner"}}]"#).unwrap();

        let source = FileCatalogSource::new(file.path());
        let body = source.fetch().await.unwrap();
        assert!(body.contains("\"ws1\""));
    }

    #[tokio::test]
    async fn test_fetch_missing_file_unreachable() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileCatalogSource::new(dir.path().join("workshops.json"));
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, LoadError::Unreachable(_)));
    }
}
