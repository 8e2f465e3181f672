use std::fs;
use std::path::{Path, PathBuf};

use crate::books::domain::model::BookRecord;
use crate::catalog::repository::CatalogRepository;
use crate::core::library::{CatalogError, CatalogResult};

// Persists the catalog as a pretty-printed JSON array at a fixed path. The
// file is assumed to be exclusively owned by this process; a crash mid-write
// can corrupt it, which load() reports as a Corruption error.
#[derive(Debug)]
pub struct JsonFileRepository {
    storage_path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(storage_path: &Path) -> Self {
        Self {
            storage_path: storage_path.to_path_buf(),
        }
    }
}

impl CatalogRepository for JsonFileRepository {
    fn save(&self, records: &[BookRecord]) -> CatalogResult<()> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|err| CatalogError::storage(
                format!("catalog json encoding {:?}", err).as_str(), None))?;
        fs::write(&self.storage_path, json).map_err(CatalogError::from)
    }

    fn load(&self) -> CatalogResult<Vec<BookRecord>> {
        if !self.storage_path.exists() {
            self.save(&[])?;
            return Ok(vec![]);
        }
        let json = fs::read_to_string(&self.storage_path)?;
        let records: Vec<BookRecord> = serde_json::from_str(&json)?;
        Ok(records)
    }
}
