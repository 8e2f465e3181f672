pub mod json_file_repository;

use crate::books::domain::model::BookRecord;
use crate::core::library::CatalogResult;

// Storage seam over the backing file. Every save is a full overwrite of the
// whole collection; there is no incremental persistence.
pub trait CatalogRepository {
    // overwrites the backing file with the given records
    fn save(&self, records: &[BookRecord]) -> CatalogResult<()>;

    // reads all records, creating an empty backing file if absent
    fn load(&self) -> CatalogResult<Vec<BookRecord>>;
}
