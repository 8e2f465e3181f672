use tracing::{error, info, warn};

use crate::books::domain::model::BookRecord;
use crate::catalog::domain::CatalogService;
use crate::catalog::repository::CatalogRepository;
use crate::core::library::{CatalogError, CatalogResult};

// CatalogStore owns the in-memory collection and keeps the backing file in
// sync by rewriting it after every successful mutation. Collection order is
// insertion order. Lookup is a linear scan; the catalog is assumed small
// enough to hold in memory.
pub struct CatalogStore {
    books: Vec<BookRecord>,
    repository: Box<dyn CatalogRepository>,
}

impl CatalogStore {
    pub fn new(repository: Box<dyn CatalogRepository>) -> Self {
        Self {
            books: Vec::new(),
            repository,
        }
    }

    fn find_index(&self, isbn: &str) -> CatalogResult<usize> {
        self.books.iter().position(|b| b.isbn == isbn)
            .ok_or_else(|| CatalogError::not_found(
                format!("book with isbn {} not found", isbn).as_str()))
    }

    // A failed write keeps the in-memory mutation; memory stays authoritative
    // and the caller learns that durability was not achieved.
    fn persist(&self) -> CatalogResult<()> {
        self.repository.save(&self.books).map_err(|err| {
            error!("failed to persist catalog: {}", err);
            err
        })
    }
}

impl CatalogService for CatalogStore {
    fn add_book(&mut self, book: BookRecord) -> CatalogResult<()> {
        if book.title.is_empty() || book.isbn.is_empty() {
            return Err(CatalogError::validation(
                "title and isbn are required", Some("400".to_string())));
        }
        if self.books.iter().any(|b| b.isbn == book.isbn) {
            return Err(CatalogError::duplicate_key(
                format!("isbn {} already exists in catalog", book.isbn).as_str()));
        }
        let title = book.title.to_string();
        self.books.push(book);
        self.persist()?;
        info!("book added: {}", title);
        Ok(())
    }

    fn search_by_title(&self, text: &str) -> Vec<BookRecord> {
        let q = text.to_lowercase();
        self.books.iter()
            .filter(|b| b.title.to_lowercase().contains(&q))
            .cloned()
            .collect()
    }

    fn search_by_isbn(&self, isbn: &str) -> CatalogResult<BookRecord> {
        self.find_index(isbn).map(|ndx| self.books[ndx].clone())
    }

    fn list_all(&self) -> Vec<BookRecord> {
        self.books.clone()
    }

    fn issue_book(&mut self, isbn: &str, user_name: &str) -> CatalogResult<BookRecord> {
        let ndx = self.find_index(isbn)?;
        self.books[ndx].issue(user_name)?;
        self.persist()?;
        info!("book issued: {} to {}", isbn, user_name);
        Ok(self.books[ndx].clone())
    }

    fn return_book(&mut self, isbn: &str) -> CatalogResult<BookRecord> {
        let ndx = self.find_index(isbn)?;
        self.books[ndx].return_book()?;
        self.persist()?;
        info!("book returned: {}", isbn);
        Ok(self.books[ndx].clone())
    }

    // Corrupt or unreadable backing files reset the collection to empty. The
    // data loss is deliberate and observable through the warning and the
    // returned error; there is no backup-file fallback.
    fn reload(&mut self) -> CatalogResult<()> {
        match self.repository.load() {
            Ok(records) => {
                self.books = records;
                Ok(())
            }
            Err(err) => {
                warn!("catalog file unreadable, starting empty: {}", err);
                self.books = Vec::new();
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;
    use crate::books::domain::model::BookRecord;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::service::CatalogStore;
    use crate::catalog::factory;
    use crate::catalog::repository::json_file_repository::JsonFileRepository;
    use crate::core::domain::Configuration;
    use crate::core::library::{BookStatus, CatalogError};

    fn build_service(path: &Path) -> Box<dyn CatalogService> {
        factory::create_catalog_service(&Configuration::new(path.to_str().unwrap()))
    }

    #[test]
    fn test_should_add_book() {
        let dir = TempDir::new().expect("should create temp dir");
        let path = dir.path().join("catalog.json");
        let mut svc = build_service(&path);
        svc.add_book(BookRecord::new("Dune", "Herbert", "111")).expect("should add");
        assert_eq!(1, svc.list_all().len());
        assert!(path.exists());
    }

    #[test]
    fn test_should_fail_adding_duplicate_isbn() {
        let dir = TempDir::new().expect("should create temp dir");
        let mut svc = build_service(&dir.path().join("catalog.json"));
        svc.add_book(BookRecord::new("Dune", "Herbert", "111")).expect("should add");
        let res = svc.add_book(BookRecord::new("Other", "Other", "111"));
        assert!(matches!(res, Err(CatalogError::DuplicateKey { message: _ })));
        let all = svc.list_all();
        assert_eq!(1, all.len());
        assert_eq!("Dune", all[0].title.as_str());
    }

    #[test]
    fn test_should_fail_adding_book_without_title_or_isbn() {
        let dir = TempDir::new().expect("should create temp dir");
        let mut svc = build_service(&dir.path().join("catalog.json"));
        let res = svc.add_book(BookRecord::new("", "Herbert", "111"));
        assert!(matches!(res, Err(CatalogError::Validation { message: _, reason_code: _ })));
        let res = svc.add_book(BookRecord::new("Dune", "Herbert", ""));
        assert!(matches!(res, Err(CatalogError::Validation { message: _, reason_code: _ })));
        assert!(svc.list_all().is_empty());
    }

    #[test]
    fn test_should_round_trip_catalog_through_file() {
        let dir = TempDir::new().expect("should create temp dir");
        let path = dir.path().join("catalog.json");
        let mut svc = build_service(&path);
        svc.add_book(BookRecord::new("Dune", "Herbert", "111")).expect("should add");
        svc.add_book(BookRecord::new("Foundation", "Asimov", "222")).expect("should add");
        svc.issue_book("111", "alice").expect("should issue");
        let original = svc.list_all();

        let reloaded = build_service(&path);
        assert_eq!(original, reloaded.list_all());
    }

    #[test]
    fn test_should_search_by_title_case_insensitively() {
        let dir = TempDir::new().expect("should create temp dir");
        let mut svc = build_service(&dir.path().join("catalog.json"));
        svc.add_book(BookRecord::new("Dune", "Herbert", "111")).expect("should add");
        svc.add_book(BookRecord::new("Dune Messiah", "Herbert", "112")).expect("should add");
        svc.add_book(BookRecord::new("Foundation", "Asimov", "222")).expect("should add");
        let res = svc.search_by_title("dune");
        assert_eq!(2, res.len());
        assert_eq!("Dune", res[0].title.as_str());
        assert_eq!("Dune Messiah", res[1].title.as_str());
    }

    #[test]
    fn test_should_return_empty_result_for_unmatched_title() {
        let dir = TempDir::new().expect("should create temp dir");
        let mut svc = build_service(&dir.path().join("catalog.json"));
        svc.add_book(BookRecord::new("Dune", "Herbert", "111")).expect("should add");
        assert!(svc.search_by_title("hobbit").is_empty());
    }

    #[test]
    fn test_should_fail_finding_unknown_isbn() {
        let dir = TempDir::new().expect("should create temp dir");
        let svc = build_service(&dir.path().join("catalog.json"));
        let res = svc.search_by_isbn("999");
        assert!(matches!(res, Err(CatalogError::NotFound { message: _ })));
    }

    #[test]
    fn test_should_fail_issuing_unknown_isbn() {
        let dir = TempDir::new().expect("should create temp dir");
        let mut svc = build_service(&dir.path().join("catalog.json"));
        let res = svc.issue_book("999", "alice");
        assert!(matches!(res, Err(CatalogError::NotFound { message: _ })));
    }

    #[test]
    fn test_should_fail_returning_twice() {
        let dir = TempDir::new().expect("should create temp dir");
        let mut svc = build_service(&dir.path().join("catalog.json"));
        svc.add_book(BookRecord::new("Dune", "Herbert", "111")).expect("should add");
        svc.issue_book("111", "alice").expect("should issue");
        let first = svc.return_book("111").expect("should return");
        assert!(first.is_available());
        let res = svc.return_book("111");
        assert!(matches!(res, Err(CatalogError::Conflict { message: _ })));
        let book = svc.search_by_isbn("111").expect("should find");
        assert_eq!(first, book);
    }

    #[test]
    fn test_should_issue_and_return_book() {
        let dir = TempDir::new().expect("should create temp dir");
        let mut svc = build_service(&dir.path().join("catalog.json"));
        svc.add_book(BookRecord::new("Dune", "Herbert", "111")).expect("should add");
        svc.add_book(BookRecord::new("Foundation", "Asimov", "222")).expect("should add");

        svc.issue_book("111", "Alice").expect("should issue");
        let book = svc.search_by_isbn("111").expect("should find");
        assert_eq!(BookStatus::Issued, book.status);
        assert_eq!("Alice", book.issued_to.as_str());
        assert!(!book.issued_on.is_empty());

        svc.return_book("111").expect("should return");
        let book = svc.search_by_isbn("111").expect("should find");
        assert_eq!(BookStatus::Available, book.status);
        assert!(book.issued_to.is_empty());
        assert!(book.issued_on.is_empty());
    }

    #[test]
    fn test_should_start_empty_on_corrupt_file() {
        let dir = TempDir::new().expect("should create temp dir");
        let path = dir.path().join("catalog.json");
        fs::write(&path, "{ not a catalog").expect("should write");
        let svc = build_service(&path);
        assert!(svc.list_all().is_empty());
    }

    #[test]
    fn test_should_report_corruption_on_reload() {
        let dir = TempDir::new().expect("should create temp dir");
        let path = dir.path().join("catalog.json");
        let mut store = CatalogStore::new(Box::new(JsonFileRepository::new(&path)));
        store.reload().expect("should load empty");
        store.add_book(BookRecord::new("Dune", "Herbert", "111")).expect("should add");
        fs::write(&path, "{ not a catalog").expect("should write");
        let res = store.reload();
        assert!(matches!(res, Err(CatalogError::Corruption { message: _ })));
        assert!(store.list_all().is_empty());
    }

    #[test]
    fn test_should_keep_mutation_in_memory_when_persist_fails() {
        let dir = TempDir::new().expect("should create temp dir");
        let path = dir.path().join("catalog.json");
        let mut store = CatalogStore::new(Box::new(JsonFileRepository::new(&path)));
        store.reload().expect("should load empty");

        // point the next write at a directory that no longer exists
        drop(dir);
        let res = store.add_book(BookRecord::new("Dune", "Herbert", "111"));
        assert!(matches!(res, Err(CatalogError::Storage { message: _, reason_code: _ })));
        assert_eq!(1, store.list_all().len());
    }
}
