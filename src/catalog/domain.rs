pub mod service;

use crate::books::domain::model::BookRecord;
use crate::core::library::CatalogResult;

pub trait CatalogService {
    fn add_book(&mut self, book: BookRecord) -> CatalogResult<()>;
    fn search_by_title(&self, text: &str) -> Vec<BookRecord>;
    fn search_by_isbn(&self, isbn: &str) -> CatalogResult<BookRecord>;
    fn list_all(&self) -> Vec<BookRecord>;
    fn issue_book(&mut self, isbn: &str, user_name: &str) -> CatalogResult<BookRecord>;
    fn return_book(&mut self, isbn: &str) -> CatalogResult<BookRecord>;
    fn reload(&mut self) -> CatalogResult<()>;
}
