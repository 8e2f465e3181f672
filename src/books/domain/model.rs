use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::library::{BookStatus, CatalogError, CatalogResult};
use crate::utils::date;

// BookRecord abstracts one physical book in the catalog, keyed by its ISBN.
// issued_to/issued_on are non-empty exactly when the status is Issued.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub status: BookStatus,
    pub issued_to: String,
    pub issued_on: String,
}

impl BookRecord {
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            status: BookStatus::Available,
            issued_to: String::new(),
            issued_on: String::new(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == BookStatus::Available
    }

    pub fn issue(&mut self, user_name: &str) -> CatalogResult<()> {
        if !self.is_available() {
            return Err(CatalogError::conflict(
                format!("book {} already issued to {}", self.isbn, self.issued_to).as_str()));
        }
        self.status = BookStatus::Issued;
        self.issued_to = user_name.to_string();
        self.issued_on = date::timestamp();
        Ok(())
    }

    pub fn return_book(&mut self) -> CatalogResult<()> {
        if self.is_available() {
            return Err(CatalogError::conflict(
                format!("book {} is already available", self.isbn).as_str()));
        }
        self.status = BookStatus::Available;
        self.issued_to = String::new();
        self.issued_on = String::new();
        Ok(())
    }
}

impl Display for BookRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} | ISBN: {} | Status: {}",
               self.title, self.author, self.isbn, self.status)?;
        if self.status == BookStatus::Issued {
            write!(f, " | Issued to: {} on {}", self.issued_to, self.issued_on)?;
        }
        Ok(())
    }
}
