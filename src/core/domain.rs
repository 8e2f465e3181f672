use std::path::PathBuf;
use serde::{Deserialize, Serialize};

pub const DEFAULT_STORAGE_PATH: &str = "catalog.json";

// Configuration abstracts config options for the inventory manager. The
// storage path is supplied by the caller at construction time; there is no
// ambient global state.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub storage_path: PathBuf,
}

impl Configuration {
    pub fn new(storage_path: &str) -> Self {
        Configuration {
            storage_path: PathBuf::from(storage_path),
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new(DEFAULT_STORAGE_PATH)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_build_config() {
        let config = Configuration::new("test.json");
        assert_eq!(PathBuf::from("test.json"), config.storage_path);
    }

    #[test]
    fn test_should_default_config() {
        let config = Configuration::default();
        assert_eq!(PathBuf::from("catalog.json"), config.storage_path);
    }
}
