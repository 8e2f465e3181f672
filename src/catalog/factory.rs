use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogStore;
use crate::catalog::repository::CatalogRepository;
use crate::catalog::repository::json_file_repository::JsonFileRepository;
use crate::core::domain::Configuration;

pub fn create_catalog_repository(config: &Configuration) -> Box<dyn CatalogRepository> {
    Box::new(JsonFileRepository::new(&config.storage_path))
}

// Builds a catalog loaded from the configured file. An absent file starts an
// empty catalog and creates the file; an unreadable one starts empty after
// reload() has logged the warning.
pub fn create_catalog_service(config: &Configuration) -> Box<dyn CatalogService> {
    let mut store = CatalogStore::new(create_catalog_repository(config));
    let _ = store.reload();
    Box::new(store)
}
