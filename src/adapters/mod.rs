// Adapters layer: concrete implementations of the domain ports (catalog, identity, storage).

pub mod http;
pub mod memory;
pub mod rest_catalog;
pub mod rest_identity;
pub mod storage;

pub use http::BackendClient;
pub use memory::MemoryCatalog;
pub use rest_catalog::RestCatalog;
pub use rest_identity::RestIdentity;
pub use storage::LocalStorage;
