use std::sync::Arc;

use parking_lot::RwLock;

use crate::catalog::store::{CatalogError, DiseaseCatalog};

/// Process-wide handle to the mutable catalog.
///
/// Concurrency contract: once `update` or `delete` returns, every subsequent
/// `get`/`names` call on any handle observes the change (read-after-write
/// visibility), and each mutation is atomic from any observer's viewpoint.
/// Concurrent updates to the same entry serialize in an unspecified order.
///
/// `parking_lot::RwLock` has no lock poisoning, so acquisition never fails
/// and readers never see a half-applied update.
pub type SharedCatalog = Arc<RwLock<DiseaseCatalog>>;

/// Wrap a catalog in a shareable handle.
pub fn share(catalog: DiseaseCatalog) -> SharedCatalog {
    Arc::new(RwLock::new(catalog))
}

/// Load the embedded catalog straight into a shareable handle.
pub fn load_shared_embedded() -> Result<SharedCatalog, CatalogError> {
    Ok(share(DiseaseCatalog::load_embedded()?))
}
