//! Disease catalog storage.
//!
//! The catalog maps canonical disease names to their ICD-11/TM2 coding pairs.
//! An embedded seed catalog is compiled into the binary (validated at build
//! time by `build.rs`), and custom catalogs can be loaded from JSON files.
//!
//! New diseases enter only through the seed catalog or a loaded file: the
//! store exposes no entry-creation operation. Updates and deletes
//! mutate in place and are never persisted by the core; the CLI's
//! `catalog update`/`catalog delete` commands round-trip a file instead.
//!
//! ## Example
//!
//! ```rust,no_run
//! use dx_solver::DiseaseCatalog;
//!
//! let catalog = DiseaseCatalog::load_embedded().unwrap();
//!
//! // List all diseases
//! for (name, entry) in catalog.entries() {
//!     println!("{name}: {} / {}", entry.icd11, entry.tm2);
//! }
//!
//! // Exact lookup (case-sensitive)
//! let asthma = catalog.get("Asthma");
//! ```
//!
//! For concurrent access (the web server), wrap the catalog in a
//! [`SharedCatalog`](shared::SharedCatalog) handle.

pub mod shared;
pub mod store;

pub use shared::{share, SharedCatalog};
pub use store::{CatalogError, DiseaseCatalog};
