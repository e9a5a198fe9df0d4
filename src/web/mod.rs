//! Web server for browser-based disease code lookup.
//!
//! This module provides a small HTTP API and an embedded single-page UI
//! using Axum. Responses are FHIR-shaped: `Condition` for matches,
//! `OperationOutcome` for errors and mutations, `Bundle` for the listing.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8080
//! dx-solver serve
//!
//! # Custom port and auto-open browser
//! dx-solver serve --port 3000 --open
//!
//! # Bind to all interfaces
//! dx-solver serve --address 0.0.0.0
//! ```
//!
//! ## API Endpoints
//!
//! - `GET /` - Main page with disease lookup form
//! - `GET /api/resolve?disease=<q>[&threshold=<t>]` - Resolve a disease name
//! - `GET /api/catalog` - List the catalog as a FHIR Bundle
//! - `PUT /api/catalog/{name}` - Update the codes of an existing disease
//! - `DELETE /api/catalog/{name}` - Remove a disease

pub mod fhir;
pub mod server;
