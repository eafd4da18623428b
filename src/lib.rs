//! # bibweb
//!
//! A static website generator for BibTeX bibliographies: records are
//! normalized into [`Paper`] entities, indexed by content hash, DOI, arXiv
//! id, and author, and rendered through a directory of Jinja templates into a
//! cross-linked output tree.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: the canonical [`Paper`] entity and its [`Kind`] classification
//! - [`bib`]: BibTeX reading and record normalization
//! - [`site`]: the [`Website`] index built over the full paper list
//! - [`pages`]: assembly of render jobs from the built index
//! - [`render`]: template rendering and output writing
//! - [`config`]: run configuration

pub mod bib;
pub mod config;
pub mod models;
pub mod pages;
pub mod render;
pub mod site;

// Re-export commonly used types
pub use models::{Kind, Paper};
pub use site::Website;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
