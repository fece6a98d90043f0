//! neurorx-catalog — Immutable in-memory drug catalog.
//!
//! Loaded once at start-up from the bundled curated dataset or a YAML/JSON
//! file, validated, and then only ever read.

pub mod catalog;
pub mod filter;
pub mod source;

pub use catalog::Catalog;
pub use filter::filter_by_scope;
pub use source::DrugSource;
