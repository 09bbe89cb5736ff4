//! # VocView Core - SKOS Vocabulary Read Layer
//!
//! Query and derivation layer over a read-only SKOS vocabulary graph.
//! An in-memory triple store holds the harvested vocabularies; this crate
//! turns raw triples into the page-level views a vocabulary browser
//! renders: resolved labels, relation lists, property tables, concept
//! hierarchies and register listings.
//!
//! ## Key Features
//!
//! - Label resolution with local fallback chain, optional remote
//!   dereferencing and URI-derived synthesis as last resort
//! - SKOS relation accessors with deprecation filtering and label sort
//! - Recursive concept/collection hierarchy rendering with cycle guard
//! - Type classification (Method, ConceptScheme, Concept, Collection)
//! - TERN Method record fields including mixed-shape equipment
//! - Vocabulary-wide concept and scheme registers
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │       VocabStore (oxigraph)         │
//! │   read-only pattern lookups only    │
//! └─────────────────────────────────────┘
//!           ▲               ▲
//!           │               │
//!     ┌─────┴───────┐   ┌──┴──────────┐
//!     │ LabelResolver│  │ VocabReader │
//!     │  (+ remote)  │  │ (per page)  │
//!     └─────────────┘   └─────────────┘
//! ```

pub mod config;
pub mod dates;
pub mod errors;
pub mod label;
pub mod link;
pub mod reader;
pub mod store;
pub mod vocab;

pub use config::ViewerConfig;
pub use errors::{Result, VocabError};
pub use label::{Dereference, HttpDereferencer, LabelResolver, NoDereference, RemoteLabel};
pub use link::{LinkBuilder, PathLinkBuilder};
pub use reader::{
    ConceptSummary, Description, Equipment, Labelled, MappingStatement, OtherProperty,
    PropertyInfo, SchemeSummary, SkosType, VocabReader,
};
pub use store::{term_string, VocabStore};

/// Crate version, surfaced in page footers.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
