//! Error types for the vocabulary query core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VocabError {
    #[error("Store error: {0}")]
    Store(String),

    #[error("Failed to parse RDF: {0}")]
    RdfParse(String),

    #[error("Invalid IRI: {0}")]
    InvalidIri(String),

    #[error("Malformed date literal: {0}")]
    MalformedDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, VocabError>;
