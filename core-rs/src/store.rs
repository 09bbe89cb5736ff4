//! Read-only handle over the vocabulary triple store.
//!
//! Wraps an in-memory Oxigraph [`Store`] and exposes the pattern reads the
//! derivation layer needs: objects of a subject/predicate, inverse
//! subject lookups, and full triple enumeration for a subject. The handle
//! is passed explicitly into every accessor; nothing in this crate holds a
//! process-global graph.

use std::fs;
use std::path::Path;

use oxigraph::io::RdfFormat;
use oxigraph::model::{NamedNode, NamedNodeRef, Subject, Term, TermRef};
use oxigraph::store::Store;
use tracing::debug;

use crate::errors::{Result, VocabError};
use crate::vocab;

pub struct VocabStore {
    store: Store,
}

impl VocabStore {
    /// Create an empty in-memory store.
    pub fn new() -> Result<Self> {
        let store = Store::new().map_err(|e| VocabError::Store(e.to_string()))?;
        Ok(Self { store })
    }

    /// Load Turtle data into the default graph.
    pub fn load_turtle(&self, data: &str) -> Result<()> {
        self.store
            .load_from_reader(RdfFormat::Turtle, data.as_bytes())
            .map_err(|e| VocabError::RdfParse(e.to_string()))
    }

    /// Load a Turtle file from disk.
    pub fn load_turtle_file(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "loading turtle file");
        let content = fs::read_to_string(path)?;
        self.load_turtle(&content)
    }

    /// All objects of (subject, predicate, ?).
    pub fn objects(&self, subject: NamedNodeRef<'_>, predicate: NamedNodeRef<'_>) -> Vec<Term> {
        self.store
            .quads_for_pattern(Some(subject.into()), Some(predicate), None, None)
            .flatten()
            .map(|quad| quad.object)
            .collect()
    }

    /// First object of (subject, predicate, ?), if any.
    pub fn first_object(
        &self,
        subject: NamedNodeRef<'_>,
        predicate: NamedNodeRef<'_>,
    ) -> Option<Term> {
        self.store
            .quads_for_pattern(Some(subject.into()), Some(predicate), None, None)
            .flatten()
            .map(|quad| quad.object)
            .next()
    }

    /// First object of (subject, predicate, ?) coerced to string semantics.
    pub fn first_value(
        &self,
        subject: NamedNodeRef<'_>,
        predicate: NamedNodeRef<'_>,
    ) -> Option<String> {
        self.first_object(subject, predicate)
            .map(|term| term_string(&term))
    }

    /// IRI-named subjects of (?, predicate, object). Blank-node subjects are
    /// skipped since they cannot back a detail page.
    pub fn subjects(&self, predicate: NamedNodeRef<'_>, object: TermRef<'_>) -> Vec<NamedNode> {
        self.store
            .quads_for_pattern(None, Some(predicate), Some(object), None)
            .flatten()
            .filter_map(|quad| match quad.subject {
                Subject::NamedNode(node) => Some(node),
                _ => None,
            })
            .collect()
    }

    /// IRI-named subjects carrying rdf:type `class`.
    pub fn subjects_of_type(&self, class: NamedNodeRef<'_>) -> Vec<NamedNode> {
        self.subjects(vocab::rdf::TYPE, class.into())
    }

    /// Every (predicate, object) pair on a subject.
    pub fn predicates_objects(&self, subject: NamedNodeRef<'_>) -> Vec<(NamedNode, Term)> {
        self.store
            .quads_for_pattern(Some(subject.into()), None, None, None)
            .flatten()
            .map(|quad| (quad.predicate, quad.object))
            .collect()
    }

    /// Whether the triple (subject, predicate, object) is present.
    pub fn has(
        &self,
        subject: NamedNodeRef<'_>,
        predicate: NamedNodeRef<'_>,
        object: TermRef<'_>,
    ) -> bool {
        self.store
            .quads_for_pattern(Some(subject.into()), Some(predicate), Some(object), None)
            .next()
            .is_some()
    }

    /// Whether the subject carries rdf:type `class`.
    pub fn has_type(&self, subject: NamedNodeRef<'_>, class: NamedNodeRef<'_>) -> bool {
        self.has(subject, vocab::rdf::TYPE, class.into())
    }

    /// Number of triples in the store.
    pub fn len(&self) -> usize {
        self.store.len().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// String semantics for a term: literal value, IRI, or blank node id.
pub fn term_string(term: &Term) -> String {
    match term {
        Term::NamedNode(node) => node.as_str().to_string(),
        Term::BlankNode(node) => node.as_str().to_string(),
        Term::Literal(literal) => literal.value().to_string(),
        other => other.to_string(),
    }
}
