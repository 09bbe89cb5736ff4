//! Type classification and deprecation checks.

use oxigraph::model::{NamedNode, NamedNodeRef, Term};
use percent_encoding::percent_decode_str;

use super::VocabReader;
use crate::vocab;

/// Entity kinds the routing layer knows how to render. Classification order
/// is significant: Method beats ConceptScheme beats Concept beats Collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkosType {
    Method,
    ConceptScheme,
    Concept,
    Collection,
}

impl<'a> VocabReader<'a> {
    /// Classify a URI by its rdf:type triples. The input is percent-decoded
    /// first so encoded and plain forms classify identically. `None` means
    /// unclassified; the caller decides whether that is a 404.
    pub fn classify(&self, uri: &str) -> Option<SkosType> {
        let decoded = decode_uri(uri);
        let subject = NamedNode::new(decoded).ok()?;
        let subject = subject.as_ref();

        if self.store().has_type(subject, vocab::tern::METHOD) {
            return Some(SkosType::Method);
        }
        if self.store().has_type(subject, vocab::skos::CONCEPT_SCHEME) {
            return Some(SkosType::ConceptScheme);
        }
        if self.store().has_type(subject, vocab::skos::CONCEPT) {
            return Some(SkosType::Concept);
        }
        if self.store().has_type(subject, vocab::skos::COLLECTION) {
            return Some(SkosType::Collection);
        }
        None
    }

    /// True iff an owl:deprecated triple exists with a truthy boolean
    /// lexical form. Absence means not deprecated.
    pub fn is_deprecated(&self, uri: NamedNodeRef<'_>) -> bool {
        match self.store().first_object(uri, vocab::owl::DEPRECATED) {
            Some(Term::Literal(literal)) => truthy(literal.value()),
            Some(_) => true,
            None => false,
        }
    }

    /// rdf:type objects worth showing as a badge line: HTTP IRIs only, minus
    /// the three core SKOS classes the page already implies.
    pub fn class_types(&self, uri: NamedNodeRef<'_>) -> Vec<NamedNode> {
        self.named_objects(uri, vocab::rdf::TYPE)
            .into_iter()
            .filter(|node| {
                let iri = node.as_str();
                iri.starts_with("http")
                    && iri != vocab::skos::CONCEPT.as_str()
                    && iri != vocab::skos::CONCEPT_SCHEME.as_str()
                    && iri != vocab::skos::COLLECTION.as_str()
            })
            .collect()
    }
}

fn truthy(value: &str) -> bool {
    !(value.is_empty() || value == "0" || value.eq_ignore_ascii_case("false"))
}

/// Decode form-style URI input: `+` as space, then percent sequences.
fn decode_uri(uri: &str) -> String {
    let plus_decoded = uri.replace('+', " ");
    percent_decode_str(&plus_decoded)
        .decode_utf8_lossy()
        .into_owned()
}
