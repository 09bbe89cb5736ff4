//! "Other properties" extraction.
//!
//! Everything on a subject that the structured accessors do not already
//! model, minus a curated ignore set of reserved predicates.

use oxigraph::model::{NamedNode, NamedNodeRef, Term};

use super::VocabReader;
use crate::store::term_string;
use crate::vocab;

/// Predicates covered elsewhere on the page or deliberately hidden.
const IGNORED: &[NamedNodeRef<'static>] = &[
    // Common
    vocab::rdf::TYPE,
    vocab::skos::PREF_LABEL,
    vocab::dcterms::TITLE,
    vocab::rdfs::LABEL,
    vocab::dcterms::DESCRIPTION,
    vocab::skos::DEFINITION,
    vocab::skos::CHANGE_NOTE,
    vocab::dcterms::CREATED,
    vocab::dcterms::MODIFIED,
    vocab::owl::SAME_AS,
    vocab::rdfs::COMMENT,
    vocab::skos::ALT_LABEL,
    vocab::dcterms::BIBLIOGRAPHIC_CITATION,
    vocab::rdfs::IS_DEFINED_BY,
    vocab::dc::DESCRIPTION,
    vocab::dcterms::CREATOR,
    vocab::dcterms::CONTRIBUTOR,
    vocab::schema::PARENT_ORGANIZATION,
    vocab::schema::CONTACT_POINT,
    vocab::schema::MEMBER,
    vocab::schema::SUB_ORGANIZATION,
    vocab::schema::FAMILY_NAME,
    vocab::ppt::PROPAGATE_TYPE,
    vocab::schema::GIVEN_NAME,
    vocab::schema::HONORIFIC_PREFIX,
    vocab::schema::JOB_TITLE,
    vocab::schema::MEMBER_OF,
    vocab::ppt::APPLIED_TYPE,
    vocab::skos::MEMBER,
    // Concept
    vocab::skos::NARROWER,
    vocab::skos::BROADER,
    vocab::skos::TOP_CONCEPT_OF,
    vocab::skos::IN_SCHEME,
    vocab::skos::CLOSE_MATCH,
    vocab::skos::EXACT_MATCH,
    // Concept scheme
    vocab::skos::HAS_TOP_CONCEPT,
];

/// A predicate with its display label, resolved locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyInfo {
    pub predicate: NamedNode,
    pub label: String,
}

/// One retained triple: predicate info, raw value, and the value's local
/// label when the value is itself a resource.
#[derive(Debug, Clone)]
pub struct OtherProperty {
    pub predicate: PropertyInfo,
    pub value: Term,
    pub value_label: Option<String>,
}

impl<'a> VocabReader<'a> {
    /// All triples on the subject whose predicate is not reserved, sorted by
    /// (predicate IRI, predicate label) then value for a stable page order.
    pub fn other_properties(&self, uri: NamedNodeRef<'_>) -> Vec<OtherProperty> {
        let mut out = Vec::new();
        for (predicate, value) in self.store().predicates_objects(uri) {
            if IGNORED.contains(&predicate.as_ref()) {
                continue;
            }
            let value_label = match &value {
                Term::NamedNode(node) => Some(self.local_label(node.as_ref())),
                _ => None,
            };
            let label = self.local_label(predicate.as_ref());
            out.push(OtherProperty {
                predicate: PropertyInfo { predicate, label },
                value,
                value_label,
            });
        }
        out.sort_by(|a, b| {
            (a.predicate.predicate.as_str(), a.predicate.label.as_str())
                .cmp(&(b.predicate.predicate.as_str(), b.predicate.label.as_str()))
                .then_with(|| term_string(&a.value).cmp(&term_string(&b.value)))
        });
        out
    }
}
