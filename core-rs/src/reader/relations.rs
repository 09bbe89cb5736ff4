//! Single-predicate SKOS relation accessors.
//!
//! Each accessor reads one relation off the store and returns labelled
//! resources. Sorting and deprecation filtering follow the per-relation
//! rules of the source data model; the asymmetries are deliberate.

use oxigraph::model::{NamedNode, NamedNodeRef};

use super::{Labelled, VocabReader};
use crate::vocab;

impl<'a> VocabReader<'a> {
    /// skos:narrower objects, deprecated targets excluded, sorted by label.
    pub fn narrowers(&self, uri: NamedNodeRef<'_>) -> Vec<Labelled> {
        self.filtered_sorted(uri, vocab::skos::NARROWER)
    }

    /// skos:broader objects, deprecated targets excluded, sorted by label.
    pub fn broaders(&self, uri: NamedNodeRef<'_>) -> Vec<Labelled> {
        self.filtered_sorted(uri, vocab::skos::BROADER)
    }

    /// skos:member objects, sorted by label. Deprecated members are NOT
    /// filtered out, unlike `narrowers`/`broaders`; collections keep
    /// showing their full membership.
    pub fn members(&self, uri: NamedNodeRef<'_>) -> Vec<Labelled> {
        let mut out: Vec<Labelled> = self
            .named_objects(uri, vocab::skos::MEMBER)
            .into_iter()
            .map(|node| self.labelled(node))
            .collect();
        Self::sort_by_label(&mut out);
        out
    }

    /// skos:hasTopConcept objects, deprecated targets excluded, sorted by
    /// label.
    pub fn top_concepts(&self, uri: NamedNodeRef<'_>) -> Vec<Labelled> {
        self.filtered_sorted(uri, vocab::skos::HAS_TOP_CONCEPT)
    }

    /// skos:topConceptOf objects, sorted by label.
    pub fn top_concept_of(&self, uri: NamedNodeRef<'_>) -> Vec<Labelled> {
        let mut out: Vec<Labelled> = self
            .named_objects(uri, vocab::skos::TOP_CONCEPT_OF)
            .into_iter()
            .map(|node| self.labelled(node))
            .collect();
        Self::sort_by_label(&mut out);
        out
    }

    /// Schemes the resource belongs to, in store iteration order. A concept
    /// may sit in more than one scheme.
    pub fn in_scheme(&self, uri: NamedNodeRef<'_>) -> Vec<Labelled> {
        self.named_objects(uri, vocab::skos::IN_SCHEME)
            .into_iter()
            .map(|node| self.labelled(node))
            .collect()
    }

    /// Inverse of skos:member: collections pointing at this resource. Used
    /// for upward navigation.
    pub fn member_of(&self, uri: NamedNodeRef<'_>) -> Vec<Labelled> {
        self.store()
            .subjects(vocab::skos::MEMBER, uri.into())
            .into_iter()
            .map(|node| self.labelled(node))
            .collect()
    }

    /// Inverse of skos:inScheme: everything declared to be in this scheme.
    pub fn subjects_in_scheme(&self, uri: NamedNodeRef<'_>) -> Vec<Labelled> {
        self.store()
            .subjects(vocab::skos::IN_SCHEME, uri.into())
            .into_iter()
            .map(|node| self.labelled(node))
            .collect()
    }

    /// skos:closeMatch objects as raw resources, no label resolution.
    pub fn close_match(&self, uri: NamedNodeRef<'_>) -> Vec<NamedNode> {
        self.named_objects(uri, vocab::skos::CLOSE_MATCH)
    }

    /// skos:exactMatch objects as raw resources, no label resolution.
    pub fn exact_match(&self, uri: NamedNodeRef<'_>) -> Vec<NamedNode> {
        self.named_objects(uri, vocab::skos::EXACT_MATCH)
    }

    fn filtered_sorted(&self, uri: NamedNodeRef<'_>, predicate: NamedNodeRef<'_>) -> Vec<Labelled> {
        let mut out: Vec<Labelled> = self
            .named_objects(uri, predicate)
            .into_iter()
            .filter(|node| !self.is_deprecated(node.as_ref()))
            .map(|node| self.labelled(node))
            .collect();
        Self::sort_by_label(&mut out);
        out
    }
}
