/**
 * reader module
 *
 * - relations: single-predicate SKOS relation accessors
 * - properties: "other properties" extraction with the reserved-predicate ignore set
 * - hierarchy: recursive narrower/member outline rendering
 * - classify: type classification and deprecation checks
 * - method: TERN Method record fields
 * - listing: vocabulary-wide listings and descriptive accessors
 */

pub mod classify;
pub mod hierarchy;
pub mod listing;
pub mod method;
pub mod properties;
pub mod relations;

use oxigraph::model::{NamedNode, NamedNodeRef, Term};

use crate::label::{Dereference, LabelResolver};
use crate::store::VocabStore;

pub use classify::SkosType;
pub use listing::{ConceptSummary, Description, MappingStatement, SchemeSummary};
pub use method::Equipment;
pub use properties::{OtherProperty, PropertyInfo};

/// A resource paired with its resolved display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labelled {
    pub resource: NamedNode,
    pub label: String,
}

/// Request-scoped view over a vocabulary store. Binds a read-only store
/// handle to a label resolver; every page-level derivation hangs off it.
pub struct VocabReader<'a> {
    store: &'a VocabStore,
    labels: LabelResolver<'a>,
}

impl<'a> VocabReader<'a> {
    pub fn new(store: &'a VocabStore, remote: &'a dyn Dereference) -> Self {
        Self {
            store,
            labels: LabelResolver::new(store, remote),
        }
    }

    pub fn store(&self) -> &VocabStore {
        self.store
    }

    /// Display label with the full fallback chain.
    pub fn label(&self, uri: NamedNodeRef<'_>) -> String {
        self.labels.resolve(uri)
    }

    /// Display label without network access or camel-case synthesis.
    pub fn local_label(&self, uri: NamedNodeRef<'_>) -> String {
        self.labels.resolve_local(uri)
    }

    pub(crate) fn labelled(&self, resource: NamedNode) -> Labelled {
        let label = self.labels.resolve(resource.as_ref());
        Labelled { resource, label }
    }

    /// IRI-named objects of a predicate; blank nodes are skipped since they
    /// cannot back a detail page.
    pub(crate) fn named_objects(
        &self,
        uri: NamedNodeRef<'_>,
        predicate: NamedNodeRef<'_>,
    ) -> Vec<NamedNode> {
        self.store
            .objects(uri, predicate)
            .into_iter()
            .filter_map(|term| match term {
                Term::NamedNode(node) => Some(node),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn sort_by_label(items: &mut [Labelled]) {
        items.sort_by(|a, b| a.label.cmp(&b.label));
    }
}
