//! TERN Method record fields.

use oxigraph::model::{NamedNodeRef, Term};

use super::{Labelled, VocabReader};
use crate::store::term_string;
use crate::vocab;

/// Equipment as modelled in the source data: either one free-text literal
/// or a list of equipment resources. The mixed shape is real ontology usage,
/// not something to normalize away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Equipment {
    Literal(String),
    Resources(Vec<Labelled>),
}

impl<'a> VocabReader<'a> {
    /// tern:purpose, first literal if any.
    pub fn method_purpose(&self, uri: NamedNodeRef<'_>) -> Option<String> {
        self.store().first_value(uri, vocab::tern::PURPOSE)
    }

    /// tern:scope, first literal if any.
    pub fn method_scope(&self, uri: NamedNodeRef<'_>) -> Option<String> {
        self.store().first_value(uri, vocab::tern::SCOPE)
    }

    /// tern:instructions, first literal if any.
    pub fn method_instructions(&self, uri: NamedNodeRef<'_>) -> Option<String> {
        self.store().first_value(uri, vocab::tern::INSTRUCTIONS)
    }

    /// schema:timeRequired, first literal if any.
    pub fn method_time_required(&self, uri: NamedNodeRef<'_>) -> Option<String> {
        self.store().first_value(uri, vocab::schema::TIME_REQUIRED)
    }

    /// skos:note, first literal if any.
    pub fn method_additional_note(&self, uri: NamedNodeRef<'_>) -> Option<String> {
        self.store().first_value(uri, vocab::skos::NOTE)
    }

    /// tern:equipment. A non-resource value short-circuits to
    /// `Equipment::Literal`; otherwise all resource values are labelled.
    pub fn method_equipment(&self, uri: NamedNodeRef<'_>) -> Equipment {
        let mut resources = Vec::new();
        for term in self.store().objects(uri, vocab::tern::EQUIPMENT) {
            match term {
                Term::NamedNode(node) => resources.push(self.labelled(node)),
                other => return Equipment::Literal(term_string(&other)),
            }
        }
        Equipment::Resources(resources)
    }

    /// tern:hasParameter resources, labelled, store order.
    pub fn parameter_relations(&self, uri: NamedNodeRef<'_>) -> Vec<Labelled> {
        self.named_objects(uri, vocab::tern::HAS_PARAMETER)
            .into_iter()
            .map(|node| self.labelled(node))
            .collect()
    }

    /// tern:hasCategoricalVariableCollection resources, labelled, store order.
    pub fn categorical_variable_relations(&self, uri: NamedNodeRef<'_>) -> Vec<Labelled> {
        self.named_objects(uri, vocab::tern::HAS_CATEGORICAL_VARIABLE_COLLECTION)
            .into_iter()
            .map(|node| self.labelled(node))
            .collect()
    }
}
