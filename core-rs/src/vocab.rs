//! Namespace constants for the vocabularies the viewer understands.
//!
//! Everything is a `NamedNodeRef` so predicates can be used directly in
//! store pattern reads without per-call allocation.

macro_rules! n {
    ($iri:expr) => {
        oxigraph::model::NamedNodeRef::new_unchecked($iri)
    };
}

type N = oxigraph::model::NamedNodeRef<'static>;

pub mod rdf {
    use super::N;

    pub const TYPE: N = n!("http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
    pub const STATEMENT: N = n!("http://www.w3.org/1999/02/22-rdf-syntax-ns#Statement");
    pub const SUBJECT: N = n!("http://www.w3.org/1999/02/22-rdf-syntax-ns#subject");
    pub const PREDICATE: N = n!("http://www.w3.org/1999/02/22-rdf-syntax-ns#predicate");
    pub const OBJECT: N = n!("http://www.w3.org/1999/02/22-rdf-syntax-ns#object");
}

pub mod rdfs {
    use super::N;

    pub const LABEL: N = n!("http://www.w3.org/2000/01/rdf-schema#label");
    pub const COMMENT: N = n!("http://www.w3.org/2000/01/rdf-schema#comment");
    pub const IS_DEFINED_BY: N = n!("http://www.w3.org/2000/01/rdf-schema#isDefinedBy");
}

pub mod owl {
    use super::N;

    pub const DEPRECATED: N = n!("http://www.w3.org/2002/07/owl#deprecated");
    pub const SAME_AS: N = n!("http://www.w3.org/2002/07/owl#sameAs");
}

pub mod skos {
    use super::N;

    pub const CONCEPT: N = n!("http://www.w3.org/2004/02/skos/core#Concept");
    pub const CONCEPT_SCHEME: N = n!("http://www.w3.org/2004/02/skos/core#ConceptScheme");
    pub const COLLECTION: N = n!("http://www.w3.org/2004/02/skos/core#Collection");
    pub const PREF_LABEL: N = n!("http://www.w3.org/2004/02/skos/core#prefLabel");
    pub const ALT_LABEL: N = n!("http://www.w3.org/2004/02/skos/core#altLabel");
    pub const DEFINITION: N = n!("http://www.w3.org/2004/02/skos/core#definition");
    pub const CHANGE_NOTE: N = n!("http://www.w3.org/2004/02/skos/core#changeNote");
    pub const NOTE: N = n!("http://www.w3.org/2004/02/skos/core#note");
    pub const NARROWER: N = n!("http://www.w3.org/2004/02/skos/core#narrower");
    pub const BROADER: N = n!("http://www.w3.org/2004/02/skos/core#broader");
    pub const MEMBER: N = n!("http://www.w3.org/2004/02/skos/core#member");
    pub const TOP_CONCEPT_OF: N = n!("http://www.w3.org/2004/02/skos/core#topConceptOf");
    pub const HAS_TOP_CONCEPT: N = n!("http://www.w3.org/2004/02/skos/core#hasTopConcept");
    pub const IN_SCHEME: N = n!("http://www.w3.org/2004/02/skos/core#inScheme");
    pub const CLOSE_MATCH: N = n!("http://www.w3.org/2004/02/skos/core#closeMatch");
    pub const EXACT_MATCH: N = n!("http://www.w3.org/2004/02/skos/core#exactMatch");
}

pub mod dcterms {
    use super::N;

    pub const TITLE: N = n!("http://purl.org/dc/terms/title");
    pub const DESCRIPTION: N = n!("http://purl.org/dc/terms/description");
    pub const CREATED: N = n!("http://purl.org/dc/terms/created");
    pub const MODIFIED: N = n!("http://purl.org/dc/terms/modified");
    pub const CREATOR: N = n!("http://purl.org/dc/terms/creator");
    pub const CONTRIBUTOR: N = n!("http://purl.org/dc/terms/contributor");
    pub const BIBLIOGRAPHIC_CITATION: N = n!("http://purl.org/dc/terms/bibliographicCitation");
    pub const SOURCE: N = n!("http://purl.org/dc/terms/source");
}

pub mod dc {
    use super::N;

    pub const DESCRIPTION: N = n!("http://purl.org/dc/elements/1.1/description");
}

pub mod schema {
    use super::N;

    pub const PARENT_ORGANIZATION: N = n!("http://schema.org/parentOrganization");
    pub const CONTACT_POINT: N = n!("http://schema.org/contactPoint");
    pub const MEMBER: N = n!("http://schema.org/member");
    pub const MEMBER_OF: N = n!("http://schema.org/memberOf");
    pub const SUB_ORGANIZATION: N = n!("http://schema.org/subOrganization");
    pub const FAMILY_NAME: N = n!("http://schema.org/familyName");
    pub const GIVEN_NAME: N = n!("http://schema.org/givenName");
    pub const HONORIFIC_PREFIX: N = n!("http://schema.org/honorificPrefix");
    pub const JOB_TITLE: N = n!("http://schema.org/jobTitle");
    pub const TIME_REQUIRED: N = n!("http://schema.org/timeRequired");
}

/// PoolParty export artifacts that leak into harvested vocabularies.
pub mod ppt {
    use super::N;

    pub const PROPAGATE_TYPE: N = n!("http://schema.semantic-web.at/ppt/propagateType");
    pub const APPLIED_TYPE: N = n!("http://schema.semantic-web.at/ppt/appliedType");
}

/// TERN ontology terms used by Method records.
pub mod tern {
    use super::N;

    pub const METHOD: N = n!("https://w3id.org/tern/ontologies/tern/Method");
    pub const PURPOSE: N = n!("https://w3id.org/tern/ontologies/tern/purpose");
    pub const SCOPE: N = n!("https://w3id.org/tern/ontologies/tern/scope");
    pub const EQUIPMENT: N = n!("https://w3id.org/tern/ontologies/tern/equipment");
    pub const INSTRUCTIONS: N = n!("https://w3id.org/tern/ontologies/tern/instructions");
    pub const HAS_PARAMETER: N = n!("https://w3id.org/tern/ontologies/tern/hasParameter");
    pub const HAS_CATEGORICAL_VARIABLE_COLLECTION: N =
        n!("https://w3id.org/tern/ontologies/tern/hasCategoricalVariableCollection");
}
