//! Vocabulary-wide listings and descriptive accessors.
//!
//! Backs the register pages: every concept, every scheme, schemes plus
//! collections; plus the per-resource descriptive fields (description,
//! definition, citation, agent details) and reified mapping statements.

use chrono::NaiveDate;
use oxigraph::model::{NamedNode, NamedNodeRef, Term};

use super::{Labelled, VocabReader};
use crate::dates::parse_date_literal;
use crate::errors::Result;
use crate::store::term_string;
use crate::vocab;

/// A description value together with the predicate that supplied it
/// (dcterms:description, dc:description or rdfs:comment).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    pub predicate: NamedNode,
    pub value: String,
}

/// Register row for a concept.
#[derive(Debug, Clone)]
pub struct ConceptSummary {
    pub resource: NamedNode,
    pub label: String,
    pub created: Option<NaiveDate>,
    pub modified: Option<NaiveDate>,
    pub definition: Option<String>,
    pub schemes: Vec<Labelled>,
}

/// Register row for a concept scheme or collection.
#[derive(Debug, Clone)]
pub struct SchemeSummary {
    pub resource: NamedNode,
    pub label: String,
    pub created: Option<NaiveDate>,
    pub modified: Option<NaiveDate>,
    pub description: Option<Description>,
}

/// A reified rdf:Statement describing a mapping assertion about a resource.
#[derive(Debug, Clone)]
pub struct MappingStatement {
    pub statement: NamedNode,
    pub predicate: Option<Term>,
    pub object: Option<Term>,
    pub created: Option<NaiveDate>,
    pub creator: Option<Term>,
    pub description: Option<String>,
}

impl<'a> VocabReader<'a> {
    /// dcterms:created parsed as a date. Malformed literals are fatal.
    pub fn created_date(&self, uri: NamedNodeRef<'_>) -> Result<Option<NaiveDate>> {
        match self.store().first_value(uri, vocab::dcterms::CREATED) {
            Some(value) => Ok(Some(parse_date_literal(&value)?)),
            None => Ok(None),
        }
    }

    /// dcterms:modified parsed as a date. Malformed literals are fatal.
    pub fn modified_date(&self, uri: NamedNodeRef<'_>) -> Result<Option<NaiveDate>> {
        match self.store().first_value(uri, vocab::dcterms::MODIFIED) {
            Some(value) => Ok(Some(parse_date_literal(&value)?)),
            None => Ok(None),
        }
    }

    /// First description by predicate priority: dcterms:description,
    /// dc:description, rdfs:comment.
    pub fn description(&self, uri: NamedNodeRef<'_>) -> Option<Description> {
        for predicate in [
            vocab::dcterms::DESCRIPTION,
            vocab::dc::DESCRIPTION,
            vocab::rdfs::COMMENT,
        ] {
            if let Some(value) = self.store().first_value(uri, predicate) {
                return Some(Description {
                    predicate: predicate.into_owned(),
                    value,
                });
            }
        }
        None
    }

    /// skos:definition, first value if any.
    pub fn definition(&self, uri: NamedNodeRef<'_>) -> Option<String> {
        self.store().first_value(uri, vocab::skos::DEFINITION)
    }

    /// skos:changeNote, first value if any.
    pub fn change_note(&self, uri: NamedNodeRef<'_>) -> Option<String> {
        self.store().first_value(uri, vocab::skos::CHANGE_NOTE)
    }

    /// skos:altLabel values, sorted.
    pub fn alt_labels(&self, uri: NamedNodeRef<'_>) -> Vec<String> {
        let mut labels: Vec<String> = self
            .store()
            .objects(uri, vocab::skos::ALT_LABEL)
            .iter()
            .map(term_string)
            .collect();
        labels.sort();
        labels
    }

    /// dcterms:bibliographicCitation, first value if any.
    pub fn bibliographic_citation(&self, uri: NamedNodeRef<'_>) -> Option<String> {
        self.store()
            .first_value(uri, vocab::dcterms::BIBLIOGRAPHIC_CITATION)
    }

    /// dcterms:source, first value if any.
    pub fn dcterms_source(&self, uri: NamedNodeRef<'_>) -> Option<String> {
        self.store().first_value(uri, vocab::dcterms::SOURCE)
    }

    /// dcterms:creator, first term if any.
    pub fn creator(&self, uri: NamedNodeRef<'_>) -> Option<Term> {
        self.store().first_object(uri, vocab::dcterms::CREATOR)
    }

    /// rdfs:isDefinedBy, first term if any.
    pub fn is_defined_by(&self, uri: NamedNodeRef<'_>) -> Option<Term> {
        self.store().first_object(uri, vocab::rdfs::IS_DEFINED_BY)
    }

    /// Every skos:Concept in the store, label-sorted.
    pub fn list_concepts(&self) -> Result<Vec<ConceptSummary>> {
        let mut out = Vec::new();
        for concept in self.store().subjects_of_type(vocab::skos::CONCEPT) {
            let subject = concept.as_ref();
            let label = self.label(subject);
            let created = self.created_date(subject)?;
            let modified = self.modified_date(subject)?;
            let definition = self.definition(subject);
            let schemes = self.in_scheme(subject);
            out.push(ConceptSummary {
                resource: concept,
                label,
                created,
                modified,
                definition,
                schemes,
            });
        }
        out.sort_by(|a, b| a.label.cmp(&b.label));
        Ok(out)
    }

    /// Every skos:ConceptScheme in the store, label-sorted.
    pub fn list_concept_schemes(&self) -> Result<Vec<SchemeSummary>> {
        let mut out = Vec::new();
        for scheme in self.store().subjects_of_type(vocab::skos::CONCEPT_SCHEME) {
            out.push(self.scheme_summary(scheme)?);
        }
        out.sort_by(|a, b| a.label.cmp(&b.label));
        Ok(out)
    }

    /// Non-deprecated schemes and collections together, label-sorted. This
    /// is the home-page register.
    pub fn list_concept_schemes_and_collections(&self) -> Result<Vec<SchemeSummary>> {
        let mut out = Vec::new();
        for class in [vocab::skos::CONCEPT_SCHEME, vocab::skos::COLLECTION] {
            for subject in self.store().subjects_of_type(class) {
                if self.is_deprecated(subject.as_ref()) {
                    continue;
                }
                out.push(self.scheme_summary(subject)?);
            }
        }
        out.sort_by(|a, b| a.label.cmp(&b.label));
        Ok(out)
    }

    fn scheme_summary(&self, resource: NamedNode) -> Result<SchemeSummary> {
        let subject = resource.as_ref();
        let label = self.label(subject);
        let created = self.created_date(subject)?;
        let modified = self.modified_date(subject)?;
        let description = self.description(subject);
        Ok(SchemeSummary {
            resource,
            label,
            created,
            modified,
            description,
        })
    }

    // ===== schema.org agent details =====

    /// schema:parentOrganization, labelled singleton.
    pub fn parent_organization(&self, uri: NamedNodeRef<'_>) -> Option<Labelled> {
        self.labelled_singleton(uri, vocab::schema::PARENT_ORGANIZATION)
    }

    /// schema:contactPoint, labelled singleton.
    pub fn contact_point(&self, uri: NamedNodeRef<'_>) -> Option<Labelled> {
        self.labelled_singleton(uri, vocab::schema::CONTACT_POINT)
    }

    /// schema:memberOf, labelled singleton.
    pub fn org_member_of(&self, uri: NamedNodeRef<'_>) -> Option<Labelled> {
        self.labelled_singleton(uri, vocab::schema::MEMBER_OF)
    }

    /// schema:member resources, labelled, store order.
    pub fn organization_members(&self, uri: NamedNodeRef<'_>) -> Vec<Labelled> {
        self.named_objects(uri, vocab::schema::MEMBER)
            .into_iter()
            .map(|node| self.labelled(node))
            .collect()
    }

    /// schema:subOrganization resources, labelled, store order.
    pub fn sub_organizations(&self, uri: NamedNodeRef<'_>) -> Vec<Labelled> {
        self.named_objects(uri, vocab::schema::SUB_ORGANIZATION)
            .into_iter()
            .map(|node| self.labelled(node))
            .collect()
    }

    /// schema:familyName, first value if any.
    pub fn family_name(&self, uri: NamedNodeRef<'_>) -> Option<String> {
        self.store().first_value(uri, vocab::schema::FAMILY_NAME)
    }

    /// schema:givenName, first value if any.
    pub fn given_name(&self, uri: NamedNodeRef<'_>) -> Option<String> {
        self.store().first_value(uri, vocab::schema::GIVEN_NAME)
    }

    /// schema:honorificPrefix, first value if any.
    pub fn honorific_prefix(&self, uri: NamedNodeRef<'_>) -> Option<String> {
        self.store().first_value(uri, vocab::schema::HONORIFIC_PREFIX)
    }

    /// schema:jobTitle, first value if any.
    pub fn job_title(&self, uri: NamedNodeRef<'_>) -> Option<String> {
        self.store().first_value(uri, vocab::schema::JOB_TITLE)
    }

    fn labelled_singleton(
        &self,
        uri: NamedNodeRef<'_>,
        predicate: NamedNodeRef<'_>,
    ) -> Option<Labelled> {
        self.named_objects(uri, predicate)
            .into_iter()
            .next()
            .map(|node| self.labelled(node))
    }

    /// First reified rdf:Statement whose rdf:subject is the given URI, with
    /// its mapping details.
    pub fn mapping_statement(&self, uri: NamedNodeRef<'_>) -> Result<Option<MappingStatement>> {
        for statement in self.store().subjects_of_type(vocab::rdf::STATEMENT) {
            let subject = statement.as_ref();
            if !self.store().has(subject, vocab::rdf::SUBJECT, uri.into()) {
                continue;
            }
            let predicate = self.store().first_object(subject, vocab::rdf::PREDICATE);
            let object = self.store().first_object(subject, vocab::rdf::OBJECT);
            let created = self.created_date(subject)?;
            let creator = self.creator(subject);
            let description = self.description(subject).map(|d| d.value);
            return Ok(Some(MappingStatement {
                statement,
                predicate,
                object,
                created,
                creator,
                description,
            }));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::VocabError;
    use crate::label::NoDereference;
    use crate::store::VocabStore;

    fn fixture() -> VocabStore {
        let store = VocabStore::new().unwrap();
        store
            .load_turtle(
                r#"
                @prefix skos: <http://www.w3.org/2004/02/skos/core#> .
                @prefix dcterms: <http://purl.org/dc/terms/> .
                @prefix owl: <http://www.w3.org/2002/07/owl#> .
                @prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
                @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
                @prefix ex: <http://example.org/voc/> .

                ex:scheme a skos:ConceptScheme ;
                    skos:prefLabel "Soils" ;
                    dcterms:description "Soil vocabulary" ;
                    dcterms:created "2019-03-01" .

                ex:oldScheme a skos:ConceptScheme ;
                    skos:prefLabel "Old Soils" ;
                    owl:deprecated "true"^^xsd:boolean .

                ex:group a skos:Collection ;
                    skos:prefLabel "Groupings" .

                ex:clay a skos:Concept ;
                    skos:prefLabel "Clay" ;
                    skos:definition "Fine-grained soil" ;
                    skos:altLabel "Heavy soil", "Argil" ;
                    dcterms:created "2020-01-15" ;
                    dcterms:modified "2021-06-30T12:00:00" ;
                    skos:inScheme ex:scheme .

                ex:sand a skos:Concept ;
                    skos:prefLabel "Sand" ;
                    skos:inScheme ex:scheme .

                ex:map a rdf:Statement ;
                    rdf:subject ex:clay ;
                    rdf:predicate skos:exactMatch ;
                    rdf:object ex:elsewhereClay ;
                    dcterms:created "2022-02-02" ;
                    dcterms:creator ex:curator ;
                    dcterms:description "Asserted during the 2022 review" .
                "#,
            )
            .unwrap();
        store
    }

    fn node(iri: &str) -> NamedNode {
        NamedNode::new(iri).unwrap()
    }

    /// Test: concept register is label-sorted with dates and schemes
    #[test]
    fn test_list_concepts() {
        let store = fixture();
        let reader = VocabReader::new(&store, &NoDereference);
        let concepts = reader.list_concepts().unwrap();
        let labels: Vec<&str> = concepts.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Clay", "Sand"]);

        let clay = &concepts[0];
        assert_eq!(clay.created, NaiveDate::from_ymd_opt(2020, 1, 15));
        assert_eq!(clay.modified, NaiveDate::from_ymd_opt(2021, 6, 30));
        assert_eq!(clay.definition.as_deref(), Some("Fine-grained soil"));
        assert_eq!(clay.schemes.len(), 1);
        assert_eq!(clay.schemes[0].label, "Soils");
    }

    /// Test: scheme register keeps deprecated schemes, home register drops them
    #[test]
    fn test_scheme_registers() {
        let store = fixture();
        let reader = VocabReader::new(&store, &NoDereference);

        let all = reader.list_concept_schemes().unwrap();
        let labels: Vec<&str> = all.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Old Soils", "Soils"]);

        let home = reader.list_concept_schemes_and_collections().unwrap();
        let labels: Vec<&str> = home.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Groupings", "Soils"]);
    }

    /// Test: description records which predicate supplied it
    #[test]
    fn test_description_predicate() {
        let store = fixture();
        let reader = VocabReader::new(&store, &NoDereference);
        let scheme = node("http://example.org/voc/scheme");
        let description = reader.description(scheme.as_ref()).unwrap();
        assert_eq!(description.value, "Soil vocabulary");
        assert_eq!(description.predicate.as_str(), "http://purl.org/dc/terms/description");
    }

    /// Test: alt labels come back sorted
    #[test]
    fn test_alt_labels_sorted() {
        let store = fixture();
        let reader = VocabReader::new(&store, &NoDereference);
        let clay = node("http://example.org/voc/clay");
        assert_eq!(reader.alt_labels(clay.as_ref()), vec!["Argil", "Heavy soil"]);
    }

    /// Test: a malformed created date is fatal for the register
    #[test]
    fn test_malformed_date_fatal() {
        let store = VocabStore::new().unwrap();
        store
            .load_turtle(
                r#"
                @prefix skos: <http://www.w3.org/2004/02/skos/core#> .
                @prefix dcterms: <http://purl.org/dc/terms/> .
                @prefix ex: <http://example.org/voc/> .

                ex:bad a skos:Concept ;
                    skos:prefLabel "Bad" ;
                    dcterms:created "sometime in 2020" .
                "#,
            )
            .unwrap();
        let reader = VocabReader::new(&store, &NoDereference);
        let result = reader.list_concepts();
        assert!(matches!(result, Err(VocabError::MalformedDate(_))));
    }

    /// Test: mapping statement assembles the reified assertion
    #[test]
    fn test_mapping_statement() {
        let store = fixture();
        let reader = VocabReader::new(&store, &NoDereference);
        let clay = node("http://example.org/voc/clay");
        let mapping = reader.mapping_statement(clay.as_ref()).unwrap().unwrap();
        assert_eq!(mapping.statement.as_str(), "http://example.org/voc/map");
        assert_eq!(mapping.created, NaiveDate::from_ymd_opt(2022, 2, 2));
        assert_eq!(
            mapping.description.as_deref(),
            Some("Asserted during the 2022 review")
        );
        assert!(mapping.predicate.is_some());
        assert!(mapping.object.is_some());
        assert!(mapping.creator.is_some());

        let sand = node("http://example.org/voc/sand");
        assert!(reader.mapping_statement(sand.as_ref()).unwrap().is_none());
    }

    /// Test: absent dates are None, not errors
    #[test]
    fn test_absent_dates_ok() {
        let store = fixture();
        let reader = VocabReader::new(&store, &NoDereference);
        let sand = node("http://example.org/voc/sand");
        assert_eq!(reader.created_date(sand.as_ref()).unwrap(), None);
        assert_eq!(reader.modified_date(sand.as_ref()).unwrap(), None);
    }
}
