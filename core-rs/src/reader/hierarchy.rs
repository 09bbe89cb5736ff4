//! Concept hierarchy rendering.
//!
//! Builds a nested outline of everything reachable from a scheme's top
//! concepts or a collection's members, descending through the union of
//! skos:narrower and skos:member at each level. The outline is emitted as
//! a markdown bullet list and converted to HTML.
//!
//! Vocabulary graphs are not guaranteed acyclic, so a visited set travels
//! with the recursion: a node already emitted is not descended into again.

use std::collections::HashSet;

use oxigraph::model::{NamedNode, NamedNodeRef};
use pulldown_cmark::{html, Parser};

use super::{Labelled, VocabReader};
use crate::link::LinkBuilder;
use crate::vocab;

impl<'a> VocabReader<'a> {
    /// Outline of a concept scheme, seeded from skos:hasTopConcept.
    pub fn concept_hierarchy(&self, root: NamedNodeRef<'_>, links: &dyn LinkBuilder) -> String {
        self.hierarchy_from(root, vocab::skos::HAS_TOP_CONCEPT, links)
    }

    /// Outline of a collection, seeded from skos:member.
    pub fn collection_hierarchy(&self, root: NamedNodeRef<'_>, links: &dyn LinkBuilder) -> String {
        self.hierarchy_from(root, vocab::skos::MEMBER, links)
    }

    fn hierarchy_from(
        &self,
        root: NamedNodeRef<'_>,
        seed_predicate: NamedNodeRef<'_>,
        links: &dyn LinkBuilder,
    ) -> String {
        let mut seeds: Vec<Labelled> = self
            .named_objects(root, seed_predicate)
            .into_iter()
            .filter(|node| !self.is_deprecated(node.as_ref()))
            .map(|node| self.labelled(node))
            .collect();
        Self::sort_by_label(&mut seeds);

        let mut outline = String::new();
        let mut visited: HashSet<NamedNode> = HashSet::new();
        for seed in seeds {
            if !visited.insert(seed.resource.clone()) {
                continue;
            }
            outline.push_str(&format!(
                "- [{}]({})\n",
                seed.label,
                links.detail_path(seed.resource.as_ref())
            ));
            self.add_children(seed.resource.as_ref(), links, &mut outline, 1, &mut visited);
        }

        let mut rendered = String::new();
        html::push_html(&mut rendered, Parser::new(&outline));
        format!(r#"<div id="concept-hierarchy">{}</div>"#, rendered)
    }

    fn add_children(
        &self,
        node: NamedNodeRef<'_>,
        links: &dyn LinkBuilder,
        outline: &mut String,
        indent: usize,
        visited: &mut HashSet<NamedNode>,
    ) {
        let mut children: Vec<Labelled> = self
            .named_objects(node, vocab::skos::NARROWER)
            .into_iter()
            .chain(self.named_objects(node, vocab::skos::MEMBER))
            .filter(|child| !self.is_deprecated(child.as_ref()))
            .map(|child| self.labelled(child))
            .collect();
        Self::sort_by_label(&mut children);

        for child in children {
            // A revisit marks a cycle (or a diamond); stop descending.
            if !visited.insert(child.resource.clone()) {
                continue;
            }
            outline.push_str(&"\t".repeat(indent));
            outline.push_str(&format!(
                "- [{}]({})\n",
                child.label,
                links.detail_path(child.resource.as_ref())
            ));
            self.add_children(child.resource.as_ref(), links, outline, indent + 1, visited);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::NoDereference;
    use crate::link::PathLinkBuilder;
    use crate::store::VocabStore;

    fn reader_fixture() -> VocabStore {
        let store = VocabStore::new().unwrap();
        store
            .load_turtle(
                r#"
                @prefix skos: <http://www.w3.org/2004/02/skos/core#> .
                @prefix owl: <http://www.w3.org/2002/07/owl#> .
                @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
                @prefix ex: <http://example.org/voc/> .

                ex:scheme a skos:ConceptScheme ;
                    skos:hasTopConcept ex:zebra, ex:apple, ex:retired .

                ex:zebra skos:prefLabel "Zebra" .
                ex:apple skos:prefLabel "Apple" ;
                    skos:narrower ex:braeburn .
                ex:braeburn skos:prefLabel "Braeburn" .
                ex:retired skos:prefLabel "Retired" ;
                    owl:deprecated "true"^^xsd:boolean .

                ex:bag a skos:Collection ;
                    skos:member ex:zebra, ex:apple .
                "#,
            )
            .unwrap();
        store
    }

    fn node(iri: &str) -> NamedNode {
        NamedNode::new(iri).unwrap()
    }

    /// Test: top concepts come out label-sorted, deprecated seeds dropped
    #[test]
    fn test_scheme_outline_order() {
        let store = reader_fixture();
        let reader = VocabReader::new(&store, &NoDereference);
        let links = PathLinkBuilder::new("");
        let html_out =
            reader.concept_hierarchy(node("http://example.org/voc/scheme").as_ref(), &links);

        let apple = html_out.find("Apple").unwrap();
        let zebra = html_out.find("Zebra").unwrap();
        assert!(apple < zebra, "Apple must precede Zebra");
        assert!(!html_out.contains("Retired"));
        assert!(html_out.starts_with(r#"<div id="concept-hierarchy">"#));
        assert!(html_out.ends_with("</div>"));
    }

    /// Test: narrower children are nested under their parent
    #[test]
    fn test_nesting() {
        let store = reader_fixture();
        let reader = VocabReader::new(&store, &NoDereference);
        let links = PathLinkBuilder::new("");
        let html_out =
            reader.concept_hierarchy(node("http://example.org/voc/scheme").as_ref(), &links);
        // Braeburn only reachable through Apple
        assert!(html_out.contains("Braeburn"));
        // Nested list implies an inner <ul>
        assert!(html_out.matches("<ul>").count() >= 2);
    }

    /// Test: collection mode seeds from members
    #[test]
    fn test_collection_outline() {
        let store = reader_fixture();
        let reader = VocabReader::new(&store, &NoDereference);
        let links = PathLinkBuilder::new("");
        let html_out =
            reader.collection_hierarchy(node("http://example.org/voc/bag").as_ref(), &links);
        assert!(html_out.contains("Apple"));
        assert!(html_out.contains("Zebra"));
    }

    /// Test: a narrower self-cycle terminates and emits the node once
    #[test]
    fn test_cycle_terminates() {
        let store = VocabStore::new().unwrap();
        store
            .load_turtle(
                r#"
                @prefix skos: <http://www.w3.org/2004/02/skos/core#> .
                @prefix ex: <http://example.org/voc/> .

                ex:scheme a skos:ConceptScheme ;
                    skos:hasTopConcept ex:loop .
                ex:loop skos:prefLabel "Loop" ;
                    skos:narrower ex:loop .
                "#,
            )
            .unwrap();
        let reader = VocabReader::new(&store, &NoDereference);
        let links = PathLinkBuilder::new("");
        let html_out =
            reader.concept_hierarchy(node("http://example.org/voc/scheme").as_ref(), &links);
        assert_eq!(html_out.matches("Loop").count(), 1);
    }

    /// Test: a two-node cycle also terminates
    #[test]
    fn test_mutual_cycle_terminates() {
        let store = VocabStore::new().unwrap();
        store
            .load_turtle(
                r#"
                @prefix skos: <http://www.w3.org/2004/02/skos/core#> .
                @prefix ex: <http://example.org/voc/> .

                ex:scheme skos:hasTopConcept ex:a .
                ex:a skos:prefLabel "Alpha" ; skos:narrower ex:b .
                ex:b skos:prefLabel "Beta" ; skos:narrower ex:a .
                "#,
            )
            .unwrap();
        let reader = VocabReader::new(&store, &NoDereference);
        let links = PathLinkBuilder::new("");
        let html_out =
            reader.concept_hierarchy(node("http://example.org/voc/scheme").as_ref(), &links);
        assert_eq!(html_out.matches("Alpha").count(), 1);
        assert_eq!(html_out.matches("Beta").count(), 1);
    }

    /// Test: links go through the LinkBuilder
    #[test]
    fn test_links_built() {
        let store = reader_fixture();
        let reader = VocabReader::new(&store, &NoDereference);
        let links = PathLinkBuilder::new("/voc");
        let html_out =
            reader.concept_hierarchy(node("http://example.org/voc/scheme").as_ref(), &links);
        assert!(html_out.contains("/voc/object?uri="));
    }
}
