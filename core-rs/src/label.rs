//! Display-label resolution.
//!
//! Priority order: skos:prefLabel, dcterms:title, rdfs:label, then (when the
//! caller allows it) a single remote dereference of the URI itself, and
//! finally a label synthesized from the URI's trailing segment. Synthesis
//! always succeeds, so resolution cannot fail.

use std::time::Duration;

use oxigraph::model::{NamedNode, NamedNodeRef};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use tracing::debug;

use crate::store::VocabStore;
use crate::vocab;

/// Outcome of a remote label lookup. Network errors, non-2xx responses and
/// unparseable bodies all collapse into `Missing`; the caller falls back to
/// synthesis rather than seeing an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteLabel {
    Found(String),
    Missing,
}

/// Collaborator that fetches a label by dereferencing a URI.
pub trait Dereference {
    fn label_for(&self, uri: &str) -> RemoteLabel;
}

/// reqwest-backed dereferencer: one GET per call, `Accept: text/turtle`,
/// no retries, bounded by a timeout.
pub struct HttpDereferencer {
    client: Client,
}

impl HttpDereferencer {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(5))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client }
    }
}

impl Default for HttpDereferencer {
    fn default() -> Self {
        Self::new()
    }
}

impl Dereference for HttpDereferencer {
    fn label_for(&self, uri: &str) -> RemoteLabel {
        let response = match self.client.get(uri).header(ACCEPT, "text/turtle").send() {
            Ok(response) => response,
            Err(e) => {
                debug!(uri, error = %e, "dereference request failed");
                return RemoteLabel::Missing;
            }
        };
        if !response.status().is_success() {
            debug!(uri, status = %response.status(), "dereference returned non-2xx");
            return RemoteLabel::Missing;
        }
        let body = match response.text() {
            Ok(body) => body,
            Err(e) => {
                debug!(uri, error = %e, "failed reading dereference body");
                return RemoteLabel::Missing;
            }
        };

        let fetched = match VocabStore::new() {
            Ok(store) => store,
            Err(_) => return RemoteLabel::Missing,
        };
        if let Err(e) = fetched.load_turtle(&body) {
            debug!(uri, error = %e, "dereferenced body is not valid turtle");
            return RemoteLabel::Missing;
        }
        let subject = match NamedNode::new(uri) {
            Ok(node) => node,
            Err(_) => return RemoteLabel::Missing,
        };

        // prefLabel first, then rdfs:label; dcterms:title is not re-checked
        // against the fetched graph.
        fetched
            .first_value(subject.as_ref(), vocab::skos::PREF_LABEL)
            .or_else(|| fetched.first_value(subject.as_ref(), vocab::rdfs::LABEL))
            .map(RemoteLabel::Found)
            .unwrap_or(RemoteLabel::Missing)
    }
}

/// Dereferencer that never touches the network.
pub struct NoDereference;

impl Dereference for NoDereference {
    fn label_for(&self, _uri: &str) -> RemoteLabel {
        RemoteLabel::Missing
    }
}

/// Resolves display labels against a store, with a pluggable remote fallback.
pub struct LabelResolver<'a> {
    store: &'a VocabStore,
    remote: &'a dyn Dereference,
}

impl<'a> LabelResolver<'a> {
    pub fn new(store: &'a VocabStore, remote: &'a dyn Dereference) -> Self {
        Self { store, remote }
    }

    /// Full chain including the remote fallback. On a remote miss the label
    /// is synthesized from the trailing URI segment, camel-case split.
    pub fn resolve(&self, uri: NamedNodeRef<'_>) -> String {
        if let Some(label) = self.structured(uri) {
            return label;
        }
        match self.remote.label_for(uri.as_str()) {
            RemoteLabel::Found(label) => label,
            RemoteLabel::Missing => split_camel_case(trailing_segment(uri.as_str())),
        }
    }

    /// Local-only chain: structured labels, else the trailing segment
    /// verbatim. Used for predicate labels where a network round-trip per
    /// property row would be unreasonable.
    pub fn resolve_local(&self, uri: NamedNodeRef<'_>) -> String {
        self.structured(uri)
            .unwrap_or_else(|| trailing_segment(uri.as_str()).to_string())
    }

    fn structured(&self, uri: NamedNodeRef<'_>) -> Option<String> {
        self.store
            .first_value(uri, vocab::skos::PREF_LABEL)
            .or_else(|| self.store.first_value(uri, vocab::dcterms::TITLE))
            .or_else(|| self.store.first_value(uri, vocab::rdfs::LABEL))
    }
}

/// Last path or fragment segment of a URI.
pub fn trailing_segment(uri: &str) -> &str {
    let after_hash = uri.rsplit('#').next().unwrap_or(uri);
    after_hash.rsplit('/').next().unwrap_or(after_hash)
}

/// Split on internal uppercase boundaries: `hasSoilType` -> `has Soil Type`.
pub fn split_camel_case(label: &str) -> String {
    let mut out = String::with_capacity(label.len() + 8);
    for ch in label.chars() {
        if ch.is_uppercase() && !out.is_empty() {
            out.push(' ');
        }
        out.push(ch);
    }
    out.trim().to_string()
}
