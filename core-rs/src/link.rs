//! Link generation seam.
//!
//! The hierarchy and property renderers need a detail-page path for each
//! resource; the routing layer owns the real mapping. `PathLinkBuilder`
//! mirrors the default `/object?uri=<encoded>` route.

use oxigraph::model::NamedNodeRef;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

pub trait LinkBuilder {
    /// Detail-page path for a resource.
    fn detail_path(&self, resource: NamedNodeRef<'_>) -> String;
}

pub struct PathLinkBuilder {
    prefix: String,
}

impl PathLinkBuilder {
    /// `sub_url` is the deployment subdirectory, e.g. "/corveg"; empty for
    /// a root deployment.
    pub fn new(sub_url: &str) -> Self {
        Self {
            prefix: format!("{}/object", sub_url.trim_end_matches('/')),
        }
    }
}

impl LinkBuilder for PathLinkBuilder {
    fn detail_path(&self, resource: NamedNodeRef<'_>) -> String {
        let encoded = utf8_percent_encode(resource.as_str(), NON_ALPHANUMERIC);
        format!("{}?uri={}", self.prefix, encoded)
    }
}
