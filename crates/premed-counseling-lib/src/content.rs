//! Static reference documents served as MCP resources
//!
//! Two documents are compiled into the binary:
//! - premed://resources/aamc-guide: AAMC admissions overview (markdown)
//! - premed://resources/counseling-playbook: counseling frameworks (plain text)

use crate::model::{ResourceContents, ResourceInfo};
use crate::{NotFoundError, Result};

/// URI for the AAMC admissions guide.
pub const AAMC_GUIDE_URI: &str = "premed://resources/aamc-guide";
/// URI for the counseling playbook.
pub const COUNSELING_PLAYBOOK_URI: &str = "premed://resources/counseling-playbook";

const AAMC_GUIDE: &str = include_str!("../content/aamc-guide.md");
const COUNSELING_PLAYBOOK: &str = include_str!("../content/counseling-playbook.txt");

/// A URI-addressed document served verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub uri: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub mime_type: &'static str,
    pub body: &'static str,
}

impl Resource {
    pub fn info(&self) -> ResourceInfo {
        ResourceInfo {
            uri: self.uri.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            mime_type: self.mime_type.to_string(),
        }
    }

    pub fn contents(&self) -> ResourceContents {
        ResourceContents {
            uri: self.uri.to_string(),
            mime_type: self.mime_type.to_string(),
            text: self.body.to_string(),
        }
    }
}

/// The fixed set of documents, in listing order.
#[derive(Debug, Clone)]
pub struct ContentStore {
    resources: Vec<Resource>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self {
            resources: vec![
                Resource {
                    uri: AAMC_GUIDE_URI,
                    name: "AAMC Official Pre-Med Guide",
                    description: "Comprehensive admissions guidance from AAMC",
                    mime_type: "text/markdown",
                    body: AAMC_GUIDE,
                },
                Resource {
                    uri: COUNSELING_PLAYBOOK_URI,
                    name: "Pre-Med Counseling Playbook",
                    description: "Expert counseling strategies and frameworks",
                    mime_type: "text/plain",
                    body: COUNSELING_PLAYBOOK,
                },
            ],
        }
    }

    /// Metadata for every document, body excluded.
    pub fn enumerate(&self) -> Vec<ResourceInfo> {
        self.resources.iter().map(Resource::info).collect()
    }

    /// Look up a document by exact URI.
    pub fn fetch(&self, uri: &str) -> Result<&Resource> {
        self.resources
            .iter()
            .find(|r| r.uri == uri)
            .ok_or_else(|| NotFoundError::resource(uri))
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EntityKind;

    #[test]
    fn enumerate_lists_both_documents_in_order() {
        let store = ContentStore::new();
        let uris: Vec<_> = store.enumerate().into_iter().map(|r| r.uri).collect();
        assert_eq!(uris, vec![AAMC_GUIDE_URI, COUNSELING_PLAYBOOK_URI]);
    }

    #[test]
    fn fetch_aamc_guide() {
        let store = ContentStore::new();
        let resource = store.fetch(AAMC_GUIDE_URI).unwrap();
        assert_eq!(resource.mime_type, "text/markdown");
        assert!(resource.body.starts_with("# AAMC Official Pre-Med Guide"));
        assert!(resource.body.contains("Apply broadly (15-25 schools typical)"));
    }

    #[test]
    fn fetch_playbook() {
        let store = ContentStore::new();
        let resource = store.fetch(COUNSELING_PLAYBOOK_URI).unwrap();
        assert_eq!(resource.mime_type, "text/plain");
        assert!(resource.body.contains("STUDENT ASSESSMENT FRAMEWORK:"));
        assert!(resource.body.ends_with("- Financial preparation"));
    }

    #[test]
    fn fetch_unknown_uri_is_not_found() {
        let store = ContentStore::new();
        let err = store.fetch("premed://resources/unknown").unwrap_err();
        assert_eq!(err.kind, EntityKind::Resource);
        assert_eq!(err.name, "premed://resources/unknown");
    }

    #[test]
    fn fetch_requires_exact_match() {
        let store = ContentStore::new();
        assert!(store.fetch("PREMED://resources/aamc-guide").is_err());
        assert!(store.fetch("premed://resources/aamc-guide/").is_err());
        assert!(store.fetch("").is_err());
    }
}
