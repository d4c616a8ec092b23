// src/repo.rs
// =============================================================================
// The one data type that flows through the whole program: a repository record.
//
// A record is built by the fetcher, possibly dropped by the filter, and then
// handed to one of the output writers. Fields are private so a record cannot
// be changed after it is built.
//
// Rust concepts:
// - Private fields + getters: Immutability enforced by the type system
// - serde rename: Control the key names used in JSON output
// =============================================================================

use serde::Serialize;

// Text used when GitHub reports no description for a repository
pub const NO_DESCRIPTION: &str = "No description";

// One repository as written to the output file
//
// Serialized keys are Name, URL, Description, in that order
// (serde writes struct fields in declaration order)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryRecord {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "URL")]
    url: String,
    #[serde(rename = "Description")]
    description: String,
}

impl RepositoryRecord {
    // Builds a record
    //
    // Parameters:
    //   name: repository short name, e.g. "hello-world"
    //   url: the repository's page on github.com
    //   description: None (or an empty string) becomes NO_DESCRIPTION
    pub fn new(name: impl Into<String>, url: impl Into<String>, description: Option<String>) -> Self {
        // GitHub sends null for no description, but "" means the same thing
        let description = description
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());

        Self {
            name: name.into(),
            url: url.into(),
            description,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

// A fetched record that still carries the fork flag
//
// The flag is only needed by the filter; it never reaches the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryCandidate {
    pub record: RepositoryRecord,
    pub is_fork: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_description_uses_placeholder() {
        let record = RepositoryRecord::new("B", "https://github.com/octocat/B", None);
        assert_eq!(record.description(), NO_DESCRIPTION);
    }

    #[test]
    fn test_empty_description_uses_placeholder() {
        let record = RepositoryRecord::new("B", "https://github.com/octocat/B", Some(String::new()));
        assert_eq!(record.description(), "No description");
    }

    #[test]
    fn test_description_kept() {
        let record = RepositoryRecord::new("B", "u", Some("A tool".to_string()));
        assert_eq!(record.name(), "B");
        assert_eq!(record.url(), "u");
        assert_eq!(record.description(), "A tool");
    }

    #[test]
    fn test_serialized_key_order() {
        let record = RepositoryRecord::new("B", "u", None);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"Name":"B","URL":"u","Description":"No description"}"#);
    }
}
