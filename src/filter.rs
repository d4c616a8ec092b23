// src/filter.rs
// =============================================================================
// Drops fetched repositories the user asked to leave out.
//
// Two predicates are supported:
// - exclude forks
// - exclude repositories whose name contains "github.io" (GitHub Pages sites)
//
// The filter never reorders anything; the output keeps the order returned
// by the API.
// =============================================================================

use crate::repo::{RepositoryCandidate, RepositoryRecord};

// Name fragment that marks a GitHub Pages repository
const GITHUB_IO: &str = "github.io";

// Which filters are active for this run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub exclude_forks: bool,
    pub exclude_github_io: bool,
}

impl FilterOptions {
    // Returns true if the candidate survives every active filter
    fn keeps(&self, candidate: &RepositoryCandidate) -> bool {
        // Forks are dropped only when --filter-fork was given
        if self.exclude_forks && candidate.is_fork {
            return false;
        }
        // A plain substring match, so "foo.github.io-theme" is dropped too
        if self.exclude_github_io && candidate.record.name().contains(GITHUB_IO) {
            return false;
        }
        true
    }
}

// Applies the filters to the fetched candidates
//
// Returns: the surviving records in their original order, without the
// fork flag (it is not part of the output)
pub fn filter_repositories(
    candidates: Vec<RepositoryCandidate>,
    options: &FilterOptions,
) -> Vec<RepositoryRecord> {
    candidates
        .into_iter()
        .filter(|c| options.keeps(c))
        .map(|c| c.record)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, is_fork: bool) -> RepositoryCandidate {
        RepositoryCandidate {
            record: RepositoryRecord::new(name, format!("https://github.com/octocat/{}", name), None),
            is_fork,
        }
    }

    fn names(records: &[RepositoryRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name()).collect()
    }

    fn sample() -> Vec<RepositoryCandidate> {
        vec![
            candidate("alpha", false),
            candidate("octocat.github.io", false),
            candidate("forked", true),
            candidate("fork.github.io", true),
            candidate("omega", false),
        ]
    }

    #[test]
    fn test_no_filters_keeps_everything_in_order() {
        let out = filter_repositories(sample(), &FilterOptions::default());
        assert_eq!(
            names(&out),
            vec!["alpha", "octocat.github.io", "forked", "fork.github.io", "omega"]
        );
    }

    #[test]
    fn test_filter_forks() {
        let options = FilterOptions {
            exclude_forks: true,
            ..Default::default()
        };
        let out = filter_repositories(sample(), &options);
        assert_eq!(names(&out), vec!["alpha", "octocat.github.io", "omega"]);
    }

    #[test]
    fn test_filter_github_io() {
        let options = FilterOptions {
            exclude_github_io: true,
            ..Default::default()
        };
        let out = filter_repositories(sample(), &options);
        assert_eq!(names(&out), vec!["alpha", "forked", "omega"]);
        assert!(out.iter().all(|r| !r.name().contains("github.io")));
    }

    #[test]
    fn test_both_filters_combine() {
        let options = FilterOptions {
            exclude_forks: true,
            exclude_github_io: true,
        };
        let out = filter_repositories(sample(), &options);
        assert_eq!(names(&out), vec!["alpha", "omega"]);
    }

    #[test]
    fn test_everything_filtered_is_empty_not_error() {
        let options = FilterOptions {
            exclude_forks: true,
            exclude_github_io: false,
        };
        let out = filter_repositories(vec![candidate("a", true), candidate("b", true)], &options);
        assert!(out.is_empty());
    }
}
