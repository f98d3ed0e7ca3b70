// src/github/model.rs
// =============================================================================
// Typed records for the two upstream responses we consume.
//
//   GET /users/{username}/repos              -> [{ name, owner: { login }, fork }]
//   GET /repos/{username}/{repo}/branches    -> [{ name, commit: { sha } }]
//
// Unknown JSON fields are ignored (serde's default), missing fields fail the
// parse. The same structs are serialized back out by the `repos --json`
// command and the HTTP boundary, with one difference: `fork` is read from
// upstream but never written.
// =============================================================================

use serde::{Deserialize, Serialize};

/// The account that owns a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub login: String,
}

/// A commit identified by its hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRef {
    pub sha: String,
}

/// One branch head: its name and the latest commit it points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
    pub commit: CommitRef,
}

/// A repository as listed by the upstream API.
///
/// `branches` is empty straight out of the repository listing; the aggregator
/// fills it via [`Repository::with_branches`] before the value leaves the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub owner: Owner,

    /// Only used to filter forks out. Never serialized.
    #[serde(skip_serializing)]
    pub fork: bool,

    #[serde(default)]
    pub branches: Vec<Branch>,
}

impl Repository {
    /// Returns the same repository with its branch list replaced.
    pub fn with_branches(self, branches: Vec<Branch>) -> Self {
        Self { branches, ..self }
    }
}
