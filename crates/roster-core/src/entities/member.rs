//! Member entity - a player in the game clan

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Clan member as reported by the game API
///
/// Identity is the `tag` alone. The display `name` can change upstream and is
/// ignored by equality and hashing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub tag: String,
    pub name: String,
}

impl Member {
    /// Create a new Member
    ///
    /// The tag is taken as-is; no format validation is applied.
    pub fn new(tag: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            name: name.into(),
        }
    }
}

impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
    }
}

impl Eq for Member {}

impl Hash for Member {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tag.hash(state);
    }
}

/// Result of a member fetch that reached the game API
///
/// Transport and HTTP failures are reported as errors instead, so a caller can
/// tell "the clan has no members" apart from "the member list never arrived".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberFetch {
    /// The response carried a member list (possibly empty)
    Fetched(Vec<Member>),
    /// The response had no `memberList` field
    MissingMemberList,
}
