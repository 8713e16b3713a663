//! Close-tag resolution.
//!
//! A policy combines two independent choices: how far to look for the element
//! being closed (only the active element, or the whole chain of ancestors),
//! and what to do when nothing matches (raise, ignore the tag, or close one
//! level anyway).

use std::fmt;
use std::str::FromStr;

use crate::{Document, NodeId, StructuralError};

/// How `</name>` is resolved against the open elements.
///
/// `</>` is not subject to any policy: it always closes exactly one level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ClosingPolicy {
    /// Close the active element, whatever the name says.
    Forcing,
    /// Close the active element if its name matches, raise otherwise.
    Strict,
    /// Close the active element if its name matches, ignore the tag otherwise.
    Ignoring,
    /// Close up to the nearest open element with that name; ignore the tag if
    /// there is none.
    Searching,
    /// Close up to the nearest open element with that name; raise if there is
    /// none.
    StrictSearching,
    /// Close up to the nearest open element with that name; close one level
    /// if there is none.
    #[default]
    ForcingSearching,
    /// Same as [`ClosingPolicy::Searching`].
    IgnoringSearching,
}

/// What happens when no open element matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Miss {
    Raise,
    Stay,
    Pop,
}

/// An unknown policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown closing policy `{0}`")]
pub struct UnknownPolicy(pub String);

impl ClosingPolicy {
    /// Every policy, in declaration order.
    pub const ALL: [ClosingPolicy; 7] = [
        ClosingPolicy::Forcing,
        ClosingPolicy::Strict,
        ClosingPolicy::Ignoring,
        ClosingPolicy::Searching,
        ClosingPolicy::StrictSearching,
        ClosingPolicy::ForcingSearching,
        ClosingPolicy::IgnoringSearching,
    ];

    /// The policy's configuration name.
    pub fn name(self) -> &'static str {
        match self {
            ClosingPolicy::Forcing => "forcing",
            ClosingPolicy::Strict => "strict",
            ClosingPolicy::Ignoring => "ignoring",
            ClosingPolicy::Searching => "searching",
            ClosingPolicy::StrictSearching => "strict_searching",
            ClosingPolicy::ForcingSearching => "forcing_searching",
            ClosingPolicy::IgnoringSearching => "ignoring_searching",
        }
    }

    /// Whether the policy looks past the active element.
    pub fn is_searching(self) -> bool {
        matches!(
            self,
            ClosingPolicy::Searching
                | ClosingPolicy::StrictSearching
                | ClosingPolicy::ForcingSearching
                | ClosingPolicy::IgnoringSearching
        )
    }

    fn on_miss(self) -> Miss {
        match self {
            ClosingPolicy::Strict | ClosingPolicy::StrictSearching => Miss::Raise,
            ClosingPolicy::Forcing | ClosingPolicy::ForcingSearching => Miss::Pop,
            ClosingPolicy::Ignoring
            | ClosingPolicy::Searching
            | ClosingPolicy::IgnoringSearching => Miss::Stay,
        }
    }

    /// Resolve `</name>` while `active` is the innermost open element.
    ///
    /// Returns the element that is active afterwards.
    pub fn resolve(
        self,
        doc: &Document,
        active: NodeId,
        name: &str,
    ) -> Result<NodeId, StructuralError> {
        let matched = match self {
            ClosingPolicy::Forcing => Some(active),
            _ if self.is_searching() => find_open(doc, active, name),
            _ => (doc.name(active) == Some(name)).then_some(active),
        };
        if let Some(matched) = matched {
            return Ok(close_one(doc, matched));
        }
        match self.on_miss() {
            Miss::Raise => Err(StructuralError::UnmatchedClose {
                name: name.to_string(),
                open: doc.name(active).map(str::to_string),
            }),
            Miss::Stay => Ok(active),
            Miss::Pop => Ok(close_one(doc, active)),
        }
    }
}

/// The element that becomes active when `id` is closed. The root stays open.
pub(crate) fn close_one(doc: &Document, id: NodeId) -> NodeId {
    doc.parent(id).unwrap_or(id)
}

/// Nearest element named `name`, starting at `active` and walking up. The
/// root has no name and never matches.
fn find_open(doc: &Document, active: NodeId, name: &str) -> Option<NodeId> {
    let mut cursor = Some(active);
    while let Some(id) = cursor {
        if doc.name(id) == Some(name) {
            return Some(id);
        }
        cursor = doc.parent(id);
    }
    None
}

impl FromStr for ClosingPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClosingPolicy::ALL
            .into_iter()
            .find(|policy| policy.name() == s)
            .ok_or_else(|| UnknownPolicy(s.to_string()))
    }
}

impl fmt::Display for ClosingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
