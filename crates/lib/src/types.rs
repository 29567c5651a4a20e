//! # Core Types
//!
//! The closed sets the engine works with: who is talking to whom, how formally,
//! what the message is trying to do, and which campus area it concerns.

use crate::errors::ChatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The social relationship between the student and the party they address.
#[derive(Default, Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Hierarchy {
    /// A student talking to administrative staff. (Default)
    #[default]
    StudentToStaff,
    /// A student talking to a lecturer.
    StudentToDosen,
    /// Students talking among themselves.
    PeerToPeer,
}

impl Hierarchy {
    pub const ALL: [Hierarchy; 3] = [
        Hierarchy::StudentToStaff,
        Hierarchy::StudentToDosen,
        Hierarchy::PeerToPeer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Hierarchy::StudentToStaff => "student-to-staff",
            Hierarchy::StudentToDosen => "student-to-dosen",
            Hierarchy::PeerToPeer => "peer-to-peer",
        }
    }

    /// Whether the conversation crosses a status boundary.
    pub fn hierarchy_aware(&self) -> bool {
        !matches!(self, Hierarchy::PeerToPeer)
    }
}

impl fmt::Display for Hierarchy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Hierarchy {
    type Err = ChatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hierarchy::ALL
            .into_iter()
            .find(|h| h.as_str() == s)
            .ok_or_else(|| ChatError::UnknownHierarchy(s.to_string()))
    }
}

/// The register of the conversation.
#[derive(Default, Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Formality {
    #[default]
    Casual,
    Formal,
}

impl Formality {
    pub const ALL: [Formality; 2] = [Formality::Casual, Formality::Formal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Formality::Casual => "casual",
            Formality::Formal => "formal",
        }
    }

    pub fn respect_level(&self) -> &'static str {
        match self {
            Formality::Formal => "high",
            Formality::Casual => "medium",
        }
    }
}

impl fmt::Display for Formality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Formality {
    type Err = ChatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Formality::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ChatError::UnknownFormality(s.to_string()))
    }
}

/// What a message is trying to do, as far as keyword matching can tell.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Greeting,
    Farewell,
    Complaint,
    Praise,
    Inquiry,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Farewell => "farewell",
            Intent::Complaint => "complaint",
            Intent::Praise => "praise",
            Intent::Inquiry => "inquiry",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The campus area a topic belongs to.
#[derive(Default, Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Academic,
    Financial,
    Facilities,
    Services,
    #[default]
    General,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Academic => "academic",
            Category::Financial => "financial",
            Category::Facilities => "facilities",
            Category::Services => "services",
            Category::General => "general",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
