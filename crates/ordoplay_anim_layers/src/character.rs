// SPDX-License-Identifier: MIT OR Apache-2.0
//! Characters grouping animated objects.

use serde::{Deserialize, Serialize};

/// A character and the objects it animates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Character name
    pub name: String,
    /// Member object names, in rig order
    #[serde(default)]
    pub members: Vec<String>,
}

impl Character {
    /// Create a character with no members
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Create a character with the given members
    pub fn with_members<I, S>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    /// Add a member object, ignoring duplicates
    pub fn add_member(&mut self, object: impl Into<String>) {
        let object = object.into();
        if !self.members.contains(&object) {
            self.members.push(object);
        }
    }

    /// Remove a member object
    pub fn remove_member(&mut self, object: &str) {
        self.members.retain(|m| m != object);
    }
}
