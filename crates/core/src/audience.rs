//! Audience selection: the set of personas a user has circled for targeting.

use serde::{Deserialize, Serialize};

/// A persona the user selected, with its size snapshotted at selection time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudienceMember {
    pub name: String,
    /// Estimated audience size when the persona was selected. Growth scaling
    /// always recomputes from this snapshot.
    pub size_at_selection: u64,
}

/// The set of persona names chosen by the user. Names are unique; insertion
/// order is preserved for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudienceSelection {
    members: Vec<AudienceMember>,
}

impl AudienceSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a persona to the selection. Re-adding an already selected name
    /// refreshes its snapshotted size instead of duplicating the entry.
    pub fn select(&mut self, name: impl Into<String>, size: u64) {
        let name = name.into();
        match self.members.iter_mut().find(|m| m.name == name) {
            Some(existing) => existing.size_at_selection = size,
            None => self.members.push(AudienceMember {
                name,
                size_at_selection: size,
            }),
        }
    }

    /// Removes a persona by name. Returns `true` if it was selected.
    pub fn deselect(&mut self, name: &str) -> bool {
        let before = self.members.len();
        self.members.retain(|m| m.name != name);
        self.members.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|m| m.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn members(&self) -> &[AudienceMember] {
        &self.members
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|m| m.name.as_str())
    }

    /// Combined size of all selected personas at their snapshotted values.
    pub fn total_size(&self) -> u64 {
        self.members.iter().map(|m| m.size_at_selection).sum()
    }

    /// Combined size after applying a growth percentage. The scaling is
    /// always computed from the snapshots, so applying it repeatedly never
    /// compounds.
    pub fn scaled_total(&self, growth_percent: u32) -> u64 {
        self.members
            .iter()
            .map(|m| m.size_at_selection * (100 + growth_percent as u64) / 100)
            .sum()
    }
}
