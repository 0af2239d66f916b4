//! Per-slot lists of animation names offered to the user.

use super::AoSlot;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceList {
    pub names: Vec<String>,
    pub selected: Option<String>,
}

impl ChoiceList {
    /// Select `name` if already listed; otherwise append and select it.
    pub fn add_or_select(&mut self, name: &str) {
        if !self.names.iter().any(|n| n == name) {
            self.names.push(name.to_string());
        }
        self.selected = Some(name.to_string());
    }

    /// Select `name` only if it is listed. Returns whether it was.
    pub fn select(&mut self, name: &str) -> bool {
        if self.names.iter().any(|n| n == name) {
            self.selected = Some(name.to_string());
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.names.clear();
        self.selected = None;
    }
}

/// Choice lists for every override slot.
#[derive(Debug, Clone, Default)]
pub struct SlotChoices {
    lists: BTreeMap<AoSlot, ChoiceList>,
}

impl SlotChoices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: AoSlot) -> Option<&ChoiceList> {
        self.lists.get(&slot)
    }

    pub fn get_mut(&mut self, slot: AoSlot) -> &mut ChoiceList {
        self.lists.entry(slot).or_default()
    }

    pub fn names(&self, slot: AoSlot) -> &[String] {
        self.lists.get(&slot).map(|l| l.names.as_slice()).unwrap_or(&[])
    }

    pub fn selected(&self, slot: AoSlot) -> Option<&str> {
        self.lists.get(&slot).and_then(|l| l.selected.as_deref())
    }

    pub fn clear(&mut self) {
        self.lists.clear();
    }
}
