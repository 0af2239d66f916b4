//! Ordered stand animations and the rotation cursor.

use super::AssetId;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandEntry {
    pub override_animation_id: AssetId,
    pub display_name: String,
}

impl StandEntry {
    pub fn new(override_animation_id: AssetId, display_name: impl Into<String>) -> Self {
        Self {
            override_animation_id,
            display_name: display_name.into(),
        }
    }
}

/// Direction of a single cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Previous,
}

/// Stand rotation list. When non-empty the cursor is always in `[0, len)`.
#[derive(Debug, Clone, Default)]
pub struct StandRotation {
    entries: Vec<StandEntry>,
    cursor: usize,
}

impl StandRotation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }

    pub fn append(&mut self, entry: StandEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn entries(&self) -> &[StandEntry] {
        &self.entries
    }

    pub fn current(&self) -> Option<&StandEntry> {
        self.entries.get(self.cursor)
    }

    pub fn get(&self, index: usize) -> Option<&StandEntry> {
        self.entries.get(index)
    }

    /// Move the cursor one step, wrapping. No-op on an empty list.
    pub fn advance(&mut self, step: Step) -> usize {
        let len = self.entries.len();
        if len == 0 {
            return self.cursor;
        }
        self.cursor = match step {
            Step::Next => (self.cursor + 1) % len,
            Step::Previous => (self.cursor + len - 1) % len,
        };
        self.cursor
    }

    /// Put the cursor on `index`, wrapped into range.
    pub fn select(&mut self, index: usize) -> usize {
        if !self.entries.is_empty() {
            self.cursor = index % self.entries.len();
        }
        self.cursor
    }

    /// Jump to a uniformly random index.
    pub fn randomize(&mut self) -> usize {
        self.randomize_with(&mut rand::rng())
    }

    pub fn randomize_with<R: Rng>(&mut self, rng: &mut R) -> usize {
        if !self.entries.is_empty() {
            self.cursor = rng.random_range(0..self.entries.len());
        }
        self.cursor
    }
}
