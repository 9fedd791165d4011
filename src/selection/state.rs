//! Selection state management for search suggestions
//!
//! Tracks which suggestion is highlighted. No highlight means the raw query
//! is the target of a commit.

/// What a commit acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitTarget {
    /// Open the suggestion at this index
    Item(usize),
    /// Submit the raw query text
    RawQuery,
}

/// Selection state for suggestion navigation
///
/// `None` is the unselected state; `Some(i)` highlights suggestion `i`.
/// Callers pass the current result count to every transition so the index
/// is always valid for the results on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_index: Option<usize>,
}

impl SelectionState {
    /// Create a new SelectionState with no selection
    pub fn new() -> Self {
        Self {
            selected_index: None,
        }
    }

    /// Highlight a specific suggestion (pointer selection)
    ///
    /// Out-of-range indices leave the state unselected.
    pub fn select_index(&mut self, index: usize, result_count: usize) {
        self.selected_index = (index < result_count).then_some(index);
    }

    /// Back to unselected; called whenever results are replaced
    pub fn reset(&mut self) {
        self.selected_index = None;
    }

    /// Get the currently highlighted suggestion index
    pub fn get_selected(&self) -> Option<usize> {
        self.selected_index
    }

    /// Highlight position as a signed index, -1 when unselected
    pub fn index(&self) -> isize {
        self.selected_index.map_or(-1, |i| i as isize)
    }

    /// Move to the next suggestion (Down / Tab)
    ///
    /// Wraps around to the first suggestion when at the end; starts at the
    /// first suggestion when unselected.
    pub fn advance(&mut self, result_count: usize) {
        if result_count == 0 {
            return;
        }

        self.selected_index = match self.selected_index {
            Some(current) => Some((current + 1) % result_count),
            None => Some(0),
        };
    }

    /// Move to the previous suggestion (Up / BackTab)
    ///
    /// From the first suggestion or from unselected, wraps to the last.
    pub fn retreat(&mut self, result_count: usize) {
        if result_count == 0 {
            return;
        }

        self.selected_index = match self.selected_index {
            Some(current) if current > 0 => Some(current - 1),
            _ => Some(result_count - 1),
        };
    }

    /// Resolve what Enter should act on
    pub fn commit_target(&self, result_count: usize) -> CommitTarget {
        match self.selected_index {
            Some(i) if i < result_count => CommitTarget::Item(i),
            _ => CommitTarget::RawQuery,
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
