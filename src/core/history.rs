//! Linear undo/redo history of visited states.
//!
//! The history is a stack of entries plus a cursor pointing at the active
//! one. Entries after the cursor are the redo branch; pushing a new entry
//! discards that branch, the way an editor drops its redo list once you type
//! after undoing.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A state occupied at some point along the current timeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// Name of the state
    pub state: String,
    /// When the state was pushed onto the history
    pub entered_at: DateTime<Utc>,
}

/// Ordered history of visited states with a movable cursor.
///
/// # Example
///
/// ```rust
/// use retrace::core::StateHistory;
///
/// let mut history = StateHistory::new();
/// history.push("a");
/// history.push("b");
/// history.push("c");
///
/// assert!(history.undo());
/// assert!(history.undo());
/// assert_eq!(history.current(), Some("a"));
///
/// // A new push from the middle discards "b" and "c".
/// history.push("d");
/// assert_eq!(history.path(), vec!["a", "d"]);
/// assert!(!history.redo());
/// ```
#[derive(Clone, Debug, Default, Serialize)]
pub struct StateHistory {
    entries: Vec<HistoryEntry>,
    cursor: Option<usize>,
}

impl StateHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            cursor: None,
        }
    }

    /// Push a state after the cursor, discarding any redo branch.
    ///
    /// Returns the number of discarded entries.
    pub fn push(&mut self, state: impl Into<String>) -> usize {
        let keep = self.cursor.map_or(0, |c| c + 1);
        let discarded = self.entries.len() - keep;
        self.entries.truncate(keep);
        self.entries.push(HistoryEntry {
            state: state.into(),
            entered_at: Utc::now(),
        });
        self.cursor = Some(keep);
        discarded
    }

    /// Move the cursor one entry back. Returns `false` at the oldest entry.
    pub fn undo(&mut self) -> bool {
        match self.cursor {
            Some(c) if c > 0 => {
                self.cursor = Some(c - 1);
                true
            }
            _ => false,
        }
    }

    /// Move the cursor one entry forward. Returns `false` at the newest entry.
    pub fn redo(&mut self) -> bool {
        match self.cursor {
            Some(c) if c + 1 < self.entries.len() => {
                self.cursor = Some(c + 1);
                true
            }
            _ => false,
        }
    }

    /// Drop every entry and leave the cursor unset.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(c) if c > 0)
    }

    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(c) if c + 1 < self.entries.len())
    }

    /// Name of the state under the cursor.
    pub fn current(&self) -> Option<&str> {
        self.current_entry().map(|e| e.state.as_str())
    }

    pub fn current_entry(&self) -> Option<&HistoryEntry> {
        self.cursor.and_then(|c| self.entries.get(c))
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// All entries, oldest first, including the redo branch.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// State names along the timeline, oldest first.
    pub fn path(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.state.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
