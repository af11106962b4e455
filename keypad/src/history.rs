use std::time::SystemTime;

/// One committed evaluation. Immutable once recorded; only the bulk
/// clear ever removes entries.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub id: u64,
    pub expression: String,
    pub result: String,
    pub created: SystemTime,
}

pub struct History {
    entries: Vec<HistoryEntry>,
    next_id: u64,
}

impl History {
    pub fn new() -> History {
        History { entries: Vec::new(), next_id: 0 }
    }

    /// Record a successful evaluation, newest first, and return its id.
    pub fn record(&mut self, expression: &str, result: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.insert(0, HistoryEntry {
            id,
            expression: expression.to_string(),
            result: result.to_string(),
            created: SystemTime::now(),
        });
        tracing::debug!(id, expression, result, "history entry recorded");
        id
    }

    /// Newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn find(&self, id: u64) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        tracing::debug!(dropped = self.entries.len(), "history cleared");
        self.entries.clear();
    }
}

impl Default for History {
    fn default() -> History {
        History::new()
    }
}

///////////////////////////////////////////////////////////////////////////////
