//! Navigation history
//!
//! Browser-style entry stack: pushing drops any forward entries.

/// Stack of visited paths with a cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebHistory {
    entries: Vec<String>,
    position: usize,
}

impl WebHistory {
    /// Start a history at `initial`
    pub fn new<S: Into<String>>(initial: S) -> Self {
        Self {
            entries: vec![initial.into()],
            position: 0,
        }
    }

    /// Current path
    pub fn current(&self) -> &str {
        &self.entries[self.position]
    }

    /// Visit a new path
    pub fn push<S: Into<String>>(&mut self, path: S) {
        self.entries.truncate(self.position + 1);
        self.entries.push(path.into());
        self.position += 1;
    }

    /// Replace the current entry without adding one
    pub fn replace<S: Into<String>>(&mut self, path: S) {
        self.entries[self.position] = path.into();
    }

    /// Step back; `None` at the first entry
    pub fn back(&mut self) -> Option<&str> {
        if self.position == 0 {
            return None;
        }
        self.position -= 1;
        Some(self.current())
    }

    /// Step forward; `None` at the last entry
    pub fn forward(&mut self) -> Option<&str> {
        if self.position + 1 >= self.entries.len() {
            return None;
        }
        self.position += 1;
        Some(self.current())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a history starts with one entry
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
