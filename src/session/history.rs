//! Navigation history.

/// Client-side history: read the current path, push a new one without reload.
///
/// Back/forward events are delivered to the session by its owner through
/// [`LanguageSession::on_history_navigated`](super::LanguageSession::on_history_navigated).
pub trait History {
    fn current_path(&self) -> String;
    fn push_path(&mut self, path: &str);
}

impl<H: History + ?Sized> History for &mut H {
    fn current_path(&self) -> String {
        (**self).current_path()
    }

    fn push_path(&mut self, path: &str) {
        (**self).push_path(path);
    }
}

/// Stack of visited paths with a cursor, like a browser tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl MemoryHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
        }
    }

    /// Step back; returns the new current path.
    pub fn back(&mut self) -> Option<&str> {
        self.cursor = self.cursor.checked_sub(1)?;
        Some(&self.entries[self.cursor])
    }

    /// Step forward; returns the new current path.
    pub fn forward(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    /// Every entry, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl History for MemoryHistory {
    fn current_path(&self) -> String {
        self.entries[self.cursor].clone()
    }

    /// Drops forward entries, like `history.pushState`.
    fn push_path(&mut self, path: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path.to_string());
        self.cursor = self.entries.len() - 1;
    }
}
