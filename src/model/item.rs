use std::fmt;

/// Stable identity of a todo item, assigned once when the item is created.
///
/// Unlike the positional `id`, a key survives inserts, removals and moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey(pub u64);

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One checklist entry
#[derive(Clone, PartialEq, Eq)]
pub struct TodoItem {
    /// Current position in the store (renumbered on every structural change)
    pub id: usize,
    /// Stable identity
    pub key: ItemKey,
    /// Display text
    pub text: String,
    /// Completion flag
    pub checked: bool,
    /// 0-indexed line in the source file at load time; `None` for items
    /// created in this session
    pub origin_line: Option<usize>,
}

impl TodoItem {
    pub fn new(id: usize, key: ItemKey, text: String, checked: bool) -> Self {
        TodoItem {
            id,
            key,
            text,
            checked,
            origin_line: None,
        }
    }

    /// Builder-style setter for the source line
    pub fn with_origin_line(mut self, line: usize) -> Self {
        self.origin_line = Some(line);
        self
    }

    /// The character used inside the checkbox `[ ]`
    pub fn checkbox_char(&self) -> char {
        if self.checked { 'x' } else { ' ' }
    }
}

impl fmt::Debug for TodoItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoItem")
            .field("text", &self.text)
            .field("checked", &self.checked)
            .field("origin_line", &self.origin_line)
            .finish()
    }
}
