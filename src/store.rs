//! The todo store: the single source of truth for checklist items and the
//! bridge between the in-memory list and the markdown file on disk.
//!
//! Every successful mutation is persisted synchronously before the call
//! returns. Failures are logged where they happen and returned to the
//! caller, which decides whether to surface them; the store itself never
//! panics or aborts on I/O errors.

use std::path::{Path, PathBuf};
use std::sync::mpsc;

use crate::io::checklist_io::{ChecklistError, read_checklist, write_checklist};
use crate::model::config::DEFAULT_HEADER;
use crate::model::item::{ItemKey, TodoItem};

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("load failed: {0}")]
    Load(#[source] ChecklistError),
    #[error("save failed: {0}")]
    Save(#[source] ChecklistError),
}

/// Change notifications sent to subscribers after each state change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// The collection was replaced from disk
    Loaded { count: usize },
    /// An item's text or checked state changed
    Updated { key: ItemKey },
    Inserted { key: ItemKey, index: usize },
    Removed { key: ItemKey, index: usize },
    Moved { key: ItemKey, from: usize, to: usize },
    Saved,
    SaveFailed { message: String },
}

/// Ordered collection of todo items backed by a checklist file
pub struct TodoStore {
    /// `None` until the first successful load or append
    items: Option<Vec<TodoItem>>,
    path: Option<PathBuf>,
    header: String,
    next_key: u64,
    subscribers: Vec<mpsc::Sender<StoreEvent>>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self::with_header(DEFAULT_HEADER)
    }

    /// Create a store that writes `header` as the first line on save
    pub fn with_header(header: impl Into<String>) -> Self {
        TodoStore {
            items: None,
            path: None,
            header: header.into(),
            next_key: 0,
            subscribers: Vec::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Read access
    // -----------------------------------------------------------------------

    /// Items in display order. Empty if never loaded.
    pub fn items(&self) -> &[TodoItem] {
        self.items.as_deref().unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Whether the collection has been populated (by load or append)
    pub fn is_initialized(&self) -> bool {
        self.items.is_some()
    }

    /// The file this store saves to
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    /// Number of checked items
    pub fn done_count(&self) -> usize {
        self.items().iter().filter(|item| item.checked).count()
    }

    pub fn get_index(&self, index: usize) -> Option<&TodoItem> {
        self.items().get(index)
    }

    pub fn get(&self, key: ItemKey) -> Option<&TodoItem> {
        self.items().iter().find(|item| item.key == key)
    }

    /// Current position of the item with `key`
    pub fn index_of(&self, key: ItemKey) -> Option<usize> {
        self.get(key).map(|item| item.id)
    }

    // -----------------------------------------------------------------------
    // Notifications
    // -----------------------------------------------------------------------

    /// Register for change notifications. Dropping the receiver unsubscribes.
    pub fn subscribe(&mut self) -> mpsc::Receiver<StoreEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    fn notify(&mut self, event: StoreEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Replace the collection with the checklist items in `path`.
    ///
    /// On failure the collection is left untouched. A missing file still
    /// records the path so a later save creates it; other read failures
    /// don't, so a file we couldn't read is never overwritten.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize, StoreError> {
        let path = path.as_ref();
        let parsed = match read_checklist(path) {
            Ok(parsed) => parsed,
            Err(e) => {
                if e.is_not_found() {
                    log::warn!("{}; starting with an empty list", e);
                    self.path = Some(path.to_path_buf());
                } else {
                    log::error!("{}", e);
                }
                return Err(StoreError::Load(e));
            }
        };

        let mut items = Vec::with_capacity(parsed.len());
        for (index, line) in parsed.into_iter().enumerate() {
            let key = self.next_key();
            items.push(TodoItem::new(index, key, line.text, line.checked).with_origin_line(line.line));
        }

        let count = items.len();
        self.items = Some(items);
        self.path = Some(path.to_path_buf());
        log::info!("loaded {} items from {}", count, path.display());
        self.notify(StoreEvent::Loaded { count });
        Ok(count)
    }

    /// Write all items to the backing file, replacing it. No-op if nothing
    /// was ever loaded or there is no path to write to.
    pub fn save(&mut self) -> Result<(), StoreError> {
        let (Some(items), Some(path)) = (&self.items, &self.path) else {
            return Ok(());
        };
        match write_checklist(path, &self.header, items) {
            Ok(()) => {
                log::debug!("saved {} items", self.len());
                self.notify(StoreEvent::Saved);
                Ok(())
            }
            Err(e) => {
                log::error!("{}", e);
                self.notify(StoreEvent::SaveFailed {
                    message: e.to_string(),
                });
                Err(StoreError::Save(e))
            }
        }
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Set the text of the item at `index` and save. Returns `Ok(false)`
    /// without saving if `index` is out of range.
    pub fn update_text(&mut self, index: usize, text: impl Into<String>) -> Result<bool, StoreError> {
        let Some(item) = self.item_mut(index) else {
            return Ok(false);
        };
        item.text = single_line(text.into());
        let key = item.key;
        self.notify(StoreEvent::Updated { key });
        self.save()?;
        Ok(true)
    }

    /// Set the checked state of the item at `index` and save. Returns
    /// `Ok(false)` without saving if `index` is out of range.
    pub fn update_status(&mut self, index: usize, completed: bool) -> Result<bool, StoreError> {
        let Some(item) = self.item_mut(index) else {
            return Ok(false);
        };
        item.checked = completed;
        let key = item.key;
        self.notify(StoreEvent::Updated { key });
        self.save()?;
        Ok(true)
    }

    pub fn update_text_by_key(
        &mut self,
        key: ItemKey,
        text: impl Into<String>,
    ) -> Result<bool, StoreError> {
        match self.index_of(key) {
            Some(index) => self.update_text(index, text),
            None => Ok(false),
        }
    }

    pub fn update_status_by_key(&mut self, key: ItemKey, completed: bool) -> Result<bool, StoreError> {
        match self.index_of(key) {
            Some(index) => self.update_status(index, completed),
            None => Ok(false),
        }
    }

    /// Append an unchecked item at the end and save. The item is kept in
    /// memory even if the save fails.
    pub fn append(&mut self, text: impl Into<String>) -> Result<ItemKey, StoreError> {
        let key = self.next_key();
        let items = self.items.get_or_insert_with(Vec::new);
        let index = items.len();
        items.push(TodoItem::new(index, key, single_line(text.into()), false));
        self.notify(StoreEvent::Inserted { key, index });
        self.save()?;
        Ok(key)
    }

    /// Remove the item at `index`, renumber the rest, and save.
    /// Returns `Ok(None)` if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Result<Option<TodoItem>, StoreError> {
        let Some(items) = self.items.as_mut() else {
            return Ok(None);
        };
        if index >= items.len() {
            return Ok(None);
        }
        let removed = items.remove(index);
        renumber(items);
        self.notify(StoreEvent::Removed {
            key: removed.key,
            index,
        });
        self.save()?;
        Ok(Some(removed))
    }

    pub fn remove_by_key(&mut self, key: ItemKey) -> Result<Option<TodoItem>, StoreError> {
        match self.index_of(key) {
            Some(index) => self.remove(index),
            None => Ok(None),
        }
    }

    /// Move the item at `index` by `delta` positions (negative = up),
    /// clamped to the list bounds. Renumbers and saves; returns the new
    /// index, or `Ok(None)` if nothing moved.
    pub fn move_item(&mut self, index: usize, delta: isize) -> Result<Option<usize>, StoreError> {
        let Some(items) = self.items.as_mut() else {
            return Ok(None);
        };
        if index >= items.len() {
            return Ok(None);
        }
        let last = items.len() as isize - 1;
        let target = (index as isize).saturating_add(delta).clamp(0, last) as usize;
        if target == index {
            return Ok(None);
        }
        let item = items.remove(index);
        let key = item.key;
        items.insert(target, item);
        renumber(items);
        self.notify(StoreEvent::Moved {
            key,
            from: index,
            to: target,
        });
        self.save()?;
        Ok(Some(target))
    }

    fn item_mut(&mut self, index: usize) -> Option<&mut TodoItem> {
        self.items.as_mut().and_then(|items| items.get_mut(index))
    }

    fn next_key(&mut self) -> ItemKey {
        let key = ItemKey(self.next_key);
        self.next_key += 1;
        key
    }
}

/// Item text is one checklist line; line breaks would split it on save
fn single_line(text: String) -> String {
    if text.contains(['\r', '\n']) {
        text.replace(['\r', '\n'], " ")
    } else {
        text
    }
}

/// Restore the `id == index` invariant after a structural change
fn renumber(items: &mut [TodoItem]) {
    for (index, item) in items.iter_mut().enumerate() {
        item.id = index;
    }
}
