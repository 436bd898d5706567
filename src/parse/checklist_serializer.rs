use crate::model::item::TodoItem;

/// Serialize items to checklist markdown: the header line, a blank line,
/// then one `- [x] text` / `- [ ] text` line per item.
pub fn serialize_checklist(header: &str, items: &[TodoItem]) -> String {
    let mut out = String::new();
    out.push_str(header);
    out.push_str("\n\n");
    for item in items {
        out.push_str(&serialize_item(item));
        out.push('\n');
    }
    out
}

/// Canonical single-line form of an item
pub fn serialize_item(item: &TodoItem) -> String {
    format!("- [{}] {}", item.checkbox_char(), item.text)
}
