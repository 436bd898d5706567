/// Prefix of a completed checklist line
pub const CHECKED_PREFIX: &str = "- [x]";
/// Prefix of an open checklist line
pub const UNCHECKED_PREFIX: &str = "- [ ]";

/// A recognized checklist line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// Line number in the source (0-indexed, counting skipped lines)
    pub line: usize,
    pub text: String,
    pub checked: bool,
}

/// Parse a markdown checklist. Lines that don't start with exactly `- [x]`
/// or `- [ ]` are skipped but still count towards line numbers.
pub fn parse_checklist(source: &str) -> Vec<ParsedLine> {
    source
        .lines()
        .enumerate()
        .filter_map(|(line, content)| {
            parse_checklist_line(content).map(|(checked, text)| ParsedLine {
                line,
                text,
                checked,
            })
        })
        .collect()
}

/// Parse a single line into `(checked, text)`, or `None` if it isn't a
/// checklist item.
pub fn parse_checklist_line(line: &str) -> Option<(bool, String)> {
    let checked = if line.starts_with(CHECKED_PREFIX) {
        true
    } else if line.starts_with(UNCHECKED_PREFIX) {
        false
    } else {
        return None;
    };
    // Both prefixes are 5 ASCII bytes
    let text = line[CHECKED_PREFIX.len()..].trim();
    Some((checked, text.to_string()))
}
