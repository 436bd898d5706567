use mdtodo::model::{ItemKey, TodoItem};
use mdtodo::parse::{parse_checklist, serialize_checklist};
use mdtodo::store::TodoStore;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn read_fixture(name: &str) -> String {
    fs::read_to_string(fixture(name))
        .unwrap_or_else(|e| panic!("Could not read fixture {}: {}", name, e))
}

/// Helper: copy a fixture into a temp dir, load it, save it, return the saved text
fn load_and_save(fixture_name: &str) -> String {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(fixture_name);
    fs::copy(fixture(fixture_name), &path).unwrap();

    let mut store = TodoStore::new();
    store.load(&path).unwrap();
    store.save().unwrap();
    fs::read_to_string(&path).unwrap()
}

#[test]
fn round_trip_canonical() {
    let source = read_fixture("canonical.md");
    assert_eq!(
        load_and_save("canonical.md"),
        source,
        "Round-trip failed for fixture: canonical.md"
    );
}

#[test]
fn save_normalizes_mixed_content() {
    assert_eq!(load_and_save("mixed.md"), read_fixture("mixed.expected.md"));
}

#[test]
fn save_writes_lf_line_endings() {
    assert_eq!(load_and_save("crlf.md"), "# TODO List\n\n- [ ] one\n- [x] two\n");
}

#[test]
fn second_save_is_identical() {
    let first = load_and_save("mixed.md");
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("again.md");
    fs::write(&path, &first).unwrap();

    let mut store = TodoStore::new();
    store.load(&path).unwrap();
    store.save().unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), first);
}

#[test]
fn parsed_lines_keep_origin() {
    let parsed = parse_checklist(&read_fixture("mixed.md"));
    let summary: Vec<(usize, &str, bool)> = parsed
        .iter()
        .map(|p| (p.line, p.text.as_str(), p.checked))
        .collect();
    assert_eq!(
        summary,
        vec![
            (4, "mow lawn", true),
            (8, "trailing spaces trimmed", false),
            (9, "wash car", false),
        ]
    );
}

#[test]
fn serializer_matches_canonical_fixture() {
    let parsed = parse_checklist(&read_fixture("canonical.md"));
    let items: Vec<TodoItem> = parsed
        .into_iter()
        .enumerate()
        .map(|(i, p)| TodoItem::new(i, ItemKey(i as u64), p.text, p.checked))
        .collect();
    assert_eq!(
        serialize_checklist("# TODO List", &items),
        read_fixture("canonical.md")
    );
}

#[test]
fn edits_survive_reload() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("todo.md");
    fs::copy(fixture("canonical.md"), &path).unwrap();

    let mut store = TodoStore::new();
    store.load(&path).unwrap();
    store.update_status(0, true).unwrap();
    store.update_text(2, "pay rent today").unwrap();
    store.move_item(4, -4).unwrap();
    store.remove(1).unwrap();
    store.append("water plants").unwrap();

    let mut reloaded = TodoStore::new();
    assert_eq!(reloaded.load(&path).unwrap(), 5);
    let texts: Vec<(&str, bool)> = reloaded
        .items()
        .iter()
        .map(|i| (i.text.as_str(), i.checked))
        .collect();
    assert_eq!(
        texts,
        vec![
            ("fix the [x] bug in parser", false),
            ("call mom", true),
            ("pay rent today", false),
            ("买牛奶 🥛", true),
            ("water plants", false),
        ]
    );
}
