use docs_fs::{NormalizedPath, io};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_write_atomic_creates_file_and_parents() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("content/rest/index.md"));

    io::write_atomic(&path, b"---\ntitle: REST\n---\n").unwrap();

    let content = fs::read_to_string(path.to_native()).unwrap();
    assert_eq!(content, "---\ntitle: REST\n---\n");
}

#[test]
fn test_write_atomic_overwrites_existing() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("page.md");
    fs::write(&file_path, "original").unwrap();

    let path = NormalizedPath::new(&file_path);
    io::write_text(&path, "updated").unwrap();

    assert_eq!(fs::read_to_string(&file_path).unwrap(), "updated");
}

#[test]
fn test_write_atomic_leaves_no_temp_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("page.md"));

    io::write_text(&path, "body").unwrap();

    let names: Vec<String> = io::list_dir(&NormalizedPath::new(temp.path()))
        .unwrap()
        .into_iter()
        .map(|entry| entry.name)
        .collect();
    assert_eq!(names, vec!["page.md".to_string()]);
}

#[test]
fn test_read_text_nonexistent_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("missing.md"));
    let err = io::read_text(&path).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_list_dir_sorted_with_kinds() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("zeta")).unwrap();
    fs::write(temp.path().join("beta.md"), "").unwrap();
    fs::write(temp.path().join("alpha.md"), "").unwrap();

    let entries = io::list_dir(&NormalizedPath::new(temp.path())).unwrap();
    let summary: Vec<(&str, bool)> = entries
        .iter()
        .map(|entry| (entry.name.as_str(), entry.is_dir))
        .collect();
    assert_eq!(
        summary,
        vec![("alpha.md", false), ("beta.md", false), ("zeta", true)]
    );
}

#[test]
fn test_remove_dir_all_removes_tree() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("content/rest/actions");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("index.md"), "x").unwrap();

    io::remove_dir_all(&NormalizedPath::new(temp.path().join("content/rest"))).unwrap();

    assert!(!temp.path().join("content/rest").exists());
    assert!(temp.path().join("content").exists());
}
