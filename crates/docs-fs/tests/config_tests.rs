use docs_fs::{ConfigStore, Error, NormalizedPath};
use rstest::rstest;
use serde::Deserialize;
use std::fs;
use tempfile::TempDir;

#[derive(Debug, Deserialize, PartialEq)]
struct PipelineStub {
    target_directory: String,
    autogenerated: String,
}

#[rstest]
#[case("config.toml", "target_directory = \"content/rest\"\nautogenerated = \"rest\"\n")]
#[case("config.json", r#"{"target_directory": "content/rest", "autogenerated": "rest"}"#)]
#[case("config.yaml", "target_directory: content/rest\nautogenerated: rest\n")]
#[case("config.yml", "target_directory: content/rest\nautogenerated: rest\n")]
fn test_load_by_extension(#[case] file_name: &str, #[case] content: &str) {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join(file_name);
    fs::write(&file_path, content).unwrap();

    let config: PipelineStub = ConfigStore::new()
        .load(&NormalizedPath::new(&file_path))
        .unwrap();

    assert_eq!(
        config,
        PipelineStub {
            target_directory: "content/rest".to_string(),
            autogenerated: "rest".to_string(),
        }
    );
}

#[test]
fn test_load_unsupported_format() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("config.ini");
    fs::write(&file_path, "target_directory=content").unwrap();

    let result: Result<PipelineStub, _> = ConfigStore::new().load(&NormalizedPath::new(&file_path));
    assert!(matches!(result, Err(Error::UnsupportedFormat { .. })));
}

#[test]
fn test_load_invalid_json_reports_parse_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("config.json");
    fs::write(&file_path, "{ not json").unwrap();

    let result: Result<PipelineStub, _> = ConfigStore::new().load(&NormalizedPath::new(&file_path));
    match result {
        Err(Error::ConfigParse { format, .. }) => assert_eq!(format, "JSON"),
        other => panic!("expected ConfigParse, got {:?}", other),
    }
}
