use std::path::Path;

use super::prelude::*;

/// Parse dataset from JSON array of flat objects with
/// string, number or boolean values.
pub fn parse_dataset(content: &str) -> DatasetResult<Dataset> {
    Ok(serde_json::from_str(content)?)
}

/// Read dataset from JSON file.
pub fn read_dataset(path: impl AsRef<Path>) -> DatasetResult<Dataset> {
    let path = path.as_ref();

    tracing::debug!(?path, "reading dataset");

    let dataset = parse_dataset(&std::fs::read_to_string(path)?)?;

    tracing::debug!(?path, entries = dataset.len(), "dataset read");

    Ok(dataset)
}

#[test]
fn test_parse_dataset() -> Result<(), DatasetError> {
    let dataset = parse_dataset(r#"[
        { "id": 1, "name": "first", "valid": true },
        { "id": 2.5, "name": "second", "valid": false }
    ]"#)?;

    assert_eq!(dataset.len(), 2);

    assert_eq!(dataset[0]["id"], DataValue::Number(1.0));
    assert_eq!(dataset[0]["name"], DataValue::String(String::from("first")));
    assert_eq!(dataset[1]["id"], DataValue::Number(2.5));
    assert_eq!(dataset[1]["valid"], DataValue::Bool(false));

    Ok(())
}

#[test]
fn test_parse_invalid_dataset() {
    assert!(matches!(parse_dataset("{}"), Err(DatasetError::Json(_))));
    assert!(matches!(parse_dataset(r#"[{ "nested": { "a": 1 } }]"#), Err(DatasetError::Json(_))));

    assert!(matches!(read_dataset("missing_dataset.json"), Err(DatasetError::Io(_))));
}
