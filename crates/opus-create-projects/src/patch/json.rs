//! JSON read/write helpers for the patched configuration files

use super::read_text;
use crate::error::{Error, Result};
use camino::Utf8Path;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};

/// Indentation used when writing JSON back
const INDENT: &[u8] = b"    ";

/// Read `path` and parse it as a top-level JSON object.
///
/// Key order is preserved so untouched fields are written back where they were.
pub async fn read_json_object(path: &Utf8Path) -> Result<Map<String, Value>> {
    let content = read_text(path).await?;

    let value: Value = serde_json::from_str(&content)
        .map_err(|e| Error::file_patch(path, format!("invalid JSON: {}", e)))?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(Error::file_patch(path, "expected a JSON object at the top level")),
    }
}

/// Serialize with 4-space indentation and no trailing newline
pub fn to_json_bytes(object: &Map<String, Value>) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    object.serialize(&mut serializer)?;
    Ok(buf)
}

/// Serialize `object` and overwrite `path` with it
pub async fn write_json_object(path: &Utf8Path, object: &Map<String, Value>) -> Result<()> {
    let bytes = to_json_bytes(object)
        .map_err(|e| Error::file_patch(path, format!("could not serialize JSON: {}", e)))?;
    super::write_text(path, bytes).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_four_space_indent_and_key_order() {
        let value = json!({
            "zeta": 1,
            "alpha": ["a", "b"],
            "empty": [],
            "nested": { "k": true }
        });
        let Value::Object(map) = value else {
            panic!("expected object");
        };

        let text = String::from_utf8(to_json_bytes(&map).unwrap()).unwrap();
        let expected = "{\n    \"zeta\": 1,\n    \"alpha\": [\n        \"a\",\n        \"b\"\n    ],\n    \"empty\": [],\n    \"nested\": {\n        \"k\": true\n    }\n}";
        assert_eq!(text, expected);
    }

    #[tokio::test]
    async fn test_read_rejects_non_object() {
        let temp = TempDir::new().unwrap();
        let path = Utf8Path::from_path(temp.path()).unwrap().join("package.json");
        std::fs::write(&path, "[1, 2]").unwrap();

        let err = read_json_object(&path).await.unwrap_err();
        assert!(err.to_string().contains("expected a JSON object"));
    }

    #[tokio::test]
    async fn test_read_rejects_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = Utf8Path::from_path(temp.path()).unwrap().join(".opusUiConfig");
        std::fs::write(&path, "{ not json").unwrap();

        let err = read_json_object(&path).await.unwrap_err();
        assert!(matches!(err, Error::FilePatch { ref cause, .. } if cause.starts_with("invalid JSON")));
    }
}
