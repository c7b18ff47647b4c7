//! Reading classified observations from JSON-lines files.
//!
//! Each non-blank line holds one [`ObservationRecord`]. Lines starting with
//! `#` are comments.

use crate::core::{Error, Result, ResultExt};
use crate::registry::{ObservationRecord, StyleRegistry};
use std::path::Path;

/// Parse observation records from the contents of one unit.
pub fn parse_observations(source: &Path, contents: &str) -> Result<Vec<ObservationRecord>> {
    contents
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_number, line)| {
            serde_json::from_str::<ObservationRecord>(line)
                .map_err(|e| Error::parse(source, line_number, e.to_string()))
        })
        .collect()
}

/// Read one unit file and accumulate it into a fresh registry.
pub fn load_unit(path: &Path) -> Result<StyleRegistry> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| Error::file_system("Failed to read observation file", path, e))?;
    let records = parse_observations(path, &contents)?;
    tracing::debug!(
        "Read {} observations from {}",
        records.len(),
        path.display()
    );
    StyleRegistry::from_records(&records).context(path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{DimensionId, Observation};
    use indoc::indoc;
    use std::path::PathBuf;

    #[test]
    fn test_skips_blank_and_comment_lines() {
        let records = parse_observations(
            Path::new("unit.jsonl"),
            indoc! {r#"
                # classifier v2
                {"dimension":"indent_style","kind":"indentation","style":"tab"}

                {"dimension":"indent_style","kind":"indentation","style":"space"}
            "#},
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].dimension, DimensionId::Indentation);
    }

    #[test]
    fn test_reports_line_of_malformed_record() {
        let err = parse_observations(
            Path::new("unit.jsonl"),
            indoc! {r#"
                {"dimension":"indent_style","kind":"indentation","style":"tab"}
                {"dimension":"indent_style","kind":"indentation","style":"tabs"}
            "#},
        )
        .unwrap_err();
        match err {
            Error::Parse { file, line, .. } => {
                assert_eq!(file, PathBuf::from("unit.jsonl"));
                assert_eq!(line, 2);
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_dimension_is_parse_error() {
        let err = parse_observations(
            Path::new("unit.jsonl"),
            r#"{"dimension":"tab_width","kind":"flag","value":true}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }

    #[test]
    fn test_load_unit_rejects_mismatched_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unit.jsonl");
        std::fs::write(
            &path,
            r#"{"dimension":"indent_style","kind":"flag","value":true}"#,
        )
        .unwrap();
        let message = load_unit(&path).unwrap_err().to_string();
        assert!(message.starts_with(&path.display().to_string()));
        assert!(message.contains("flag observation does not apply to indent_style"));
    }

    #[test]
    fn test_load_unit_accumulates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unit.jsonl");
        std::fs::write(
            &path,
            r#"{"dimension":"csharp_prefer_braces","kind":"flag","value":false}"#,
        )
        .unwrap();
        let registry = load_unit(&path).unwrap();
        let expected = StyleRegistry::new()
            .update(
                "csharp_prefer_braces".parse().unwrap(),
                &Observation::Flag { value: false },
            )
            .unwrap();
        assert_eq!(registry, expected);
    }
}
