//! Content loading from YAML or JSON, and content fingerprinting.

use std::fmt::Write as _;
use std::path::Path;

use heartline_core::error::StoryError;
use sha2::{Digest, Sha256};
use tracing::info;

use crate::domain::model::ContentModel;

/// The story bundled with the binary.
const DEFAULT_CONTENT: &str = include_str!("../../content/default.yaml");

impl ContentModel {
    /// Parses and validates YAML content.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::ContentParse` for malformed YAML and
    /// `StoryError::InvalidContent` if validation fails.
    pub fn from_yaml_str(source: &str) -> Result<Self, StoryError> {
        let content: Self = serde_yaml::from_str(source)
            .map_err(|e| StoryError::ContentParse(format!("yaml: {e}")))?;
        content.validate()?;
        Ok(content)
    }

    /// Parses and validates JSON content.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::ContentParse` for malformed JSON and
    /// `StoryError::InvalidContent` if validation fails.
    pub fn from_json_str(source: &str) -> Result<Self, StoryError> {
        let content: Self = serde_json::from_str(source)
            .map_err(|e| StoryError::ContentParse(format!("json: {e}")))?;
        content.validate()?;
        Ok(content)
    }

    /// Loads content from a file. `.json` files are parsed as JSON,
    /// everything else as YAML.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::ContentIo` if the file cannot be read, otherwise
    /// the errors of [`ContentModel::from_yaml_str`] / [`ContentModel::from_json_str`].
    pub fn load(path: &Path) -> Result<Self, StoryError> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| StoryError::ContentIo(format!("{}: {e}", path.display())))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let content = if is_json {
            Self::from_json_str(&source)?
        } else {
            Self::from_yaml_str(&source)?
        };

        info!(
            path = %path.display(),
            fingerprint = %content.fingerprint(),
            "loaded story content"
        );
        Ok(content)
    }

    /// The bundled sample story.
    ///
    /// # Panics
    ///
    /// Never in practice: the bundled file is covered by tests.
    #[must_use]
    pub fn default_content() -> Self {
        serde_yaml::from_str(DEFAULT_CONTENT).expect("bundled default content is valid YAML")
    }

    /// SHA-256 of the canonical JSON encoding, as lowercase hex.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        // Serialization of derived Serialize types to a Vec is infallible.
        let canonical = serde_json::to_vec(self).unwrap_or_default();
        let digest = Sha256::digest(&canonical);
        digest.iter().fold(String::with_capacity(64), |mut out, byte| {
            let _ = write!(out, "{byte:02x}");
            out
        })
    }
}

#[cfg(test)]
mod tests {
    use heartline_core::effects::Side;

    use super::*;

    #[test]
    fn test_default_content_has_expected_shape() {
        // Act
        let content = ContentModel::default_content();

        // Assert
        assert_eq!(content.sender.name, "Alex");
        assert_eq!(content.receiver.age, 25);
        assert_eq!(content.chat.phase1.messages.len(), 7);
        assert_eq!(content.chat.phase2.messages.len(), 5);
        assert_eq!(content.chat.phase2.header_name, "Babe");
        assert_eq!(content.ask.words.len(), 5);
        assert_eq!(content.ask.highlight_word_index, 4);
        assert_eq!(content.chat.phase1.messages[0].side, Side::Left);
    }

    #[test]
    fn test_json_round_trips_through_yaml_parsed_model() {
        // Arrange
        let content = ContentModel::default_content();
        let json = serde_json::to_string(&content).unwrap();

        // Act
        let reparsed = ContentModel::from_json_str(&json).unwrap();

        // Assert
        assert_eq!(reparsed, content);
    }

    #[test]
    fn test_malformed_yaml_is_a_parse_error() {
        let result = ContentModel::from_yaml_str("sender: [unterminated");
        match result {
            Err(StoryError::ContentParse(message)) => assert!(message.starts_with("yaml:")),
            other => panic!("expected ContentParse, got {other:?}"),
        }
    }

    #[test]
    fn test_parsed_content_is_validated() {
        // Arrange
        let mut content = ContentModel::default_content();
        content.ask.words.clear();
        let yaml = serde_yaml::to_string(&content).unwrap();

        // Act
        let result = ContentModel::from_yaml_str(&yaml);

        // Assert
        assert!(matches!(result, Err(StoryError::InvalidContent(_))));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = ContentModel::load(Path::new("/definitely/not/here.yaml"));
        assert!(matches!(result, Err(StoryError::ContentIo(_))));
    }

    #[test]
    fn test_fingerprint_is_stable_and_content_sensitive() {
        // Arrange
        let content = ContentModel::default_content();
        let mut edited = content.clone();
        edited.receiver.name = "Sam".to_owned();

        // Act
        let a = content.fingerprint();
        let b = content.fingerprint();
        let c = edited.fingerprint();

        // Assert
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|ch| ch.is_ascii_hexdigit()));
    }
}
