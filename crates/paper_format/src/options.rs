//! Formatting Options
//!
//! Everything the formatter needs besides the paper itself.

use paper_model::ImageKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Options for producing a question paper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatOptions {
    /// Tight margins and smaller type to save paper
    #[serde(default = "default_compact")]
    pub compact: bool,
    /// School name shown in the header; overrides the paper's own field
    #[serde(default)]
    pub school_name: Option<String>,
    /// School logo shown beside or above the school name
    #[serde(default)]
    pub logo_path: Option<PathBuf>,
    /// Diagram files keyed by question
    #[serde(default)]
    pub question_images: BTreeMap<ImageKey, PathBuf>,
}

fn default_compact() -> bool {
    true
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            compact: default_compact(),
            school_name: None,
            logo_path: None,
            question_images: BTreeMap::new(),
        }
    }
}

impl FormatOptions {
    /// Compact presentation with no header assets
    pub fn compact() -> Self {
        Self::default()
    }

    /// Normal (spacious) presentation with no header assets
    pub fn normal() -> Self {
        Self {
            compact: false,
            ..Self::default()
        }
    }

    pub fn with_school_name(mut self, name: impl Into<String>) -> Self {
        self.school_name = Some(name.into());
        self
    }

    pub fn with_logo(mut self, path: impl Into<PathBuf>) -> Self {
        self.logo_path = Some(path.into());
        self
    }

    pub fn with_question_image(mut self, key: ImageKey, path: impl Into<PathBuf>) -> Self {
        self.question_images.insert(key, path.into());
        self
    }

    /// School name to print: the override when non-blank, else the paper's
    pub fn display_school_name<'a>(&'a self, paper_school: &'a str) -> &'a str {
        match self.school_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => paper_school.trim(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let options: FormatOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, FormatOptions::default());
        assert!(options.compact);
    }

    #[test]
    fn test_camel_case_fields() {
        let options: FormatOptions = serde_json::from_str(
            r#"{"compact": false, "schoolName": "DPS", "logoPath": "logo.png",
                "questionImages": {"0_2": "diagram.png"}}"#,
        )
        .unwrap();
        assert!(!options.compact);
        assert_eq!(options.school_name.as_deref(), Some("DPS"));
        assert_eq!(
            options.question_images.get(&ImageKey::new(0, 2)),
            Some(&PathBuf::from("diagram.png"))
        );
    }

    #[test]
    fn test_bad_image_key_rejected() {
        let result: Result<FormatOptions, _> =
            serde_json::from_str(r#"{"questionImages": {"first": "a.png"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_display_school_name() {
        let options = FormatOptions::compact();
        assert_eq!(options.display_school_name(" Kendriya Vidyalaya "), "Kendriya Vidyalaya");

        let options = options.with_school_name("Delhi Public School");
        assert_eq!(options.display_school_name("Other"), "Delhi Public School");

        let options = FormatOptions::compact().with_school_name("   ");
        assert_eq!(options.display_school_name("Fallback"), "Fallback");
    }
}
