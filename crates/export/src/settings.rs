use serde::{Deserialize, Serialize};

use crate::SettingsError;

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportSettings {
    pub author: Author,
}

impl ExportSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Application identity written into the author block of TCX files.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Author {
    pub name: String,
    pub version_major: u32,
    pub version_minor: u32,
    pub lang_id: String,
    pub part_number: String,
}

impl Default for Author {
    fn default() -> Self {
        Self {
            name: String::from("VB Coaching Platform"),
            version_major: 2,
            version_minor: 0,
            lang_id: String::from("fr"),
            part_number: String::from("000-00000-00"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_export_settings_from_json() {
        assert_eq!(
            ExportSettings::from_json(r#"{"author": {"name": "Club Athlé", "versionMinor": 3}}"#)
                .unwrap(),
            ExportSettings {
                author: Author {
                    name: String::from("Club Athlé"),
                    version_minor: 3,
                    ..Author::default()
                }
            }
        );
    }

    #[test]
    fn test_export_settings_from_empty_json() {
        assert_eq!(
            ExportSettings::from_json("{}").unwrap(),
            ExportSettings::default()
        );
    }

    #[test]
    fn test_export_settings_from_invalid_json() {
        assert!(matches!(
            ExportSettings::from_json(r#"{"author": 42}"#),
            Err(SettingsError::Invalid(_))
        ));
    }
}
