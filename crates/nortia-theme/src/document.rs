//! Named theme documents: one serializable file per hour.

use serde::Serialize;

use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::schedule::{Appearance, HOURS_PER_DAY};
use crate::theme::Theme;
use crate::workbench::{ColorMap, TokenRule};

/// Display name for the theme at `hour`, e.g. `Nortia 07:00`.
#[must_use]
pub fn theme_name(hour: u8) -> String {
    format!("Nortia {hour:02}:00")
}

/// File name for the theme at `hour`, e.g. `nortia-07.json`.
#[must_use]
pub fn theme_file_name(hour: u8) -> String {
    format!("nortia-{hour:02}.json")
}

/// A complete theme file as editors load it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDocument {
    pub name: String,
    #[serde(rename = "type")]
    pub appearance: Appearance,
    pub colors: ColorMap,
    pub token_colors: Vec<TokenRule>,
}

impl ThemeDocument {
    /// Generate and name the document for `config.hour`.
    ///
    /// # Errors
    ///
    /// See [`Theme::generate`].
    pub fn for_config(config: &ThemeConfig) -> Result<Self, ThemeError> {
        let theme = Theme::generate(config)?;
        let output = theme.to_output();
        Ok(Self {
            name: theme_name(theme.hour),
            appearance: theme.appearance,
            colors: output.colors,
            token_colors: output.token_colors,
        })
    }

    /// One document per hour, 00:00 through 23:00, sharing every other
    /// setting in `base`.
    ///
    /// # Errors
    ///
    /// The first hour that fails to generate.
    pub fn all_hours(base: &ThemeConfig) -> Result<Vec<Self>, ThemeError> {
        (0..HOURS_PER_DAY)
            .map(|hour| Self::for_config(&base.with_hour(hour)))
            .collect()
    }

    /// Pretty JSON with two-space indentation.
    ///
    /// # Errors
    ///
    /// Only if serialization itself fails, which plain strings and maps
    /// never do.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_zero_padded() {
        assert_eq!(theme_name(7), "Nortia 07:00");
        assert_eq!(theme_name(23), "Nortia 23:00");
        assert_eq!(theme_file_name(0), "nortia-00.json");
        assert_eq!(theme_file_name(16), "nortia-16.json");
    }

    #[test]
    fn document_shape() {
        let doc = ThemeDocument::for_config(&ThemeConfig::new(9)).unwrap();
        assert_eq!(doc.name, "Nortia 09:00");
        assert_eq!(doc.appearance, Appearance::Light);

        let json: serde_json::Value = serde_json::from_str(&doc.to_json_pretty().unwrap()).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort_unstable();
        assert_eq!(keys, ["colors", "name", "tokenColors", "type"]);
        assert_eq!(json["type"], "light");
        assert_eq!(json["tokenColors"].as_array().unwrap().len(), 18);
    }

    #[test]
    fn pretty_output_uses_two_spaces() {
        let doc = ThemeDocument::for_config(&ThemeConfig::new(0)).unwrap();
        let text = doc.to_json_pretty().unwrap();
        assert!(text.starts_with("{\n  \"name\": \"Nortia 00:00\",\n  \"type\": \"dark\",\n  \"colors\": {\n    \"editor.background\": \"#242424\""));
    }

    #[test]
    fn all_hours_in_order() {
        let docs = ThemeDocument::all_hours(&ThemeConfig::default()).unwrap();
        assert_eq!(docs.len(), 24);
        for (hour, doc) in docs.iter().enumerate() {
            assert_eq!(doc.name, format!("Nortia {hour:02}:00"));
        }
    }
}
