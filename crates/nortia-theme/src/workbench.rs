//! Editor color roles and token scope rules.
//!
//! Pure substitution: every role and rule reads one color from the
//! [`ThemePalette`]. Order follows the published theme files, so the JSON
//! output diffs cleanly against them.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use nortia_color::Rgb;

use crate::theme::ThemePalette;

// ---------------------------------------------------------------------------
// ColorMap
// ---------------------------------------------------------------------------

/// Insertion-ordered `role → "#hex"` map, serialized as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorMap {
    entries: Vec<(&'static str, String)>,
}

impl ColorMap {
    fn set(&mut self, role: &'static str, color: Rgb) {
        self.entries.push((role, color.to_hex()));
    }

    fn set_alpha(&mut self, role: &'static str, color: Rgb, alpha: u8) {
        self.entries.push((role, color.to_hex_with_alpha(alpha)));
    }

    /// Color for `role`, if the catalogue has it.
    #[must_use]
    pub fn get(&self, role: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, hex)| hex.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(r, hex)| (*r, hex.as_str()))
    }
}

impl Serialize for ColorMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (role, hex) in &self.entries {
            map.serialize_entry(role, hex)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Token rules
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Italic,
    Bold,
    Underline,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
}

/// Style applied to a set of syntax scopes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRule {
    pub scope: Vec<&'static str>,
    pub settings: TokenSettings,
}

impl TokenRule {
    fn fg(scope: &[&'static str], color: Rgb) -> Self {
        Self::new(scope, Some(color), None)
    }

    fn styled(scope: &[&'static str], color: Rgb, style: FontStyle) -> Self {
        Self::new(scope, Some(color), Some(style))
    }

    fn style(scope: &[&'static str], style: FontStyle) -> Self {
        Self::new(scope, None, Some(style))
    }

    fn new(scope: &[&'static str], color: Option<Rgb>, style: Option<FontStyle>) -> Self {
        Self {
            scope: scope.to_vec(),
            settings: TokenSettings {
                foreground: color.map(Rgb::to_hex),
                font_style: style,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// ThemeOutput
// ---------------------------------------------------------------------------

/// The composed theme: appearance, color roles and token rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeOutput {
    pub is_dark: bool,
    pub colors: ColorMap,
    pub token_colors: Vec<TokenRule>,
}

impl ThemeOutput {
    #[must_use]
    pub fn from_palette(is_dark: bool, palette: &ThemePalette) -> Self {
        Self {
            is_dark,
            colors: colors(palette),
            token_colors: token_colors(palette),
        }
    }
}

fn colors(p: &ThemePalette) -> ColorMap {
    let mut m = ColorMap::default();

    // Editor
    m.set("editor.background", p.background);
    m.set("editor.foreground", p.foreground);
    m.set("editorLineNumber.foreground", p.fore4);
    m.set("editorLineNumber.activeForeground", p.palette1);
    m.set("editorCursor.foreground", p.palette1);

    // Activity bar
    m.set("activityBar.background", p.back2);
    m.set("activityBar.foreground", p.foreground);
    m.set("activityBar.inactiveForeground", p.fore4);

    // Side bar
    m.set("sideBar.background", p.back2);
    m.set("sideBar.foreground", p.foreground);
    m.set("sideBarTitle.foreground", p.foreground);

    // Status bar
    m.set("statusBar.background", p.back3);
    m.set("statusBar.foreground", p.foreground);
    m.set("statusBar.noFolderBackground", p.back3);

    // Title bar
    m.set("titleBar.activeBackground", p.back2);
    m.set("titleBar.activeForeground", p.foreground);
    m.set("titleBar.inactiveBackground", p.back2);
    m.set("titleBar.inactiveForeground", p.fore4);

    // Tabs
    m.set("tab.activeBackground", p.background);
    m.set("tab.activeForeground", p.foreground);
    m.set("tab.inactiveBackground", p.back3);
    m.set("tab.inactiveForeground", p.fore4);
    m.set("tab.border", p.back5);
    m.set("editorGroupHeader.tabsBackground", p.back3);

    // Selection
    m.set("editor.selectionBackground", p.back3);
    m.set("editor.selectionHighlightBackground", p.back3);
    m.set("editor.lineHighlightBackground", p.back2);

    // Search
    m.set("editor.findMatchBackground", p.warn_bg);
    m.set("editor.findMatchHighlightBackground", p.neutral_bg);
    m.set("searchEditor.findMatchBackground", p.warn_bg);

    // Diff
    m.set_alpha("diffEditor.insertedTextBackground", p.good_bg, 0x40);
    m.set_alpha("diffEditor.removedTextBackground", p.bad_bg, 0x40);

    // Git decorations
    m.set("gitDecoration.modifiedResourceForeground", p.neutral);
    m.set("gitDecoration.deletedResourceForeground", p.bad);
    m.set("gitDecoration.untrackedResourceForeground", p.good);
    m.set("gitDecoration.ignoredResourceForeground", p.fore4);
    m.set("gitDecoration.conflictingResourceForeground", p.warn);

    // Lists and trees
    m.set("list.activeSelectionBackground", p.back4);
    m.set("list.activeSelectionForeground", p.foreground);
    m.set("list.inactiveSelectionBackground", p.back3);
    m.set("list.hoverBackground", p.back3);
    m.set("list.focusBackground", p.back3);

    // Inputs
    m.set("input.background", p.back2);
    m.set("input.foreground", p.foreground);
    m.set("input.border", p.back5);
    m.set("inputOption.activeBorder", p.palette1);

    // Dropdown
    m.set("dropdown.background", p.back3);
    m.set("dropdown.foreground", p.foreground);
    m.set("dropdown.border", p.back5);

    // Buttons
    m.set("button.background", p.palette1);
    m.set("button.foreground", p.background);
    m.set("button.hoverBackground", p.palette2);

    // Panels
    m.set("panel.background", p.background);
    m.set("panel.border", p.back5);
    m.set("panelTitle.activeForeground", p.foreground);
    m.set("panelTitle.inactiveForeground", p.fore4);

    // Terminal
    m.set("terminal.background", p.background);
    m.set("terminal.foreground", p.foreground);
    m.set("terminal.ansiBlack", p.background);
    m.set("terminal.ansiWhite", p.foreground);
    m.set("terminal.ansiRed", p.bad);
    m.set("terminal.ansiGreen", p.good);
    m.set("terminal.ansiYellow", p.warn);
    m.set("terminal.ansiBlue", p.palette5);
    m.set("terminal.ansiMagenta", p.palette2);
    m.set("terminal.ansiCyan", p.palette3);

    // Notifications
    m.set("notificationCenter.border", p.back5);
    m.set("notificationCenterHeader.background", p.back3);
    m.set("notifications.background", p.back3);
    m.set("notifications.foreground", p.foreground);
    m.set("notifications.border", p.back5);

    // Borders
    m.set("contrastBorder", p.back5);
    m.set("focusBorder", p.palette1);

    // Scrollbar
    m.set_alpha("scrollbarSlider.background", p.back4, 0x80);
    m.set_alpha("scrollbarSlider.hoverBackground", p.back5, 0xA0);
    m.set_alpha("scrollbarSlider.activeBackground", p.back5, 0xC0);

    m
}

fn token_colors(p: &ThemePalette) -> Vec<TokenRule> {
    use FontStyle::{Bold, Italic, Underline};

    vec![
        TokenRule::styled(&["comment", "punctuation.definition.comment"], p.fore4, Italic),
        TokenRule::fg(&["string", "string.quoted"], p.palette3),
        TokenRule::fg(
            &["constant.numeric", "constant.language", "constant.character"],
            p.palette5,
        ),
        TokenRule::fg(&["keyword", "storage.type", "storage.modifier"], p.palette6),
        TokenRule::fg(&["keyword.control", "keyword.operator"], p.palette2),
        TokenRule::fg(&["entity.name.function", "support.function"], p.palette1),
        TokenRule::fg(
            &["entity.name.type", "entity.name.class", "support.type", "support.class"],
            p.palette1,
        ),
        TokenRule::fg(&["variable", "variable.other", "variable.parameter"], p.fore2),
        TokenRule::fg(&["entity.other.attribute-name"], p.palette4),
        TokenRule::fg(&["support.type.property-name"], p.fore2),
        TokenRule::fg(&["punctuation.definition.tag", "punctuation.separator"], p.fore2),
        TokenRule::fg(&["entity.name.tag"], p.palette2),
        TokenRule::styled(&["markup.heading"], p.palette1, Bold),
        TokenRule::style(&["markup.italic"], Italic),
        TokenRule::style(&["markup.bold"], Bold),
        TokenRule::style(&["markup.underline"], Underline),
        TokenRule::fg(&["markup.inline.raw"], p.palette3),
        TokenRule::fg(&["invalid", "invalid.illegal"], p.bad),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeConfig;
    use crate::theme::Theme;

    fn output(hour: u8) -> ThemeOutput {
        Theme::generate(&ThemeConfig::new(hour)).unwrap().to_output()
    }

    #[test]
    fn catalogue_sizes() {
        let o = output(0);
        assert_eq!(o.colors.len(), 76);
        assert_eq!(o.token_colors.len(), 18);
    }

    #[test]
    fn roles_are_unique() {
        let o = output(0);
        let mut roles: Vec<_> = o.colors.iter().map(|(r, _)| r).collect();
        roles.sort_unstable();
        roles.dedup();
        assert_eq!(roles.len(), o.colors.len());
    }

    #[test]
    fn editor_roles_at_midnight() {
        let o = output(0);
        assert!(o.is_dark);
        assert_eq!(o.colors.get("editor.background"), Some("#242424"));
        assert_eq!(o.colors.get("editor.foreground"), Some("#d6d6d6"));
        assert_eq!(o.colors.get("editorCursor.foreground"), Some("#ffbd3c"));
        assert_eq!(o.colors.get("editorLineNumber.foreground"), Some("#cdcdcd"));
        assert_eq!(o.colors.get("terminal.ansiGreen"), Some("#bcd92a"));
        assert_eq!(o.colors.get("no.such.role"), None);
    }

    #[test]
    fn alpha_suffixes() {
        let o = output(0);
        assert_eq!(o.colors.get("diffEditor.insertedTextBackground"), Some("#cbea3140"));
        assert_eq!(o.colors.get("diffEditor.removedTextBackground"), Some("#ff83c940"));
        assert_eq!(o.colors.get("scrollbarSlider.background"), Some("#2a2a2a80"));
        assert_eq!(o.colors.get("scrollbarSlider.hoverBackground"), Some("#2c2c2cA0"));
        assert_eq!(o.colors.get("scrollbarSlider.activeBackground"), Some("#2c2c2cC0"));
    }

    #[test]
    fn every_value_is_hex() {
        for hour in [0, 8, 16] {
            for (role, hex) in output(hour).colors.iter() {
                assert!(hex.starts_with('#'), "{role}: {hex}");
                assert!(hex.len() == 7 || hex.len() == 9, "{role}: {hex}");
                assert!(hex[1..].chars().all(|c| c.is_ascii_hexdigit()), "{role}: {hex}");
            }
        }
    }

    #[test]
    fn comment_rule() {
        let o = output(8);
        let comment = &o.token_colors[0];
        assert_eq!(comment.scope, ["comment", "punctuation.definition.comment"]);
        assert_eq!(comment.settings.foreground.as_deref(), Some("#5f5f5f"));
        assert_eq!(comment.settings.font_style, Some(FontStyle::Italic));
    }

    #[test]
    fn style_only_rules_have_no_foreground() {
        let o = output(0);
        let styled: Vec<_> = o
            .token_colors
            .iter()
            .filter(|r| r.settings.foreground.is_none())
            .map(|r| r.scope[0])
            .collect();
        assert_eq!(styled, ["markup.italic", "markup.bold", "markup.underline"]);
    }

    #[test]
    fn serializes_in_order() {
        let json = serde_json::to_value(output(0)).unwrap();
        assert_eq!(json["isDark"], true);
        let colors = json["colors"].as_object().unwrap();
        assert_eq!(colors.len(), 76);
        assert_eq!(json["colors"]["editor.background"], "#242424");
        let text = serde_json::to_string(&output(0).colors).unwrap();
        assert!(text.starts_with(r##"{"editor.background":"#242424","editor.foreground""##));
    }

    #[test]
    fn token_settings_skip_missing_fields() {
        let json = serde_json::to_value(output(0)).unwrap();
        let italic = &json["tokenColors"][13];
        assert_eq!(italic["scope"][0], "markup.italic");
        assert_eq!(italic["settings"], serde_json::json!({ "fontStyle": "italic" }));
        let string = &json["tokenColors"][1];
        assert_eq!(string["settings"], serde_json::json!({ "foreground": "#adda4d" }));
    }
}
