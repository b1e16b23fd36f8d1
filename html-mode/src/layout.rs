//! Which scripts the page includes and how they are laid out.

use std::path::Path;

use serde::Deserialize;

use crate::error::{HtmlModeError, Result};

/// Script inclusion layout of the explorer page.
///
/// `groups` lists the page scripts in document order. A group of several
/// scripts is commented out as one multi-line `<!-- ... -->` block in its
/// development form; single scripts get a comment each.
///
/// Every field may be omitted from a layout file and falls back to the
/// explorer's own layout:
///
/// ```toml
/// prod_prefix = "/explorer/js/"
/// groups = [["file-manager.js", "ui-utils.js"], ["mesa-explorer.js"]]
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScriptLayout {
    pub dev_prefix: String,
    pub prod_prefix: String,
    pub theme_script: String,
    pub theme_indent: String,
    /// Indentation written in front of page script tags. Switching to
    /// development re-indents expanded blocks with it; production blocks that
    /// are already in place keep their own indentation.
    pub page_indent: String,
    pub groups: Vec<Vec<String>>,
}

impl Default for ScriptLayout {
    fn default() -> Self {
        let group = |names: &[&str]| names.iter().map(ToString::to_string).collect::<Vec<_>>();
        Self {
            dev_prefix: "/js/".to_string(),
            prod_prefix: "/mesa-explorer/js/".to_string(),
            theme_script: "color-modes.js".to_string(),
            theme_indent: "\t".to_string(),
            page_indent: "\t\t".to_string(),
            groups: vec![
                group(&[
                    "file-manager.js",
                    "ui-utils.js",
                    "style-manager.js",
                    "metadata-manager.js",
                    "text-markup.js",
                ]),
                group(&["data-utils.js"]),
                group(&[
                    "series-manager.js",
                    "interaction-manager.js",
                    "download-manager.js",
                    "controls-manager.js",
                ]),
                group(&["mesa-explorer.js"]),
            ],
        }
    }
}

impl ScriptLayout {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let layout: Self = toml::from_str(s)?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| HtmlModeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let layout = Self::from_toml_str(&contents)?;
        tracing::debug!(
            "loaded script layout from {} ({} scripts)",
            path.display(),
            layout.scripts().count()
        );
        Ok(layout)
    }

    /// Page scripts in document order.
    pub fn scripts(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().flatten().map(String::as_str)
    }

    /// Groups written as multi-line comment blocks.
    pub fn block_groups(&self) -> impl Iterator<Item = &[String]> {
        self.groups
            .iter()
            .filter(|group| group.len() > 1)
            .map(Vec::as_slice)
    }

    pub fn validate(&self) -> Result<()> {
        if self.dev_prefix.is_empty() || self.prod_prefix.is_empty() {
            return Err(HtmlModeError::InvalidLayout(
                "script prefixes must not be empty".to_string(),
            ));
        }
        if self.dev_prefix == self.prod_prefix {
            return Err(HtmlModeError::InvalidLayout(format!(
                "development and production prefixes are both {}",
                self.dev_prefix
            )));
        }
        if self.theme_script.is_empty() {
            return Err(HtmlModeError::InvalidLayout(
                "theme_script must not be empty".to_string(),
            ));
        }
        if let Some(idx) = self.groups.iter().position(Vec::is_empty) {
            return Err(HtmlModeError::InvalidLayout(format!(
                "script group {idx} is empty"
            )));
        }
        if self.scripts().any(str::is_empty) {
            return Err(HtmlModeError::InvalidLayout(
                "script names must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
