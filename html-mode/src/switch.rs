//! Rewriting of script tags between development and production form.
//!
//! Active tags are recognised only at the start of a line (after spaces or
//! tabs), commented tags are `<!-- <script ...></script> -->` at the start of
//! a line. A block group in development form looks like
//!
//! ```html
//! <!-- <script src="/js/a.js"></script>
//! <script src="/js/b.js"></script> -->
//! ```

use std::path::Path;

use regex_lite::{NoExpand, Regex};

use crate::error::{HtmlModeError, Result};
use crate::layout::ScriptLayout;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SiteMode {
    Development,
    Production,
}

impl SiteMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    fn prefix(self, layout: &ScriptLayout) -> &str {
        match self {
            Self::Development => &layout.dev_prefix,
            Self::Production => &layout.prod_prefix,
        }
    }

    fn other(self) -> Self {
        match self {
            Self::Development => Self::Production,
            Self::Production => Self::Development,
        }
    }
}

impl std::fmt::Display for SiteMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of rewriting a page.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwitchOutcome {
    pub content: String,
    /// Number of pattern matches rewritten, including intermediate steps.
    pub replacements: usize,
    pub changed: bool,
}

fn script_tag(prefix: &str, name: &str) -> String {
    format!(r#"<script src="{prefix}{name}"></script>"#)
}

fn commented(inner: &str) -> String {
    format!("<!-- {inner} -->")
}

fn active_line_pattern(tag: &str) -> String {
    format!(r"(?m)^[ \t]*{}", regex_lite::escape(tag))
}

const TAG_SEPARATOR: &str = r"\s*\n\s*";

fn group_tags(prefix: &str, group: &[String]) -> Vec<String> {
    group.iter().map(|name| script_tag(prefix, name)).collect()
}

/// Matches `group` written as one multi-line comment block, with any
/// indentation between the tags.
fn block_pattern(prefix: &str, group: &[String]) -> String {
    let body = group_tags(prefix, group)
        .iter()
        .map(|tag| regex_lite::escape(tag))
        .collect::<Vec<_>>()
        .join(TAG_SEPARATOR);
    format!(
        "{}{body}{}",
        regex_lite::escape("<!-- "),
        regex_lite::escape(" -->")
    )
}

struct Rewriter {
    content: String,
    replacements: usize,
}

impl Rewriter {
    fn replace(&mut self, pattern: &str, replacement: &str) -> Result<()> {
        let re = Regex::new(pattern)?;
        let count = re.find_iter(&self.content).count();
        if count > 0 {
            self.content = re
                .replace_all(&self.content, NoExpand(replacement))
                .into_owned();
            self.replacements += count;
        }
        Ok(())
    }

    /// `<script>` at line start becomes `<!-- <script> -->`.
    fn comment_out(&mut self, prefix: &str, name: &str, indent: &str) -> Result<()> {
        let tag = script_tag(prefix, name);
        self.replace(
            &active_line_pattern(&tag),
            &format!("{indent}{}", commented(&tag)),
        )
    }

    /// `<!-- <script> -->` at line start becomes `<script>`.
    fn uncomment(&mut self, prefix: &str, name: &str, indent: &str) -> Result<()> {
        let tag = script_tag(prefix, name);
        self.replace(
            &active_line_pattern(&commented(&tag)),
            &format!("{indent}{tag}"),
        )
    }

    /// Multi-line comment block becomes one active tag per line.
    fn expand_block(&mut self, prefix: &str, group: &[String], indent: &str) -> Result<()> {
        let separator = format!("\n{indent}");
        self.replace(
            &block_pattern(prefix, group),
            &group_tags(prefix, group).join(separator.as_str()),
        )
    }

    /// Consecutive individually commented tags become one multi-line block.
    fn collapse_block(&mut self, prefix: &str, group: &[String], indent: &str) -> Result<()> {
        let tags = group_tags(prefix, group);
        let body = tags
            .iter()
            .map(|tag| regex_lite::escape(&commented(tag)))
            .collect::<Vec<_>>()
            .join(TAG_SEPARATOR);
        let pattern = format!("{}{body}", regex_lite::escape(indent));
        let separator = format!("\n{indent}");
        let replacement = format!("{indent}{}", commented(&tags.join(separator.as_str())));
        self.replace(&pattern, &replacement)
    }
}

/// Rewrite `html` so the scripts of `mode` are active and the others are
/// commented out.
///
/// In development mode block groups are expanded first so every script of
/// the outgoing mode is handled as a single tag. In production mode a group
/// that is already written as a block is left as it is, indentation
/// included; only the remaining groups are commented and re-grouped. A page
/// already in the target mode therefore comes back unchanged.
pub fn switch_mode(html: &str, mode: SiteMode, layout: &ScriptLayout) -> Result<SwitchOutcome> {
    let target = mode.prefix(layout);
    let outgoing = mode.other().prefix(layout);
    let mut rw = Rewriter {
        content: html.to_string(),
        replacements: 0,
    };

    let mut pending = Vec::new();
    let mut kept = Vec::new();
    for group in layout.block_groups() {
        if mode == SiteMode::Production
            && Regex::new(&block_pattern(&layout.dev_prefix, group))?.is_match(&rw.content)
        {
            kept.extend(group.iter().map(String::as_str));
            continue;
        }
        rw.expand_block(&layout.dev_prefix, group, &layout.page_indent)?;
        pending.push(group);
    }

    rw.comment_out(outgoing, &layout.theme_script, &layout.theme_indent)?;
    rw.uncomment(target, &layout.theme_script, &layout.theme_indent)?;

    for script in layout.scripts().filter(|script| !kept.contains(script)) {
        rw.comment_out(outgoing, script, &layout.page_indent)?;
    }

    if mode == SiteMode::Production {
        for group in pending {
            rw.collapse_block(&layout.dev_prefix, group, &layout.page_indent)?;
        }
    }

    for script in layout.scripts() {
        rw.uncomment(target, script, &layout.page_indent)?;
    }

    let changed = rw.content != html;
    Ok(SwitchOutcome {
        content: rw.content,
        replacements: rw.replacements,
        changed,
    })
}

/// Which mode's theme script is active, if exactly one is.
pub fn detect_mode(html: &str, layout: &ScriptLayout) -> Result<Option<SiteMode>> {
    let is_active = |mode: SiteMode| -> Result<bool> {
        let tag = script_tag(mode.prefix(layout), &layout.theme_script);
        Ok(Regex::new(&active_line_pattern(&tag))?.is_match(html))
    };
    let dev = is_active(SiteMode::Development)?;
    let prod = is_active(SiteMode::Production)?;
    Ok(match (dev, prod) {
        (true, false) => Some(SiteMode::Development),
        (false, true) => Some(SiteMode::Production),
        _ => None,
    })
}

fn read_page(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| HtmlModeError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Switch the page at `path` in place. The file is only rewritten when the
/// content changed.
pub fn switch_file(path: &Path, mode: SiteMode, layout: &ScriptLayout) -> Result<SwitchOutcome> {
    let html = read_page(path)?;
    let outcome = switch_mode(&html, mode, layout)?;
    if outcome.changed {
        std::fs::write(path, &outcome.content).map_err(|source| HtmlModeError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(
            "switched {} to {mode} mode ({} replacements)",
            path.display(),
            outcome.replacements
        );
    } else {
        tracing::warn!("{} unchanged: already in {mode} mode", path.display());
    }
    Ok(outcome)
}

/// [`detect_mode`] for a file on disk.
pub fn read_mode(path: &Path, layout: &ScriptLayout) -> Result<Option<SiteMode>> {
    detect_mode(&read_page(path)?, layout)
}
