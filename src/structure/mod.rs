//! Indented repository listings and the tagged structure input.

pub mod walk;

use crate::error::UpstreamError;

/// Columns per indentation level in a structure listing.
pub const INDENT_UNIT: usize = 4;

/// Structure text as handed to the pipeline: a listing, or the reason there is none.
pub type RepoStructure = Result<String, UpstreamError>;

/// One line of a structure listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Leading whitespace width in columns (a tab counts as one indent unit).
    pub indent: usize,
    /// File or directory name, without the trailing `/` for directories.
    pub name: String,
    /// Whether the line named a directory.
    pub is_dir: bool,
}

impl Entry {
    /// Nesting depth in whole indent units.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.indent / INDENT_UNIT
    }
}

/// An indented plain-text file tree, re-parsed into entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructureListing {
    /// Entries in listing order.
    pub entries: Vec<Entry>,
}

impl StructureListing {
    /// Parses an indented listing. Blank lines are ignored.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let entries = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                let indent = line
                    .chars()
                    .take_while(|c| c.is_whitespace())
                    .map(|c| if c == '\t' { INDENT_UNIT } else { 1 })
                    .sum();
                let trimmed = line.trim();
                let is_dir = trimmed.ends_with('/');
                let name = trimmed.trim_end_matches('/').to_string();
                Entry { indent, name, is_dir }
            })
            .collect();
        Self { entries }
    }

    /// Returns `true` if the listing has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Derives the label for a repository from its URL or path.
///
/// Takes the last path segment and strips a trailing `.git`.
#[must_use]
pub fn repo_name(location: &str) -> String {
    let trimmed = location.trim().trim_end_matches('/');
    let last = trimmed.rsplit(['/', '\\']).next().unwrap_or(trimmed);
    let name = last.strip_suffix(".git").unwrap_or(last);
    if name.is_empty() {
        trimmed.to_string()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_directories_and_depths() {
        let listing = StructureListing::parse("src/\n    main.rs\n    util/\n        a.rs\nREADME.md\n");
        assert_eq!(listing.entries.len(), 5);
        assert_eq!(listing.entries[0], Entry { indent: 0, name: "src".into(), is_dir: true });
        assert_eq!(listing.entries[2].depth(), 1);
        assert!(listing.entries[2].is_dir);
        assert_eq!(listing.entries[3].depth(), 2);
        assert!(!listing.entries[4].is_dir);
    }

    #[test]
    fn skips_blank_lines_and_counts_tabs() {
        let listing = StructureListing::parse("\n\nsrc/\n\tlib.rs\n   \n");
        assert_eq!(listing.entries.len(), 2);
        assert_eq!(listing.entries[1].indent, INDENT_UNIT);
    }

    #[test]
    fn repo_name_strips_git_suffix() {
        assert_eq!(repo_name("https://github.com/acme/widgets.git"), "widgets");
        assert_eq!(repo_name("https://github.com/acme/widgets/"), "widgets");
        assert_eq!(repo_name("widgets"), "widgets");
    }
}
