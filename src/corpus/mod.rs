//! The set of fixture names and the categories they exercise.

pub mod ascii;
pub mod profile;

use std::fmt;

use tracing::warn;

use crate::fs_op::{check_name, FilesystemError};

pub use ascii::ascii_range;
pub use profile::Profile;

/// What kind of trouble a fixture name is meant to cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    ControlChar,
    Combining,
    Emoji,
    CardSuit,
    LongName,
    ShellMeta,
    AsciiRange,
    /// Supplied through settings rather than built in.
    Custom,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::ControlChar => "control",
            Category::Combining => "combining",
            Category::Emoji => "emoji",
            Category::CardSuit => "suit",
            Category::LongName => "long",
            Category::ShellMeta => "shell-meta",
            Category::AsciiRange => "ascii",
            Category::Custom => "custom",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One file to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    pub category: Category,
    pub name: String,
}

impl CorpusEntry {
    pub fn new(category: Category, name: impl Into<String>) -> Self {
        CorpusEntry {
            category,
            name: name.into(),
        }
    }
}

/// Ordered list of distinct fixture names.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
}

impl Corpus {
    // Built-in lists are known to be valid and distinct.
    pub(crate) fn from_entries(entries: Vec<CorpusEntry>) -> Self {
        Corpus { entries }
    }

    /// Append `entry` after validating its name.
    ///
    /// Returns `Ok(false)` and leaves the corpus unchanged when an entry
    /// with the same name is already present.
    pub fn push(&mut self, entry: CorpusEntry) -> Result<bool, FilesystemError> {
        check_name(&entry.name)?;
        if self.contains(&entry.name) {
            warn!("skipping duplicate fixture name {:?}", entry.name);
            return Ok(false);
        }
        self.entries.push(entry);
        Ok(true)
    }

    /// Append user-supplied names as `Category::Custom` entries.
    pub fn extend_custom<I, S>(&mut self, names: I) -> Result<usize, FilesystemError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut added = 0;
        for name in names {
            if self.push(CorpusEntry::new(Category::Custom, name))? {
                added += 1;
            }
        }
        Ok(added)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names in creation order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }
}
