use serde::Deserialize;

use super::ascii::ascii_range;
use super::{Category, Corpus, CorpusEntry};

/// Number of `X` characters in the long-name fixture.
pub const LONG_NAME_REPEAT: usize = 100;
pub const LONG_NAME_PREFIX: &str = "Super Long File ";
pub const LONG_NAME_SUFFIX: &str = " Ending Now.txt";
pub const ASCII_NAME_PREFIX: &str = "ASCII XMAS TREE ";
pub const ASCII_NAME_SUFFIX: &str = ".txt";

/// Named corpus variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Unicode and long names only.
    Basic,
    /// Everything in `basic` plus control characters, shell metacharacters
    /// and the printable ASCII run.
    #[default]
    Full,
}

const UNICODE_NAMES: &[(Category, &str)] = &[
    (Category::Combining, "Combining    |\u{0423}\u{0306}|..."),
    (Category::Emoji, "UTF8 Grin    |😬|..."),
    (Category::Emoji, "UTF8 Smile   |😊|..."),
    (Category::CardSuit, "UTF8 Normal  |♠♥♦♣|"),
];

// Names that vim's fnameescape() has to deal with.
const ESCAPE_NAMES: &[(Category, &str)] = &[
    (Category::ControlChar, "\r File.txt"),
    (Category::ControlChar, "CR File 2\r.txt"),
    (Category::ShellMeta, "+Plus File.txt"),
    (Category::ShellMeta, ":Colon File.txt"),
    (Category::ShellMeta, ";Semi Colon File.txt"),
];

/// `Super Long File XXXX... Ending Now.txt`
pub fn long_name() -> String {
    format!(
        "{}{}{}",
        LONG_NAME_PREFIX,
        "X".repeat(LONG_NAME_REPEAT),
        LONG_NAME_SUFFIX
    )
}

/// `ASCII XMAS TREE <printable ascii without '/'>.txt`
pub fn ascii_name() -> String {
    format!("{}{}{}", ASCII_NAME_PREFIX, ascii_range(), ASCII_NAME_SUFFIX)
}

impl Profile {
    pub fn as_str(self) -> &'static str {
        match self {
            Profile::Basic => "basic",
            Profile::Full => "full",
        }
    }

    /// Build the corpus for this profile, in creation order.
    pub fn corpus(self) -> Corpus {
        let mut entries: Vec<CorpusEntry> = UNICODE_NAMES
            .iter()
            .map(|&(category, name)| CorpusEntry::new(category, name))
            .collect();
        entries.push(CorpusEntry::new(Category::LongName, long_name()));

        if self == Profile::Full {
            entries.push(CorpusEntry::new(Category::AsciiRange, ascii_name()));
            entries.extend(
                ESCAPE_NAMES
                    .iter()
                    .map(|&(category, name)| CorpusEntry::new(category, name)),
            );
        }

        Corpus::from_entries(entries)
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
