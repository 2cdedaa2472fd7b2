use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use unicode_segmentation::UnicodeSegmentation;

use crate::corpus::{Corpus, CorpusEntry, Profile};
use crate::settings::Overrides;

/// Create zero-byte files with awkward names for testing file pickers and editors.
#[derive(Debug, Parser)]
#[command(name = "testchars", version, about)]
pub struct Cli {
    /// TOML settings file (dir, profile, parallel, extra_names).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More log output; repeat for more detail.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create the fixture files (the default when no command is given).
    Generate(GenerateArgs),
    /// Print the fixture names without touching the filesystem.
    List(ListArgs),
}

#[derive(Debug, Default, Args)]
pub struct GenerateArgs {
    /// Target directory [default: /tmp/testchars]
    #[arg(long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Which set of names to create [default: full]
    #[arg(long, value_enum)]
    pub profile: Option<Profile>,

    /// Create files on a worker pool.
    #[arg(long)]
    pub parallel: bool,
}

#[derive(Debug, Default, Args)]
pub struct ListArgs {
    /// Which set of names to list [default: full]
    #[arg(long, value_enum)]
    pub profile: Option<Profile>,
}

impl Cli {
    /// The subcommand to run, with `generate` filled in when none was given.
    pub fn command(&mut self) -> Command {
        self.command
            .take()
            .unwrap_or_else(|| Command::Generate(GenerateArgs::default()))
    }
}

impl From<&GenerateArgs> for Overrides {
    fn from(args: &GenerateArgs) -> Self {
        Overrides {
            dir: args.dir.clone(),
            profile: args.profile,
            parallel: args.parallel,
        }
    }
}

impl From<&ListArgs> for Overrides {
    fn from(args: &ListArgs) -> Self {
        Overrides {
            profile: args.profile,
            ..Overrides::default()
        }
    }
}

/// One line of `list` output: category, byte/char/grapheme counts and the
/// name with control characters escaped.
pub fn describe(entry: &CorpusEntry) -> String {
    let name = &entry.name;
    format!(
        "{:<10} {:>4}B {:>4}c {:>4}g  {}",
        entry.category.label(),
        name.len(),
        name.chars().count(),
        name.graphemes(true).count(),
        name.escape_debug()
    )
}

pub fn render_listing(corpus: &Corpus) -> String {
    let mut out = String::new();
    for entry in corpus.entries() {
        out.push_str(&describe(entry));
        out.push('\n');
    }
    out
}
