pub mod read_settings;

use std::path::PathBuf;

pub use read_settings::{load_settings, parse_settings, Settings, SettingsError};

use crate::corpus::{Corpus, Profile};
use crate::fs_op::FilesystemError;

/// Directory used when neither the command line nor a settings file names one.
pub const DEFAULT_TARGET_DIR: &str = "/tmp/testchars";

/// Fully resolved parameters for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub dir: PathBuf,
    pub profile: Profile,
    pub parallel: bool,
    pub extra_names: Vec<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            dir: PathBuf::from(DEFAULT_TARGET_DIR),
            profile: Profile::default(),
            parallel: false,
            extra_names: Vec::new(),
        }
    }
}

/// Values given on the command line; `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub dir: Option<PathBuf>,
    pub profile: Option<Profile>,
    pub parallel: bool,
}

impl RunConfig {
    /// Layer settings-file values over the defaults, then CLI values over those.
    pub fn resolve(settings: Settings, cli: Overrides) -> Self {
        let base = RunConfig::default();
        RunConfig {
            dir: cli.dir.or(settings.dir).unwrap_or(base.dir),
            profile: cli.profile.or(settings.profile).unwrap_or(base.profile),
            parallel: cli.parallel || settings.parallel.unwrap_or(base.parallel),
            extra_names: settings.extra_names,
        }
    }

    /// Corpus for the selected profile plus any extra names.
    pub fn corpus(&self) -> Result<Corpus, FilesystemError> {
        let mut corpus = self.profile.corpus();
        corpus.extend_custom(self.extra_names.iter().cloned())?;
        Ok(corpus)
    }
}
