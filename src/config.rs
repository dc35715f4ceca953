use crate::error::SimError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_PROJECT_DIR: &str = ".";
pub const DEFAULT_INIT_PROJECT_DIR: &str = "my_private_useless_project";
pub const DEFAULT_REMOTE_NAME: &str = "origin";
pub const DEFAULT_REMOTE_URL: &str = "git@github.com:your-username/your-private-repo.git";
pub const DEFAULT_BRANCH: &str = "main";

pub const DEFAULT_SKIP_THRESHOLD: f64 = 0.10;

pub const DEFAULT_MIN_COMMITS: u64 = 1;
pub const DEFAULT_MAX_COMMITS: u64 = 10;

pub const DEFAULT_MIN_SLEEP_SECS: u64 = 5 * 60;
pub const DEFAULT_MAX_SLEEP_SECS: u64 = 30 * 60;

pub const NOTES_FILE: &str = "NOTES.md";
pub const README_FILE: &str = "README.md";

pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit (auto)";

pub const COMMIT_MESSAGES: &[&str] = &[
    "Fix typo in documentation",
    "Update usage instructions",
    "Refactor minor code details",
    "Enhance build script",
    "Improve configuration",
    "Update README with new info",
    "Add more notes to documentation",
    "Adjust project structure",
    "Minor improvements",
    "Refactor for clarity",
];

const CONFIG_DIR_NAME: &str = "daily-commit";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Everything a run needs to know. Loaded once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulatorConfig {
    /// Unset means the current directory, or a dedicated project folder when
    /// `initialize` is on. See [`SimulatorConfig::project_dir`].
    pub project_dir: Option<PathBuf>,
    pub remote_name: String,
    pub remote_url: String,
    pub branch: String,
    pub skip_threshold: f64,
    pub min_commits: u64,
    pub max_commits: u64,
    pub min_sleep_secs: u64,
    pub max_sleep_secs: u64,
    pub commit_messages: Vec<String>,
    pub notes_file: String,
    pub readme_file: String,
    /// Create the repository and its initial commit before deciding anything.
    pub initialize: bool,
    /// Register `remote_url` and push with upstream tracking during initialization.
    pub add_remote_on_init: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            project_dir: None,
            remote_name: DEFAULT_REMOTE_NAME.to_string(),
            remote_url: DEFAULT_REMOTE_URL.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            skip_threshold: DEFAULT_SKIP_THRESHOLD,
            min_commits: DEFAULT_MIN_COMMITS,
            max_commits: DEFAULT_MAX_COMMITS,
            min_sleep_secs: DEFAULT_MIN_SLEEP_SECS,
            max_sleep_secs: DEFAULT_MAX_SLEEP_SECS,
            commit_messages: COMMIT_MESSAGES.iter().map(|m| m.to_string()).collect(),
            notes_file: NOTES_FILE.to_string(),
            readme_file: README_FILE.to_string(),
            initialize: false,
            add_remote_on_init: false,
        }
    }
}

impl SimulatorConfig {
    /// Load the configuration from `path`, or from the user config file when no
    /// path is given. Falls back to the compiled-in defaults when neither exists.
    pub fn load(path: Option<&Path>) -> Result<Self, SimError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path().filter(|p| p.is_file()) {
                Some(path) => {
                    log::debug!("Using config file at {path:?}");
                    Self::from_file(&path)?
                }
                None => Self::default(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, SimError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, SimError> {
        Ok(toml::from_str(content)?)
    }

    /// Directory the simulator works in.
    pub fn project_dir(&self) -> &Path {
        match &self.project_dir {
            Some(dir) => dir,
            None if self.initialize => Path::new(DEFAULT_INIT_PROJECT_DIR),
            None => Path::new(DEFAULT_PROJECT_DIR),
        }
    }

    pub fn notes_path(&self) -> PathBuf {
        self.project_dir().join(&self.notes_file)
    }

    pub fn readme_path(&self) -> PathBuf {
        self.project_dir().join(&self.readme_file)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if !(0.0..1.0).contains(&self.skip_threshold) {
            return Err(SimError::InvalidConfig(format!(
                "skip_threshold must be in [0, 1), got {}",
                self.skip_threshold
            )));
        }
        if self.min_commits > self.max_commits {
            return Err(SimError::InvalidConfig(format!(
                "min_commits ({}) is greater than max_commits ({})",
                self.min_commits, self.max_commits
            )));
        }
        if self.min_sleep_secs > self.max_sleep_secs {
            return Err(SimError::InvalidConfig(format!(
                "min_sleep_secs ({}) is greater than max_sleep_secs ({})",
                self.min_sleep_secs, self.max_sleep_secs
            )));
        }
        if self.commit_messages.is_empty()
            || self.commit_messages.iter().any(|m| m.trim().is_empty())
        {
            return Err(SimError::InvalidConfig(
                "commit_messages must be a non-empty list of non-empty messages".to_string(),
            ));
        }
        if self.branch.trim().is_empty() || self.remote_name.trim().is_empty() {
            return Err(SimError::InvalidConfig(
                "branch and remote_name must not be empty".to_string(),
            ));
        }
        if self.notes_file.trim().is_empty() || self.readme_file.trim().is_empty() {
            return Err(SimError::InvalidConfig(
                "notes_file and readme_file must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
