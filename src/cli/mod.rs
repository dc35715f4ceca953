use crate::config::SimulatorConfig;
use crate::error::SimError;
use crate::simulator::{CommitSimulator, RunOutcome, SeededRandom};
use log::debug;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = env!("CARGO_PKG_NAME"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Opt {
    #[structopt(
        long,
        parse(from_os_str),
        help = "Path to a TOML config file (defaults to the user config directory)"
    )]
    pub config: Option<PathBuf>,

    #[structopt(long, help = "Create the repository and its initial commit if missing")]
    pub init: bool,

    #[structopt(long, parse(from_os_str), help = "Project directory to commit into")]
    pub project_dir: Option<PathBuf>,

    #[structopt(long, help = "Seed the random generator for a reproducible run")]
    pub seed: Option<u64>,
}

impl Opt {
    pub fn parse_from<I>(args: I) -> Result<Self, SimError>
    where
        I: IntoIterator,
        I::Item: Into<std::ffi::OsString> + Clone,
    {
        Ok(Self::from_iter_safe(args)?)
    }

    /// File config (or defaults) with command-line overrides applied.
    pub fn resolve_config(&self) -> Result<SimulatorConfig, SimError> {
        let mut config = SimulatorConfig::load(self.config.as_deref())?;

        if self.init {
            config.initialize = true;
        }
        if let Some(dir) = &self.project_dir {
            config.project_dir = Some(dir.clone());
        }

        Ok(config)
    }

    pub fn execute(&self) -> Result<RunOutcome, SimError> {
        let config = self.resolve_config()?;
        debug!("Resolved configuration: {config:?}");

        let mut simulator = CommitSimulator::new(config)?;
        if let Some(seed) = self.seed {
            debug!("Using seeded random generator ({seed})");
            simulator = simulator.with_random(Box::new(SeededRandom::new(seed)));
        }

        simulator.run()
    }
}
