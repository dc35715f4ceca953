mod clock;
mod random;

pub use clock::{Clock, SystemClock};
pub use random::{RandomSource, SeededRandom, ThreadRandom};

use crate::config::{SimulatorConfig, INITIAL_COMMIT_MESSAGE};
use crate::error::SimError;
use crate::git::{CommandOutput, GitBackend, ShellGit};
use crate::logger;
use crate::notes::{self, NOTES_BOILERPLATE, README_BOILERPLATE};
use log::debug;
use std::fs;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    AlreadyInitialized,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Skipped { chance: f64 },
    Committed(CommitReport),
}

/// What a non-skipped run did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommitReport {
    /// Messages of the commits, in creation order.
    pub messages: Vec<String>,
    pub sleeps: Vec<Duration>,
    pub failed_commands: usize,
    pub pushed: bool,
}

impl CommitReport {
    pub fn commit_count(&self) -> usize {
        self.messages.len()
    }

    fn track(&mut self, output: CommandOutput) {
        if !output.success {
            self.failed_commands += 1;
        }
    }
}

/// Runs the daily commit script against one project directory.
///
/// Git failures are logged by the backend and counted, never raised: a failed
/// `git add` does not stop the following commit or the final push. Only local
/// file I/O errors abort a run.
pub struct CommitSimulator {
    config: SimulatorConfig,
    git: Box<dyn GitBackend>,
    random: Box<dyn RandomSource>,
    clock: Box<dyn Clock>,
}

impl CommitSimulator {
    /// Fails with [`SimError::InvalidConfig`] when `config` breaks its invariants.
    pub fn new(config: SimulatorConfig) -> Result<Self, SimError> {
        config.validate()?;
        let git = ShellGit::new(config.project_dir());
        Ok(Self {
            config,
            git: Box::new(git),
            random: Box::new(ThreadRandom),
            clock: Box::new(SystemClock),
        })
    }

    pub fn with_git(mut self, git: Box<dyn GitBackend>) -> Self {
        self.git = git;
        self
    }

    pub fn with_random(mut self, random: Box<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    pub fn run(&mut self) -> Result<RunOutcome, SimError> {
        if self.config.initialize {
            self.maybe_initialize()?;
        } else {
            debug!("Repository initialization disabled");
        }

        let outcome = self.decide_and_run()?;

        if let RunOutcome::Committed(report) = &outcome {
            self.log_summary(report);
        }

        Ok(outcome)
    }

    /// Create the project directory, repository and initial commit if the
    /// directory is not a repository yet. Does nothing otherwise.
    pub fn maybe_initialize(&mut self) -> Result<InitOutcome, SimError> {
        if self.git.is_repository() {
            logger::info("Git repository already initialized.");
            return Ok(InitOutcome::AlreadyInitialized);
        }

        let dir = self.config.project_dir();
        if !dir.is_dir() {
            logger::progress(&format!("Creating folder: {}", dir.display()));
            fs::create_dir_all(dir)?;
        }

        logger::progress("Initializing new Git repository...");
        self.git.init(&self.config.branch);

        notes::write_if_absent(&self.config.readme_path(), README_BOILERPLATE)?;
        notes::write_if_absent(&self.config.notes_path(), NOTES_BOILERPLATE)?;

        self.git.stage(&[
            self.config.readme_file.clone(),
            self.config.notes_file.clone(),
        ]);
        self.git.commit(INITIAL_COMMIT_MESSAGE);

        if self.config.add_remote_on_init {
            self.git
                .add_remote(&self.config.remote_name, &self.config.remote_url);
            self.git
                .push(&self.config.remote_name, &self.config.branch, true);
        }

        Ok(InitOutcome::Created)
    }

    /// Flip the weighted coin and either skip or make today's commits.
    pub fn decide_and_run(&mut self) -> Result<RunOutcome, SimError> {
        let chance = self.random.unit();
        if chance < self.config.skip_threshold {
            logger::info(&format!("Skipping commits today (chance={chance:.2})."));
            return Ok(RunOutcome::Skipped { chance });
        }

        logger::info(&format!("Proceeding with commits (chance={chance:.2})."));
        Ok(RunOutcome::Committed(self.perform_commits()?))
    }

    /// A notes write error aborts before the push, leaving earlier commits local.
    pub fn perform_commits(&mut self) -> Result<CommitReport, SimError> {
        let count = self
            .random
            .between(self.config.min_commits, self.config.max_commits);
        logger::info(&format!("Will make {count} commits today."));

        let notes_path = self.config.notes_path();
        let staged = [self.config.notes_file.clone()];
        let mut report = CommitReport::default();

        for i in 0..count {
            let message = self.pick_message();

            let entry = notes::format_entry(self.clock.now(), &message);
            notes::append_entry(&notes_path, &entry)?;

            report.track(self.git.stage(&staged));
            report.track(self.git.commit(&message));
            report.messages.push(message);

            if i + 1 < count {
                let seconds = self
                    .random
                    .between(self.config.min_sleep_secs, self.config.max_sleep_secs);
                logger::progress(&format!("Sleeping for ~{} minutes.", seconds / 60));
                let duration = Duration::from_secs(seconds);
                self.clock.sleep(duration);
                report.sleeps.push(duration);
            }
        }

        if count == 0 {
            logger::warning("No commits made, nothing to push.");
            return Ok(report);
        }

        logger::progress("Pushing commits to remote...");
        report.track(
            self.git
                .push(&self.config.remote_name, &self.config.branch, false),
        );
        report.pushed = true;

        Ok(report)
    }

    fn log_summary(&self, report: &CommitReport) {
        if !report.pushed {
            return;
        }

        let target = format!("{}/{}", self.config.remote_name, self.config.branch);
        if report.failed_commands == 0 {
            logger::success(&format!(
                "Made {} commit(s) and pushed to {}",
                report.commit_count(),
                target
            ));
        } else {
            logger::warning(&format!(
                "Made {} commit(s) for {}, {} git command(s) failed",
                report.commit_count(),
                target,
                report.failed_commands
            ));
        }
    }

    fn pick_message(&mut self) -> String {
        let last = self.config.commit_messages.len().saturating_sub(1) as u64;
        let index = self.random.between(0, last) as usize;
        self.config.commit_messages[index].clone()
    }
}
