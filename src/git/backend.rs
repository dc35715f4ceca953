use super::command::{run_command, CommandOutput};
use super::repository::is_repository;
use std::path::PathBuf;

/// The handful of git operations the simulator issues.
///
/// Every operation reports a [`CommandOutput`] instead of an error so the
/// caller can log a failure and carry on with the next step.
#[cfg_attr(test, mockall::automock)]
pub trait GitBackend {
    fn is_repository(&self) -> bool;
    fn init(&mut self, initial_branch: &str) -> CommandOutput;
    fn stage(&mut self, paths: &[String]) -> CommandOutput;
    fn commit(&mut self, message: &str) -> CommandOutput;
    fn add_remote(&mut self, name: &str, url: &str) -> CommandOutput;
    fn push(&mut self, remote: &str, branch: &str, set_upstream: bool) -> CommandOutput;
}

/// Drives the `git` binary inside a fixed working directory.
pub struct ShellGit {
    workdir: PathBuf,
}

impl ShellGit {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    fn git(&self, args: &[&str]) -> CommandOutput {
        run_command("git", args, &self.workdir)
    }
}

impl GitBackend for ShellGit {
    fn is_repository(&self) -> bool {
        is_repository(&self.workdir)
    }

    fn init(&mut self, initial_branch: &str) -> CommandOutput {
        let branch_arg = format!("--initial-branch={initial_branch}");
        self.git(&["init", &branch_arg])
    }

    fn stage(&mut self, paths: &[String]) -> CommandOutput {
        let mut args = vec!["add", "--"];
        args.extend(paths.iter().map(String::as_str));
        self.git(&args)
    }

    fn commit(&mut self, message: &str) -> CommandOutput {
        self.git(&["commit", "-m", message])
    }

    fn add_remote(&mut self, name: &str, url: &str) -> CommandOutput {
        self.git(&["remote", "add", name, url])
    }

    fn push(&mut self, remote: &str, branch: &str, set_upstream: bool) -> CommandOutput {
        if set_upstream {
            self.git(&["push", "-u", remote, branch])
        } else {
            self.git(&["push", remote, branch])
        }
    }
}
