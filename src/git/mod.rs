mod backend;
mod command;
mod repository;

#[cfg(test)]
pub use backend::MockGitBackend;
pub use backend::{GitBackend, ShellGit};
pub use command::CommandOutput;
