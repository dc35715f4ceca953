use crate::logger;
use std::path::Path;
use std::process::Command as ProcCommand;

/// Status and captured output of one external command.
///
/// Commands never fail with an error: a process that could not even be
/// spawned is reported as an unsuccessful output carrying the spawn error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failed(stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            code: None,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

/// Run `program args...` inside `workdir`, logging the command line and its result.
pub fn run_command(program: &str, args: &[&str], workdir: &Path) -> CommandOutput {
    logger::command(&display_command(program, args));

    let output = match ProcCommand::new(program)
        .args(args)
        .current_dir(workdir)
        .output()
    {
        Ok(output) => CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        },
        Err(e) => CommandOutput::failed(format!("failed to spawn {program}: {e}")),
    };

    report(&output);
    output
}

fn report(output: &CommandOutput) {
    if !output.success {
        logger::error(&format!("Error running command: {}", output.stderr.trim()));
    } else if !output.stdout.trim().is_empty() {
        log::info!("Output: {}", output.stdout.trim());
    }
}

fn display_command(program: &str, args: &[&str]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        if arg.contains(char::is_whitespace) {
            line.push_str(&format!("\"{arg}\""));
        } else {
            line.push_str(arg);
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_display_command_quotes_spaced_args() {
        assert_eq!(
            display_command("git", &["commit", "-m", "Minor improvements"]),
            "git commit -m \"Minor improvements\""
        );
        assert_eq!(display_command("git", &["add", "NOTES.md"]), "git add NOTES.md");
    }

    #[test]
    fn test_failed_command_is_reported_not_raised() {
        let dir = tempdir().unwrap();
        // Not a repository, so `git status` exits non-zero.
        let output = run_command("git", &["status"], dir.path());
        assert!(!output.success);
        assert!(!output.stderr.is_empty());
    }

    #[test]
    fn test_missing_program_becomes_failed_output() {
        let dir = tempdir().unwrap();
        let output = run_command("definitely-not-a-real-binary-xyz", &[], dir.path());
        assert!(!output.success);
        assert_eq!(output.code, None);
        assert!(output.stderr.contains("failed to spawn"));
    }

    #[test]
    fn test_successful_command_captures_stdout() {
        let dir = tempdir().unwrap();
        let output = run_command("git", &["--version"], dir.path());
        assert!(output.success);
        assert_eq!(output.code, Some(0));
        assert!(output.stdout.starts_with("git version"));
    }
}
