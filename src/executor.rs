use std::io;
use std::process::{Command, Stdio};

use tracing::{debug, error, instrument};

use crate::error::{Result, RunError};
use crate::model::{Step, StepStatus};

pub const DEFAULT_SHELL: &str = "bash";

/// Runs one command string to completion.
pub trait Runner {
    /// Launch errors come back as `Err`; any exit, zero or not, as `Ok`.
    fn run(&mut self, command: &str) -> io::Result<StepStatus>;
}

/// Runs commands through `<program> -c <command>` with the parent's stdin,
/// stdout and stderr handed straight to the child.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    program: String,
}

impl ShellRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new(DEFAULT_SHELL)
    }
}

impl Runner for ShellRunner {
    #[instrument(skip(self), fields(shell = %self.program))]
    fn run(&mut self, command: &str) -> io::Result<StepStatus> {
        debug!("spawning step");
        let status = Command::new(&self.program)
            .arg("-c")
            .arg(command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;
        debug!(exit_code = ?status.code(), "step finished");
        Ok(status.into())
    }
}

/// Run a confirmed step. Both launch failures and non-zero exits are errors.
pub fn execute<R: Runner + ?Sized>(runner: &mut R, step: &Step) -> Result<()> {
    let command = step.command();
    match runner.run(command) {
        Ok(StepStatus::Success) => Ok(()),
        Ok(StepStatus::Failed(code)) => {
            error!(command, ?code, "step failed");
            Err(RunError::StepFailed {
                command: command.to_string(),
                code,
            })
        }
        Err(source) => {
            error!(command, err = %source, "failed to launch step");
            Err(RunError::Launch {
                command: command.to_string(),
                source,
            })
        }
    }
}
