use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every way a run can stop early. All of them are fatal to the whole run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read a line from {name}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to read the operator's response")]
    Prompt(#[source] io::Error),

    #[error("failed to execute command: {command}")]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("command `{command}` {}", describe_exit(.code))]
    StepFailed { command: String, code: Option<i32> },

    #[error("failed to write status output")]
    Status(#[source] io::Error),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {code}"),
        None => "was terminated by a signal".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, RunError>;
