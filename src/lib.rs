//! Interactive runbook step-runner.
//!
//! A step script is plain text with one shell command per line. Each command
//! is shown to the operator, confirmed (empty answer means yes), then run
//! through a shell with the terminal handed over to it. The first failing
//! step ends the whole run.

pub mod error;
pub mod executor;
pub mod exit_codes;
pub mod logging;
pub mod model;
pub mod prompt;
pub mod runner;
pub mod source;
pub mod status;

pub use error::{Result, RunError};
pub use executor::{Runner, ShellRunner};
pub use model::{classify, LineKind, Step, StepStatus};
pub use prompt::{LinePrompter, Prompter};
pub use runner::{RunConfig, StepRunner};
pub use source::Source;
pub use status::StatusWriter;

/// Version reported in the startup banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
