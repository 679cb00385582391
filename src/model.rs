use std::fmt;

/// Prefixes that mark a line as a comment after trimming.
const COMMENT_PREFIXES: [&str; 2] = ["#", "//"];

/// A runnable command line, already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    command: String,
}

impl Step {
    pub fn command(&self) -> &str {
        &self.command
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Blank line or comment.
    Skip,
    Runnable(Step),
}

/// Classify one raw line of a step script.
///
/// The line is trimmed first; an empty result or one starting with `#` or `//`
/// is skipped. Anything else is a step whose command is the trimmed text.
pub fn classify(line: &str) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() || COMMENT_PREFIXES.iter().any(|p| trimmed.starts_with(p)) {
        return LineKind::Skip;
    }
    LineKind::Runnable(Step {
        command: trimmed.to_string(),
    })
}

/// Outcome reported by a [`crate::executor::Runner`] for one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Success,
    /// Non-zero exit. `None` when the child was killed by a signal.
    Failed(Option<i32>),
}

impl From<std::process::ExitStatus> for StepStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        if status.success() {
            StepStatus::Success
        } else {
            StepStatus::Failed(status.code())
        }
    }
}
