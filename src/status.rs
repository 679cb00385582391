//! Operator-facing status lines.
//!
//! These are product output, not diagnostics: they are always written,
//! regardless of `RUST_LOG`. Styling is only applied when enabled.

use std::fmt::Display;
use std::io::{self, Write};

use crossterm::style::Stylize;
use crossterm::tty::IsTty;

use crate::error::{Result, RunError};

pub struct StatusWriter<W> {
    out: W,
    color: bool,
}

impl<W: Write> StatusWriter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn banner(&mut self, version: &str) -> Result<()> {
        let text = format!("step-script @ {version}");
        if self.color {
            self.line(text.bold())
        } else {
            self.line(text)
        }
    }

    /// The blank line between a confirmed prompt and the step's own output.
    pub fn separator(&mut self) -> Result<()> {
        self.line("")
    }

    pub fn skipping(&mut self) -> Result<()> {
        let text = "Skipping step...";
        if self.color {
            self.line(text.yellow())
        } else {
            self.line(text)
        }
    }

    pub fn source_finished(&mut self, name: &str, count: usize) -> Result<()> {
        self.line(format!("Finished running {count} commands from {name}."))
    }

    pub fn finished(&mut self, total: usize) -> Result<()> {
        let text = format!("Finished running {total} commands.");
        if self.color {
            self.line(text.green())
        } else {
            self.line(text)
        }
    }

    /// Fatal error line plus how far the run got.
    pub fn aborted(&mut self, err: &dyn Display, total: usize) -> Result<()> {
        let text = format!("error: {err:#}");
        if self.color {
            self.line(text.red().bold())?;
        } else {
            self.line(text)?;
        }
        self.line(format!("Aborted after running {total} commands."))
    }

    fn line(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.out, "{text}")
            .and_then(|()| self.out.flush())
            .map_err(RunError::Status)
    }
}

impl StatusWriter<io::Stderr> {
    /// Status on stderr, styled when it is a terminal and `color` allows.
    pub fn stderr(color: bool) -> Self {
        let err = io::stderr();
        let color = color && err.is_tty();
        Self::new(err, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> StatusWriter<Vec<u8>> {
        StatusWriter::new(Vec::new(), false)
    }

    fn text(w: StatusWriter<Vec<u8>>) -> String {
        String::from_utf8(w.into_inner()).unwrap()
    }

    #[test]
    fn plain_lines() {
        let mut w = plain();
        w.banner("1.2.3").unwrap();
        w.separator().unwrap();
        w.skipping().unwrap();
        w.source_finished("a.txt", 2).unwrap();
        w.finished(3).unwrap();
        assert_eq!(
            text(w),
            "step-script @ 1.2.3\n\nSkipping step...\n\
             Finished running 2 commands from a.txt.\nFinished running 3 commands.\n"
        );
    }

    #[test]
    fn aborted_reports_error_and_total() {
        let mut w = plain();
        let err = RunError::StepFailed {
            command: "false".into(),
            code: Some(1),
        };
        w.aborted(&err, 4).unwrap();
        assert_eq!(
            text(w),
            "error: command `false` exited with status 1\nAborted after running 4 commands.\n"
        );
    }

    #[test]
    fn color_wraps_text_in_escape_codes() {
        let mut w = StatusWriter::new(Vec::new(), true);
        w.skipping().unwrap();
        let out = text(w);
        assert!(out.contains("Skipping step..."));
        assert!(out.contains('\u{1b}'));
    }
}
