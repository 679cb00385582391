//! The confirmation gate in front of every step.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::error::{Result, RunError};
use crate::model::Step;

/// Something that can show a question and hand back one line of answer.
pub trait Prompter {
    /// Display `text` and block for a response. End-of-stream is an empty
    /// response.
    fn ask(&mut self, text: &str) -> io::Result<String>;
}

/// Where answers come from.
pub trait ReadAnswer {
    /// Append one line of raw bytes to `buf`; `Ok(0)` at end of stream.
    fn read_answer(&mut self, buf: &mut Vec<u8>) -> io::Result<usize>;
}

impl<T: BufRead> ReadAnswer for T {
    fn read_answer(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        self.read_until(b'\n', buf)
    }
}

/// Process stdin, locked only for the duration of each read so a `-` source
/// can still be drained.
pub struct StdinAnswers(io::Stdin);

impl ReadAnswer for StdinAnswers {
    fn read_answer(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        self.0.lock().read_until(b'\n', buf)
    }
}

/// Prompts on a writer and reads answers line by line.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
    warned_eof: bool,
}

impl<R: ReadAnswer, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            warned_eof: false,
        }
    }
}

impl LinePrompter<StdinAnswers, io::Stdout> {
    /// Questions on stdout, answers from stdin.
    pub fn stdio() -> Self {
        Self::new(StdinAnswers(io::stdin()), io::stdout())
    }
}

impl<R: ReadAnswer, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, text: &str) -> io::Result<String> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;

        // Bytes, not `read_line`: an answer that isn't UTF-8 is a "no", not an I/O error.
        let mut response = Vec::new();
        if self.input.read_answer(&mut response)? == 0 && !self.warned_eof {
            self.warned_eof = true;
            warn!("prompt input reached end of stream; remaining steps are auto-confirmed");
        }
        Ok(String::from_utf8_lossy(&response).into_owned())
    }
}

/// Text shown before running `step`.
pub fn question(step: &Step) -> String {
    format!("\n$ {step}    # Execute? [Y/n] ")
}

/// Empty, `y` and `yes` (any case, surrounding whitespace ignored) mean yes.
pub fn is_affirmative(response: &str) -> bool {
    matches!(response.trim().to_lowercase().as_str(), "" | "y" | "yes")
}

/// Ask once whether `step` should run. Unrecognised answers count as no.
pub fn confirm<P: Prompter + ?Sized>(prompter: &mut P, step: &Step) -> Result<bool> {
    let response = prompter.ask(&question(step)).map_err(RunError::Prompt)?;
    let yes = is_affirmative(&response);
    debug!(command = step.command(), response = response.trim(), yes, "gate answered");
    Ok(yes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{classify, LineKind};
    use std::io::Cursor;

    fn step(cmd: &str) -> Step {
        match classify(cmd) {
            LineKind::Runnable(step) => step,
            LineKind::Skip => panic!("{cmd:?} is not runnable"),
        }
    }

    #[test]
    fn affirmative_answers() {
        for answer in ["", "\n", "y", "Y\n", "  yes ", "YES", "yEs\r\n"] {
            assert!(is_affirmative(answer), "{answer:?} should be yes");
        }
    }

    #[test]
    fn everything_else_is_negative() {
        for answer in ["n", "no", "N\n", "nope", "yy", "ye", "sure", "y es", "1"] {
            assert!(!is_affirmative(answer), "{answer:?} should be no");
        }
    }

    #[test]
    fn question_format() {
        assert_eq!(
            question(&step("  echo hi ")),
            "\n$ echo hi    # Execute? [Y/n] "
        );
    }

    #[test]
    fn line_prompter_writes_question_and_reads_one_line() {
        let mut out = Vec::new();
        let mut prompter = LinePrompter::new(Cursor::new("n\ny\n"), &mut out);

        assert!(!confirm(&mut prompter, &step("rm -rf /tmp/x")).unwrap());
        assert!(confirm(&mut prompter, &step("echo done")).unwrap());

        let shown = String::from_utf8(out).unwrap();
        assert_eq!(
            shown,
            "\n$ rm -rf /tmp/x    # Execute? [Y/n] \n$ echo done    # Execute? [Y/n] "
        );
    }

    #[test]
    fn end_of_stream_confirms() {
        let mut prompter = LinePrompter::new(Cursor::new(""), io::sink());
        assert!(confirm(&mut prompter, &step("echo a")).unwrap());
        assert!(confirm(&mut prompter, &step("echo b")).unwrap());
    }

    #[test]
    fn non_utf8_answer_declines_instead_of_failing() {
        let mut prompter = LinePrompter::new(Cursor::new(b"\xffn\ny\n".to_vec()), io::sink());
        assert!(!confirm(&mut prompter, &step("echo a")).unwrap());
        assert!(confirm(&mut prompter, &step("echo b")).unwrap());
    }

    struct FailingReader;

    impl ReadAnswer for FailingReader {
        fn read_answer(&mut self, _buf: &mut Vec<u8>) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "tty went away"))
        }
    }

    #[test]
    fn read_failure_from_answer_source_is_fatal() {
        let mut prompter = LinePrompter::new(FailingReader, io::sink());
        let err = confirm(&mut prompter, &step("ls")).unwrap_err();
        assert!(matches!(err, RunError::Prompt(_)));
    }

    struct BrokenInput;

    impl Prompter for BrokenInput {
        fn ask(&mut self, _text: &str) -> io::Result<String> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }
    }

    #[test]
    fn prompt_io_error_is_surfaced() {
        let err = confirm(&mut BrokenInput, &step("ls")).unwrap_err();
        assert!(matches!(err, RunError::Prompt(_)));
    }
}
