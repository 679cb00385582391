//! Step-script sources: an owned, named line reader over a file or stdin.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor, Read};
use std::path::Path;

use tracing::debug;

use crate::error::{Result, RunError};

/// Path argument that selects standard input.
pub const STDIN_PATH: &str = "-";

/// One open script source. Consumed by iterating [`Source::lines`].
pub struct Source {
    name: String,
    reader: Box<dyn BufRead>,
}

impl Source {
    pub fn from_reader(name: impl Into<String>, reader: impl BufRead + 'static) -> Self {
        Self {
            name: name.into(),
            reader: Box::new(reader),
        }
    }

    /// Open `path`, or standard input when it is `-`.
    ///
    /// Standard input doubles as the prompt channel, so it is drained up
    /// front; prompts that follow will see end-of-stream.
    pub fn open(path: &Path) -> Result<Self> {
        if path.as_os_str() == STDIN_PATH {
            let mut buf = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .map_err(|source| RunError::Read {
                    name: "<stdin>".to_string(),
                    source,
                })?;
            debug!(bytes = buf.len(), "buffered script from stdin");
            return Ok(Self::from_reader("<stdin>", Cursor::new(buf)));
        }

        let file = File::open(path).map_err(|source| RunError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_reader(
            path.display().to_string(),
            BufReader::new(file),
        ))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lazily yield lines without their terminators (`\n` or `\r\n`).
    ///
    /// An unterminated final line is still yielded. The first I/O or UTF-8
    /// error ends the sequence.
    pub fn lines(self) -> Lines {
        Lines {
            name: self.name,
            inner: self.reader.lines(),
            failed: false,
        }
    }
}

impl std::fmt::Debug for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Source").field("name", &self.name).finish()
    }
}

pub struct Lines {
    name: String,
    inner: io::Lines<Box<dyn BufRead>>,
    failed: bool,
}

impl Iterator for Lines {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.inner.next()? {
            Ok(line) => Some(Ok(line)),
            Err(source) => {
                self.failed = true;
                Some(Err(RunError::Read {
                    name: self.name.clone(),
                    source,
                }))
            }
        }
    }
}
