//! The step loop: read, classify, confirm, execute, count.

use std::fmt::Display;
use std::io::Write;

use tracing::{debug, info, info_span};

use crate::error::Result;
use crate::executor::{execute, Runner};
use crate::model::{classify, LineKind};
use crate::prompt::{confirm, Prompter};
use crate::source::Source;
use crate::status::StatusWriter;

/// Everything a run needs, passed in explicitly.
pub struct RunConfig<P, R, W> {
    /// Shown in the startup banner.
    pub version: String,
    pub prompter: P,
    pub runner: R,
    pub status: StatusWriter<W>,
}

pub struct StepRunner<P, R, W> {
    config: RunConfig<P, R, W>,
    total: usize,
}

impl<P: Prompter, R: Runner, W: Write> StepRunner<P, R, W> {
    pub fn new(config: RunConfig<P, R, W>) -> Self {
        Self { config, total: 0 }
    }

    pub fn config(&self) -> &RunConfig<P, R, W> {
        &self.config
    }

    /// Steps executed successfully so far, across all sources.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn banner(&mut self) -> Result<()> {
        self.config.status.banner(&self.config.version)
    }

    /// Report a fatal error and how many steps ran before it.
    pub fn abort(&mut self, err: &dyn Display) -> Result<()> {
        self.config.status.aborted(err, self.total)
    }

    /// Drive one source to exhaustion and return how many steps ran.
    ///
    /// The first failing step, read error or prompt error aborts with `Err`;
    /// steps that already ran remain counted in [`StepRunner::total`].
    pub fn run_source(&mut self, source: Source) -> Result<usize> {
        let span = info_span!("source", name = source.name());
        let _enter = span.enter();

        let name = source.name().to_string();
        let mut count = 0;
        for line in source.lines() {
            let line = line?;
            let step = match classify(&line) {
                LineKind::Skip => continue,
                LineKind::Runnable(step) => step,
            };

            if !confirm(&mut self.config.prompter, &step)? {
                self.config.status.skipping()?;
                continue;
            }

            self.config.status.separator()?;
            execute(&mut self.config.runner, &step)?;
            count += 1;
            self.total += 1;
            debug!(command = step.command(), count, "step done");
        }

        info!(count, "source exhausted");
        self.config.status.source_finished(&name, count)?;
        Ok(count)
    }

    /// Run sources strictly in order. Stops at the first error; later
    /// sources are never pulled from the iterator.
    pub fn run_all<I>(&mut self, sources: I) -> Result<Vec<usize>>
    where
        I: IntoIterator<Item = Result<Source>>,
    {
        let mut counts = Vec::new();
        for source in sources {
            counts.push(self.run_source(source?)?);
        }
        self.config.status.finished(self.total)?;
        Ok(counts)
    }
}
