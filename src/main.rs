use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use step_script::executor::DEFAULT_SHELL;
use step_script::{
    exit_codes, logging, LinePrompter, RunConfig, ShellRunner, Source, StatusWriter, StepRunner,
    VERSION,
};

#[derive(Parser)]
#[command(
    name = "step-script",
    version,
    about = "Walk through a runbook of shell commands, one confirmed step at a time",
    long_about = "Each PATH holds commands, one per line, that are executed with \
                  `bash -c '...'` one at a time, each after a prompt. Blank lines and \
                  lines starting with `#` or `//` are ignored. An empty answer runs the \
                  step; the first failing step stops everything."
)]
struct Cli {
    /// Step scripts to run, in order. `-` reads the script from standard input.
    #[arg(value_name = "PATH", required = true)]
    paths: Vec<PathBuf>,

    /// Interpreter invoked as `<SHELL> -c <step>`.
    #[arg(long, env = "STEP_SCRIPT_SHELL", default_value = DEFAULT_SHELL)]
    shell: String,

    /// Never style status output.
    #[arg(long)]
    no_color: bool,
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("step-script: {:#}", err);
            std::process::exit(exit_codes::FAILED);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let mut runner = StepRunner::new(RunConfig {
        version: VERSION.to_string(),
        prompter: LinePrompter::stdio(),
        runner: ShellRunner::new(cli.shell),
        status: StatusWriter::stderr(!cli.no_color),
    });

    runner.banner().context("Failed to write startup banner")?;

    // Opened lazily so nothing after a failure is touched.
    let sources = cli.paths.iter().map(|path| Source::open(path));
    match runner.run_all(sources) {
        Ok(_) => Ok(exit_codes::OK),
        Err(err) => {
            let err = anyhow::Error::new(err);
            runner
                .abort(&err)
                .with_context(|| format!("Failed to report error: {err}"))?;
            Ok(exit_codes::FAILED)
        }
    }
}
