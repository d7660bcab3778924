use std::io::{self, IsTerminal};
use clap::Parser;
use stockroom_app::Event;
use crate::opts::Opts;
use crate::shell::Shell;

mod opts;
mod render;
mod shell;

fn main() -> anyhow::Result<()> {
    let args = argfile::expand_args(
        argfile::parse_fromfile,
        argfile::PREFIX,
    )?;

    let opts = Opts::parse_from(args);

    cli::tracing::configure_tracing(opts.trace.clone(), opts.verbose.clone())?;

    let stdout = io::stdout();
    let mut shell = Shell::new(stdout.lock());

    if !opts.empty {
        shell.dispatch(Event::LoadSampleParts)?;
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        shell.run_interactive()
    } else {
        shell.run(stdin.lock())
    }
}
