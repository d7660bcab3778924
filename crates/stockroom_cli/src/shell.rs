use std::io::{BufRead, Write};
use std::ops::ControlFlow;
use crux_core::Core;
use dialoguer::Confirm;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use stockroom_app::{Effect, Event, Stockroom};
use tracing::{debug, trace};
use crate::opts::{Command, ShellLine};
use crate::render;

const PROMPT: &str = "stockroom> ";

/// Line oriented shell, one command per line.
///
/// Every event is rendered as soon as the core asks for it.
pub struct Shell<W: Write> {
    core: Core<Effect, Stockroom>,
    output: W,
}

impl<W: Write> Shell<W> {
    pub fn new(output: W) -> Self {
        Self {
            core: Core::new(),
            output,
        }
    }

    pub fn dispatch(&mut self, event: Event) -> anyhow::Result<()> {
        debug!("event: {:?}", event);

        for effect in self.core.process_event(event) {
            debug!("effect: {:?}", effect);

            match effect {
                Effect::Render(_) => {
                    let view = self.core.view();
                    render::render_view(&view, &mut self.output)?;
                }
            }
        }
        Ok(())
    }

    /// Executes one line of input, `confirm` is asked before anything destructive happens.
    pub fn execute<C>(&mut self, line: &str, confirm: C) -> anyhow::Result<ControlFlow<()>>
    where
        C: FnOnce(&mut W, &str) -> anyhow::Result<bool>,
    {
        trace!("line: '{}'", line);

        if line.trim().is_empty() {
            return Ok(ControlFlow::Continue(()))
        }

        let command = match ShellLine::parse_line(line) {
            Ok(command) => command,
            Err(error) => {
                // also covers `help` and `--help`
                writeln!(self.output, "{}", error.to_string().trim_end())?;
                return Ok(ControlFlow::Continue(()))
            }
        };

        match command {
            Command::Exit => return Ok(ControlFlow::Break(())),
            Command::Remove { code, yes: false } => {
                let question = format!("Remove part with code {}?", code);
                if confirm(&mut self.output, &question)? {
                    self.dispatch(Event::RemovePart { code })?;
                } else {
                    writeln!(self.output, "Removal cancelled. code: {}", code)?;
                }
            },
            command => {
                match Event::try_from(command) {
                    Ok(event) => self.dispatch(event)?,
                    Err(error) => writeln!(self.output, "Error: {}", error)?,
                }
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    /// Runs until `exit` or the end of the input, for piped input.
    ///
    /// A removal is confirmed by the line following it.
    pub fn run<R: BufRead>(&mut self, input: R) -> anyhow::Result<()> {
        let mut lines = input.lines();

        while let Some(line) = lines.next() {
            let line = line?;

            let flow = self.execute(&line, |output, question| {
                writeln!(output, "{} [y/N]", question)?;

                let answer = lines.next().transpose()?.unwrap_or_default();
                Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
            })?;

            if flow.is_break() {
                break;
            }
        }

        Ok(())
    }

    /// Runs until `exit`, end of file or a terminal error, for a terminal.
    pub fn run_interactive(&mut self) -> anyhow::Result<()> {
        let mut editor = DefaultEditor::new()?;

        loop {
            match editor.readline(PROMPT) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    editor.add_history_entry(line.as_str())?;

                    let flow = self.execute(&line, |_output, question| {
                        let confirmed = Confirm::new()
                            .with_prompt(question)
                            .default(false)
                            .interact()?;
                        Ok(confirmed)
                    })?;

                    if flow.is_break() {
                        break;
                    }
                },
                Err(ReadlineError::Interrupted) => {
                    writeln!(self.output, "Use 'exit' to quit")?;
                },
                Err(ReadlineError::Eof) => break,
                Err(error) => return Err(error.into()),
            }
        }

        Ok(())
    }
}
