//! Interactive task list session driven by line commands.
//!
//! # Responsibility
//! - Translate parsed commands into controller calls.
//! - Re-render the screen after every change.
//!
//! # Invariants
//! - Command errors and rejected adds never end the session.
//! - List positions are resolved against the current snapshot.

use crate::command::{parse_command, Command, USAGE};
use crate::render::{render_footer, render_header, render_prompt, render_tasks};
use std::io::{self, BufRead, Write};
use tasktracker_core::{ScreenCopy, TaskListController, ValidationPrompt};

const INPUT_MARKER: &str = "> ";

pub struct Session {
    controller: TaskListController,
    copy: ScreenCopy,
}

impl Session {
    pub fn new() -> Self {
        Self {
            controller: TaskListController::new(),
            copy: ScreenCopy::default(),
        }
    }

    #[cfg(test)]
    pub fn controller(&self) -> &TaskListController {
        &self.controller
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
        render_header(out, &self.copy)?;
        render_tasks(out, &self.copy, &self.controller.snapshot())?;
        writeln!(out, "{} (type `help` for commands)", self.copy.input_placeholder)?;

        for line in input.lines() {
            let line = line?;
            let command = match parse_command(&line) {
                None => continue,
                Some(Ok(command)) => command,
                Some(Err(message)) => {
                    writeln!(out, "{message}")?;
                    continue;
                }
            };
            if command == Command::Quit {
                break;
            }
            self.apply(command, out)?;
        }

        render_footer(out, &self.copy)?;
        out.flush()
    }

    fn apply(&mut self, command: Command, out: &mut impl Write) -> io::Result<()> {
        match command {
            Command::Add(text) => {
                if let Some(text) = text {
                    self.controller.set_draft_text(text);
                }
                if let Err(err) = self.controller.add() {
                    return render_prompt(out, &ValidationPrompt::for_error(&err));
                }
            }
            Command::Draft(text) => {
                self.controller.set_draft_text(text);
                return writeln!(out, "{INPUT_MARKER}{}", self.controller.draft_text());
            }
            Command::Toggle(position) => {
                if let Some(id) = self.id_at(position) {
                    self.controller.toggle(id);
                }
            }
            Command::Delete(position) => {
                if let Some(id) = self.id_at(position) {
                    self.controller.delete(id);
                }
            }
            Command::List => {}
            Command::Help => return writeln!(out, "{USAGE}"),
            Command::Quit => return Ok(()),
        }
        render_tasks(out, &self.copy, &self.controller.snapshot())
    }

    fn id_at(&self, position: usize) -> Option<tasktracker_core::TaskId> {
        position
            .checked_sub(1)
            .and_then(|index| self.controller.tasks().get(index))
            .map(|task| task.id)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
