//! Plain-text rendering of the task list screen.

use std::io::{self, Write};
use tasktracker_core::{ScreenCopy, TaskListSnapshot, ValidationPrompt};

pub fn render_header(out: &mut impl Write, copy: &ScreenCopy) -> io::Result<()> {
    writeln!(out, "{}", copy.title)?;
    writeln!(out, "{}", copy.subtitle)?;
    writeln!(out)
}

/// Numbered list, or the empty state when there is nothing to show.
pub fn render_tasks(
    out: &mut impl Write,
    copy: &ScreenCopy,
    snapshot: &TaskListSnapshot,
) -> io::Result<()> {
    if snapshot.is_empty {
        writeln!(out, "  {}", copy.empty_title)?;
        return writeln!(out, "  {}", copy.empty_hint);
    }

    for (index, task) in snapshot.tasks.iter().enumerate() {
        let mark = if task.done { copy.done_marker } else { " " };
        writeln!(out, "{:>3}. [{mark}] {}", index + 1, task.text())?;
    }
    Ok(())
}

pub fn render_footer(out: &mut impl Write, copy: &ScreenCopy) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", copy.footer)
}

pub fn render_prompt(out: &mut impl Write, prompt: &ValidationPrompt) -> io::Result<()> {
    writeln!(out, "{} {}", prompt.title, prompt.message)
}
