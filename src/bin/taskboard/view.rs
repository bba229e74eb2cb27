//! Shell views over the task store: the creation form, the task list, and
//! per-task actions.

use crate::cli::{self, ShellCommand};
use mockable::Clock;
use std::io::{self, BufRead, Write};
use taskboard::{
    shell::split_words,
    task::{
        domain::{NewTask, Priority, Task, TaskId, TaskList, TaskPatch, TaskText, TaskTitle},
        ports::TaskIdGenerator,
        services::{TaskStore, TaskSubscription},
    },
};
use thiserror::Error;

const HELP: &str = "\
Commands:
  add <title> <text> [--priority P] [--done]   add a task
  list | ls [--json]                           show every task
  toggle <id>                                  mark complete / incomplete
  edit <id> <text>                             replace a task's description
  delete | rm <id>                             remove a task
  help                                         show this message
  quit | exit                                  leave the shell
Priorities: \"Very Important\", \"Important\", \"Not Important\"";

/// Failures that end the shell session.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Reading input or writing output failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    /// Rendering the task list as JSON failed.
    #[error("failed to render tasks as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Whether the session continues after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop reading.
    Quit,
}

/// Interactive session bound to one store.
pub struct Shell<G, C, W>
where
    G: TaskIdGenerator,
    C: Clock + Send + Sync,
    W: Write,
{
    store: TaskStore<G, C>,
    subscription: TaskSubscription,
    default_priority: Priority,
    out: W,
}

impl<G, C, W> Shell<G, C, W>
where
    G: TaskIdGenerator,
    C: Clock + Send + Sync,
    W: Write,
{
    /// Creates a session that writes to `out`.
    pub fn new(store: TaskStore<G, C>, default_priority: Priority, out: W) -> Self {
        let subscription = store.subscribe();
        Self {
            store,
            subscription,
            default_priority,
            out,
        }
    }

    /// Reads and executes lines until `quit` or end of input.
    ///
    /// A line that is not valid UTF-8 is reported and skipped.
    pub fn run(&mut self, mut input: impl BufRead) -> Result<(), ShellError> {
        writeln!(self.out, "Type `help` for commands.")?;
        self.prompt()?;
        let mut buffer = Vec::new();
        loop {
            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            let flow = match std::str::from_utf8(&buffer) {
                Ok(line) => self.handle_line(strip_line_ending(line))?,
                Err(_) => {
                    self.notify_error("input is not valid UTF-8")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                return Ok(());
            }
            self.prompt()?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    /// Executes one line and re-renders the list if the store changed.
    pub fn handle_line(&mut self, line: &str) -> Result<Flow, ShellError> {
        let words = match split_words(line) {
            Ok(words) => words,
            Err(err) => {
                self.notify_error(&err.to_string())?;
                return Ok(Flow::Continue);
            }
        };
        if words.is_empty() {
            return Ok(Flow::Continue);
        }
        let command = match cli::parse_words(&words) {
            Ok(command) => command,
            Err(err) => {
                let rendered = err.to_string();
                self.notify_error(rendered.lines().next().unwrap_or("invalid command"))?;
                return Ok(Flow::Continue);
            }
        };

        let flow = self.execute(command)?;
        if self.subscription.has_changed().unwrap_or(false) {
            let tasks = self.subscription.latest();
            self.render_list(&tasks)?;
        }
        Ok(flow)
    }

    fn execute(&mut self, command: ShellCommand) -> Result<Flow, ShellError> {
        match command {
            ShellCommand::Add {
                title,
                text,
                priority,
                done,
            } => self.submit_form(title, text, priority, done)?,
            ShellCommand::List { json } => {
                let tasks = self.subscription.latest();
                if json {
                    serde_json::to_writer_pretty(&mut self.out, &tasks)?;
                    writeln!(self.out)?;
                } else {
                    self.render_list(&tasks)?;
                }
            }
            ShellCommand::Toggle { id } => self.toggle(&TaskId::from_string(id))?,
            ShellCommand::Edit { id, text } => self.edit(&TaskId::from_string(id), text)?,
            ShellCommand::Delete { id } => self.delete(&TaskId::from_string(id))?,
            ShellCommand::Help => writeln!(self.out, "{HELP}")?,
            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn submit_form(
        &mut self,
        title: String,
        text: String,
        priority: Option<Priority>,
        done: bool,
    ) -> Result<(), ShellError> {
        let Ok(title) = TaskTitle::new(title) else {
            return self.notify_error("Title is required");
        };
        let Ok(text) = TaskText::new(text) else {
            return self.notify_error("Description is required");
        };
        let input = NewTask::new(title, text, priority.unwrap_or(self.default_priority))
            .with_completed(done);
        let id = self.store.add(input);
        self.notify(&format!("Task added successfully ({id})"))
    }

    fn toggle(&mut self, id: &TaskId) -> Result<(), ShellError> {
        let Some(task) = self.store.get(id) else {
            return self.notify_missing(id);
        };
        let completed = !task.is_completed();
        if !self.store.update(id, TaskPatch::completed(completed)).is_applied() {
            return self.notify_missing(id);
        }
        if completed {
            self.notify("Task completed")
        } else {
            self.notify("Task marked as incomplete")
        }
    }

    fn edit(&mut self, id: &TaskId, text: String) -> Result<(), ShellError> {
        let Some(task) = self.store.get(id) else {
            return self.notify_missing(id);
        };
        if task.is_completed() {
            return self.notify_error("Completed tasks cannot be edited");
        }
        let Ok(text) = TaskText::new(text) else {
            return self.notify_error("Description is required");
        };
        if !self.store.update(id, TaskPatch::text(text)).is_applied() {
            return self.notify_missing(id);
        }
        self.notify("Task updated successfully")
    }

    fn delete(&mut self, id: &TaskId) -> Result<(), ShellError> {
        if !self.store.delete(id).is_applied() {
            return self.notify_missing(id);
        }
        self.notify("Task deleted successfully")
    }

    fn render_list(&mut self, tasks: &TaskList) -> Result<(), ShellError> {
        if tasks.is_empty() {
            writeln!(self.out, "No tasks yet. Add one above!")?;
            return Ok(());
        }
        for task in tasks {
            render_task(&mut self.out, task)?;
        }
        Ok(())
    }

    fn prompt(&mut self) -> Result<(), ShellError> {
        write!(self.out, "> ")?;
        self.out.flush()?;
        Ok(())
    }

    fn notify(&mut self, message: &str) -> Result<(), ShellError> {
        writeln!(self.out, "[ok] {message}")?;
        Ok(())
    }

    fn notify_error(&mut self, message: &str) -> Result<(), ShellError> {
        writeln!(self.out, "[error] {message}")?;
        Ok(())
    }

    fn notify_missing(&mut self, id: &TaskId) -> Result<(), ShellError> {
        self.notify_error(&format!("No task with id {id}"))
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

fn render_task(out: &mut impl Write, task: &Task) -> io::Result<()> {
    let mark = if task.is_completed() { 'x' } else { ' ' };
    writeln!(out, "[{mark}] {}  ({})", task.title(), task.priority())?;
    writeln!(out, "    {}", task.text())?;
    writeln!(
        out,
        "    Created {}  id {}",
        task.created_at().format("%b %-d, %Y"),
        task.id()
    )
}
