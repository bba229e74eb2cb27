//! Process arguments and the grammar of shell command lines.

use clap::{Parser, Subcommand, ValueEnum};
use taskboard::task::{
    adapters::{SequentialTaskIdGenerator, UuidTaskIdGenerator},
    domain::Priority,
    ports::TaskIdGenerator,
};

/// Process-level configuration.
#[derive(Debug, Parser)]
#[command(name = "taskboard", version, about = "Track tasks in an interactive shell")]
pub struct Args {
    /// Log filter used when `TASKBOARD_LOG` is unset.
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Identifier scheme for new tasks.
    #[arg(long, value_enum, default_value_t = IdScheme::Uuid)]
    pub ids: IdScheme,

    /// Prefix for sequential identifiers.
    #[arg(long, default_value = "task-")]
    pub id_prefix: String,

    /// Priority used by `add` when none is given.
    #[arg(long, default_value_t = Priority::Important)]
    pub default_priority: Priority,
}

impl Args {
    /// Builds the identifier generator selected by `--ids`.
    pub fn id_generator(&self) -> Box<dyn TaskIdGenerator> {
        match self.ids {
            IdScheme::Uuid => Box::new(UuidTaskIdGenerator),
            IdScheme::Sequential => {
                Box::new(SequentialTaskIdGenerator::with_prefix(self.id_prefix.clone()))
            }
        }
    }
}

/// Identifier scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IdScheme {
    /// Random UUIDs.
    Uuid,
    /// Prefix plus a counter.
    Sequential,
}

/// One parsed shell line.
#[derive(Debug, Parser)]
#[command(
    name = "taskboard",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

/// Commands understood by the shell.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum ShellCommand {
    /// Add a task.
    Add {
        /// Task title.
        title: String,
        /// Task description.
        text: String,
        /// Task priority.
        #[arg(short, long)]
        priority: Option<Priority>,
        /// Create the task already completed.
        #[arg(long)]
        done: bool,
    },
    /// Show every task.
    #[command(visible_alias = "ls")]
    List {
        /// Print the collection as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Flip a task between complete and incomplete.
    Toggle {
        /// Task identifier.
        id: String,
    },
    /// Replace a task's description.
    Edit {
        /// Task identifier.
        id: String,
        /// New description.
        text: String,
    },
    /// Remove a task.
    #[command(visible_alias = "rm")]
    Delete {
        /// Task identifier.
        id: String,
    },
    /// Show available commands.
    Help,
    /// Leave the shell.
    #[command(visible_alias = "exit")]
    Quit,
}

/// Parses already-split words into a shell command.
pub fn parse_words(words: &[String]) -> Result<ShellCommand, clap::Error> {
    ShellLine::try_parse_from(words).map(|line| line.command)
}
