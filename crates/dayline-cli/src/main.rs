//! `dayline` CLI — drive the timeline scheduling engine from scripts.
//!
//! ## Usage
//!
//! ```sh
//! # Apply an operation script to an empty schedule (stdin → stdout)
//! echo '[{"op":"create","title":"Standup","start":9,"duration":1}]' | dayline run
//!
//! # Run a script against the built-in demo day
//! dayline run --demo -i script.json
//!
//! # Run against a seeded task list
//! dayline run --seed tasks.json -i script.json
//!
//! # Report overlaps in a task list
//! dayline conflicts -i tasks.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::fmt::Write as _;
use std::io::{self, Read};

use dayline_engine::{
    format_hour, Controller, Schedule, Task, TaskDraft, TaskFields, TaskId,
};

#[derive(Parser)]
#[command(
    name = "dayline",
    version,
    about = "Single-day timeline scheduling from the command line"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a JSON operation script and print notifications plus the
    /// resulting schedule
    Run {
        /// Script file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Seed the schedule with the built-in demo day
        #[arg(long, conflicts_with = "seed")]
        demo: bool,
        /// Seed the schedule from a JSON task list
        #[arg(long)]
        seed: Option<String>,
    },
    /// Report pairwise overlaps in a JSON task list
    Conflicts {
        /// Task list file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// One scripted operation against the interaction controller.
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
enum ScriptOp {
    Create {
        #[serde(flatten)]
        draft: TaskDraft,
    },
    Update {
        id: u64,
        #[serde(flatten)]
        fields: TaskFields,
    },
    Delete {
        id: u64,
    },
    Move {
        id: u64,
        start: f64,
    },
    Drag {
        id: u64,
        offset_px: f64,
        px_per_hour: f64,
    },
    ZoomIn,
    ZoomOut,
    ZoomReset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            input,
            output,
            demo,
            seed,
        } => {
            let script = read_input(input.as_deref())?;
            let ops: Vec<ScriptOp> =
                serde_json::from_str(&script).context("Failed to parse operation script")?;

            let schedule = if demo {
                Schedule::demo_day()
            } else if let Some(path) = seed {
                Schedule::from_tasks(read_tasks(&path)?)
            } else {
                Schedule::new()
            };

            let report = run_script(Controller::new(schedule), ops);
            write_output(output.as_deref(), &report)?;
        }
        Commands::Conflicts { input, output } => {
            let json = read_input(input.as_deref())?;
            let tasks: Vec<Task> =
                serde_json::from_str(&json).context("Failed to parse task list")?;

            let conflicts = dayline_engine::find_conflicts(&tasks);
            let mut report = String::new();
            if conflicts.is_empty() {
                report.push_str("No conflicts.\n");
            } else {
                for conflict in &conflicts {
                    let _ = writeln!(report, "{}", conflict.message);
                }
            }
            write_output(output.as_deref(), &report)?;
        }
    }

    Ok(())
}

/// Apply every operation in order, collecting each notification as it is
/// emitted, then append the final schedule (sorted by start time) and its
/// conflict set.
fn run_script(mut board: Controller, ops: Vec<ScriptOp>) -> String {
    let mut report = String::new();
    let mut last_seq = None;

    for op in ops {
        match op {
            ScriptOp::Create { draft } => {
                board.open_create_dialog();
                if board.submit_create(draft).is_none() {
                    board.cancel_dialog();
                }
            }
            ScriptOp::Update { id, fields } => {
                let id = TaskId(id);
                if board.open_edit_dialog(id) && !board.submit_update(id, fields) {
                    board.cancel_dialog();
                }
            }
            ScriptOp::Delete { id } => board.delete_task(TaskId(id)),
            ScriptOp::Move { id, start } => {
                board.move_task(TaskId(id), start);
            }
            ScriptOp::Drag {
                id,
                offset_px,
                px_per_hour,
            } => {
                let id = TaskId(id);
                board.drag_start(id);
                board.drag_end(id, offset_px, px_per_hour);
            }
            ScriptOp::ZoomIn => board.zoom_in(),
            ScriptOp::ZoomOut => board.zoom_out(),
            ScriptOp::ZoomReset => board.reset_zoom(),
        }

        if let Some(n) = board.notification() {
            if last_seq != Some(n.seq) {
                last_seq = Some(n.seq);
                let severity = match n.severity {
                    dayline_engine::Severity::Success => "success",
                    dayline_engine::Severity::Error => "error",
                    dayline_engine::Severity::Info => "info",
                };
                let _ = writeln!(report, "[{}] {}", severity, n.message);
            }
        }
    }

    report.push_str("\nSchedule:\n");
    for task in board.schedule().tasks_by_start() {
        let _ = writeln!(
            report,
            "  {}-{}  {:<8} {}",
            format_hour(task.start),
            format_hour(task.start + task.duration),
            format!("[{:?}]", task.priority).to_lowercase(),
            task.title
        );
    }

    let conflicts = board.schedule().conflicts();
    if conflicts.is_empty() {
        report.push_str("No conflicts.\n");
    } else {
        report.push_str("Conflicts:\n");
        for conflict in conflicts {
            let _ = writeln!(report, "  {}", conflict.message);
        }
    }

    report
}

fn read_tasks(path: &str) -> Result<Vec<Task>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path))?;
    serde_json::from_str(&json).with_context(|| format!("Failed to parse task list: {}", path))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
