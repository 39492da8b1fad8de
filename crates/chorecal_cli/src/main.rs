//! Command-line front end for the chore calendar.
//!
//! # Responsibility
//! - Expose the store's mutations and the dashboard/calendar views as
//!   subcommands over a file-backed store.
//! - Own the user-facing validation the core does not duplicate (for
//!   example, requiring a non-empty title).

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use chorecal_core::{
    chores_by_date, clamp_to_millis, default_log_level, filter_by_assignee, init_logging,
    sort_by_priority, sort_soonest, weekly_completion, Chore, ChoreDraft, ChoreStatus, ChoreStore,
    FileStorage, Priority,
};

#[derive(Parser, Debug)]
#[command(name = "chorecal", about = "Household chore tracker", version)]
struct Cli {
    /// Directory holding the persisted snapshot.
    #[arg(long, default_value = ".", global = true)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
enum Commands {
    /// Add a chore.
    Add {
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        assignee: String,
        /// Scheduled instant, RFC 3339 (e.g. 2024-06-10T09:00:00Z).
        #[arg(long, value_parser = parse_instant)]
        scheduled: Option<DateTime<Utc>>,
        #[arg(long, default_value = "medium", value_parser = parse_priority)]
        priority: Priority,
    },
    /// List chores, dashboard style.
    List {
        /// Only show chores assigned to this name (exact match).
        #[arg(long)]
        assignee: Option<String>,
        /// Sort order: soonest or priority.
        #[arg(long, default_value = "soonest", value_parser = parse_sort)]
        sort: SortOrder,
    },
    /// Advance a chore's status one step (pending -> in progress -> completed).
    Advance { id: String },
    /// Delete a chore.
    Delete { id: String },
    /// Manage the assignee set.
    Assignee {
        #[command(subcommand)]
        command: AssigneeCommands,
    },
    /// Show this week's completion progress.
    Progress,
    /// Show scheduled chores grouped by day.
    Calendar {
        /// Only show this day (YYYY-MM-DD).
        #[arg(long, value_parser = parse_day)]
        date: Option<NaiveDate>,
    },
}

#[derive(Debug, Clone, Subcommand)]
enum AssigneeCommands {
    /// Add a name to the assignee set (no-op when already present).
    Add { name: String },
    /// List the assignee set in order of first appearance.
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortOrder {
    Soonest,
    Priority,
}

fn parse_instant(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        // Clamped to the millisecond precision the snapshot keeps, so the
        // schedule shown after a reopen is the schedule that was entered.
        .map(|dt| clamp_to_millis(dt.with_timezone(&Utc)))
        .map_err(|err| format!("not an RFC 3339 timestamp: {err}"))
}

fn parse_day(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|err| format!("not a YYYY-MM-DD date: {err}"))
}

fn parse_priority(value: &str) -> Result<Priority, String> {
    match value {
        "low" => Ok(Priority::Low),
        "medium" => Ok(Priority::Medium),
        "high" => Ok(Priority::High),
        other => Err(format!("unknown priority `{other}`; expected low|medium|high")),
    }
}

fn parse_sort(value: &str) -> Result<SortOrder, String> {
    match value {
        "soonest" => Ok(SortOrder::Soonest),
        "priority" => Ok(SortOrder::Priority),
        other => Err(format!("unknown sort `{other}`; expected soonest|priority")),
    }
}

fn status_glyph(status: ChoreStatus) -> &'static str {
    match status {
        ChoreStatus::Completed => "✓",
        ChoreStatus::InProgress => "◐",
        ChoreStatus::Pending => "○",
    }
}

fn print_chore_line(chore: &Chore) {
    let scheduled = chore
        .scheduled
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "unscheduled".to_string());
    let assignee = if chore.assignee.is_empty() {
        "unassigned"
    } else {
        &chore.assignee
    };
    println!(
        "{} [{}] {}  ({}, {}, {})",
        status_glyph(chore.status),
        chore.id,
        chore.title,
        chore.priority.as_str(),
        assignee,
        scheduled
    );
}

/// Log directory under the system temp dir; always absolute, as
/// `init_logging` requires.
fn default_log_dir() -> PathBuf {
    std::env::temp_dir().join("chorecal").join("logs")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logging is diagnostics only; a failed bootstrap must not block chores.
    if let Some(log_dir) = default_log_dir().to_str() {
        let _ = init_logging(default_log_level(), log_dir);
    }

    let mut store = ChoreStore::open(FileStorage::new(&cli.data_dir));

    match cli.command {
        Commands::Add {
            title,
            description,
            assignee,
            scheduled,
            priority,
        } => {
            if title.trim().is_empty() {
                return Err("title must not be empty".into());
            }
            let id = store.add(ChoreDraft {
                title,
                description,
                assignee,
                scheduled,
                priority,
                status: ChoreStatus::Pending,
            });
            println!("Added chore {id}");
        }
        Commands::List { assignee, sort } => {
            let chores = store.chores();
            let filtered: Vec<Chore> = match assignee.as_deref() {
                Some(name) => filter_by_assignee(chores, name)
                    .into_iter()
                    .cloned()
                    .collect(),
                None => chores.to_vec(),
            };
            let sorted = match sort {
                SortOrder::Soonest => sort_soonest(&filtered),
                SortOrder::Priority => sort_by_priority(&filtered),
            };
            if sorted.is_empty() {
                println!("No chores yet. Add one to get started.");
            }
            for chore in sorted {
                print_chore_line(chore);
            }
        }
        Commands::Advance { id } => {
            if store.get(&id).is_none() {
                return Err(format!("no chore with id `{id}`").into());
            }
            store.advance_status(&id);
            let chore = store.get(&id).expect("chore was present before advance");
            println!("{} is now {}", chore.title, chore.status.as_str());
        }
        Commands::Delete { id } => {
            if store.get(&id).is_none() {
                return Err(format!("no chore with id `{id}`").into());
            }
            store.delete(&id);
            println!("Deleted chore {id}");
        }
        Commands::Assignee { command } => match command {
            AssigneeCommands::Add { name } => {
                if name.trim().is_empty() {
                    return Err("name must not be empty".into());
                }
                store.add_assignee(name);
                println!("Assignees: {}", store.assignees().join(", "));
            }
            AssigneeCommands::List => {
                for name in store.assignees() {
                    println!("{name}");
                }
            }
        },
        Commands::Progress => {
            let progress = weekly_completion(store.chores(), Utc::now());
            println!(
                "This week's completion: {} / {} chores ({}% done)",
                progress.completed, progress.total, progress.percent
            );
        }
        Commands::Calendar { date } => {
            let mut grouped = chores_by_date(store.chores());
            if let Some(day) = date {
                grouped.retain(|grouped_day, _| *grouped_day == day);
                if grouped.is_empty() {
                    println!("No chores on {day}.");
                }
            } else if grouped.is_empty() {
                println!("No scheduled chores.");
            }
            for (day, chores) in grouped {
                println!("{}", day.format("%A, %B %e %Y"));
                for chore in chores {
                    print_chore_line(chore);
                }
            }
        }
    }

    Ok(())
}
