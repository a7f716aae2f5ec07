//! Line-oriented viewer shell.
//!
//! Commands are dispatched without waiting for the pipeline: a new command
//! supersedes whatever is still loading. State changes are printed by a
//! separate task watching the controller.

use anyhow::{anyhow, Context};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;

use tm_app::{ListSnapshots, NavigationController, NavigationState, ResolvedView};
use tm_core::{SnapshotDescriptor, SnapshotId};

const DATE_FORMAT: &str = "%Y-%m-%d";
const LIST_PAGE_SIZE: u32 = 20;

const HELP: &str = "\
commands:
  view <id>          show one snapshot
  compare <a> <b>    overlay snapshot b onto snapshot a
  prev | next        step to the neighboring snapshot
  list [page]        list snapshots
  status             print the current state
  quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    View(SnapshotId),
    Compare(SnapshotId, SnapshotId),
    Prev,
    Next,
    List(u32),
    Status,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> anyhow::Result<Self> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or_else(|| anyhow!("empty command"))?;
        let args: Vec<&str> = words.collect();

        let id = |raw: &str| -> anyhow::Result<SnapshotId> {
            raw.parse()
                .with_context(|| format!("invalid snapshot id: {}", raw))
        };

        match (verb, args.as_slice()) {
            ("view" | "v", [raw]) => Ok(Self::View(id(raw)?)),
            ("compare" | "c", [a, b]) => Ok(Self::Compare(id(a)?, id(b)?)),
            ("prev" | "p" | "<", []) => Ok(Self::Prev),
            ("next" | "n" | ">", []) => Ok(Self::Next),
            ("list" | "ls", []) => Ok(Self::List(1)),
            ("list" | "ls", [page]) => Ok(Self::List(
                page.parse()
                    .with_context(|| format!("invalid page: {}", page))?,
            )),
            ("status" | "s", []) => Ok(Self::Status),
            ("help" | "?", []) => Ok(Self::Help),
            ("quit" | "q" | "exit", []) => Ok(Self::Quit),
            _ => Err(anyhow!("unknown command: {} (try `help`)", line.trim())),
        }
    }
}

fn format_date(descriptor: &SnapshotDescriptor) -> String {
    descriptor.timestamp.format(DATE_FORMAT).to_string()
}

/// Neighbor bar for a resolved view, e.g. `2023-01-04 <  [2023-01-05]  > 2023-01-06`.
pub fn format_view(view: &ResolvedView) -> String {
    let base = view.base();
    let prev = base
        .prev
        .map(|n| format!("{} <  ", n.timestamp.format(DATE_FORMAT)))
        .unwrap_or_default();
    let next = base
        .next
        .map(|n| format!("  > {}", n.timestamp.format(DATE_FORMAT)))
        .unwrap_or_default();
    let current = match view {
        ResolvedView::Single(d) => format!("[{}]", format_date(d)),
        ResolvedView::Pair(a, b) => format!("[{} + {}]", format_date(a), format_date(b)),
    };
    format!("{}{}{}", prev, current, next)
}

pub fn describe_state(state: &NavigationState) -> String {
    match state {
        NavigationState::Idle => "idle".to_string(),
        NavigationState::Loading { selection } => format!("loading {} ...", selection),
        NavigationState::Ready { view, .. } => format_view(view),
        NavigationState::Failed { selection, reason } => {
            format!("failed to load {}: {}", selection, reason)
        }
    }
}

async fn print_states(mut states: watch::Receiver<NavigationState>) {
    while states.changed().await.is_ok() {
        let line = describe_state(&states.borrow_and_update());
        println!("{}", line);
    }
}

/// Apply one command. Returns `false` when the shell should exit.
async fn dispatch(
    command: Command,
    controller: &NavigationController,
    list_snapshots: &ListSnapshots,
) -> bool {
    match command {
        Command::View(id) => {
            controller.select(tm_core::Selection::Single(id));
        }
        Command::Compare(a, b) => {
            controller.select(tm_core::Selection::Pair(a, b));
        }
        Command::Prev => {
            if controller.go_prev().is_none() {
                println!("no earlier snapshot");
            }
        }
        Command::Next => {
            if controller.go_next().is_none() {
                println!("no later snapshot");
            }
        }
        Command::List(page) => match list_snapshots.execute(page, LIST_PAGE_SIZE).await {
            Ok(listing) => {
                println!(
                    "page {}/{} ({} snapshots)",
                    page, listing.number_of_pages, listing.number_of_snapshots
                );
                for snapshot in listing.snapshots {
                    println!(
                        "{:>6}  {}  {:?}  {}",
                        snapshot.id,
                        snapshot.timestamp.format(DATE_FORMAT),
                        snapshot.source_kind,
                        snapshot.note.unwrap_or_default()
                    );
                }
            }
            Err(err) => eprintln!("{:#}", err),
        },
        Command::Status => println!("{}", describe_state(&controller.state())),
        Command::Help => println!("{}", HELP),
        Command::Quit => return false,
    }
    true
}

/// Read commands from stdin until EOF or `quit`.
pub async fn run_shell(
    controller: NavigationController,
    list_snapshots: ListSnapshots,
) -> anyhow::Result<()> {
    let printer = tokio::spawn(print_states(controller.subscribe()));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match Command::parse(&line) {
            Ok(command) => {
                if !dispatch(command, &controller, &list_snapshots).await {
                    break;
                }
            }
            Err(err) => eprintln!("{:#}", err),
        }
    }

    printer.abort();
    Ok(())
}
