//! NDJSON events and one-line text summaries for command results

use std::io::{self, Write};

use serde::Serialize;
use serde_json::json;

use treepick::application::UnfoldReport;
use treepick::store::{CommitOutcome, Store};
use treepick::ui::TreeView;

use super::context::CommandContext;

/// Write one event per line to stdout
pub fn emit<T: Serialize>(event: &T) -> io::Result<()> {
    let line =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let mut out = io::stdout().lock();
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

pub fn print_outcome(ctx: &CommandContext, op: &str, outcome: &CommitOutcome) -> io::Result<()> {
    if ctx.json {
        return emit(&json!({ "event": "op", "op": op, "result": outcome }));
    }

    match outcome {
        CommitOutcome::Change(result) if result.path.is_empty() => {
            println!("{op}: nothing selected");
        }
        CommitOutcome::Change(result) => {
            println!("{op}: {} selected", result.path.len());
            for path in &result.path {
                println!("  {path}");
            }
        }
        CommitOutcome::Choose(result) => println!("{op}: chose {}", result.path),
        CommitOutcome::Unfold(ticket) => println!("{op}: fetch pending for {}", ticket.path),
    }
    Ok(())
}

pub fn print_unfold(ctx: &CommandContext, op: &str, report: &UnfoldReport) -> io::Result<()> {
    if ctx.json {
        return emit(&json!({ "event": "op", "op": op, "result": report }));
    }

    let state = if report.open { "open" } else { "closed" };
    let detail = match (report.fetched, report.rejected) {
        (Some(completion), _) => format!(", fetch {}", serde_label(&completion)),
        (None, Some(reason)) => format!(", {reason}"),
        (None, None) => String::new(),
    };
    println!("{op}: {} {state}{detail}", report.path);
    Ok(())
}

pub fn print_tree(ctx: &CommandContext, store: &Store, expand_all: bool) -> io::Result<()> {
    if ctx.json {
        return emit(&json!({ "event": "tree", "id": store.id(), "tree": store.root() }));
    }
    let view = TreeView::new(ctx.unicode).with_expand_all(expand_all);
    println!("{}", view.render(store.root()));
    Ok(())
}

/// Final selection and chosen element
pub fn print_summary(ctx: &CommandContext, store: &Store) -> io::Result<()> {
    let selected = store.selected_paths();
    if ctx.json {
        return emit(&json!({
            "event": "summary",
            "id": store.id(),
            "path": selected,
            "chosen": store.chosen().map(|c| c.to_string()),
        }));
    }
    if ctx.quiet() {
        return Ok(());
    }
    println!("{} selected", selected.len());
    Ok(())
}

fn serde_label<T: Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}
