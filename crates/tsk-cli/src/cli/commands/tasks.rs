//! Task command handlers.
//!
//! Thin wrappers: restore the session, load the store, call one operation.
//! The store enforces the access policy itself; the only check done here is
//! the login gate in front of `list`, mirroring the app's routing.

use anyhow::{Context, Result, ensure};
use tsk_core::auth::AuthGate;
use tsk_core::store::TaskStore;
use tsk_core::task::{StatusFilter, Task, TaskDraft, TaskPatch, TaskStatus};

fn open() -> Result<(AuthGate, TaskStore)> {
    let gate = AuthGate::restore();
    let store = TaskStore::load().context("load task store")?;
    Ok((gate, store))
}

fn print_row(task: &Task) {
    println!(
        "{}  {:<11}  {}  {}",
        task.id, task.status, task.updated_at, task.title
    );
}

pub fn list(filter: StatusFilter) -> Result<()> {
    let (gate, store) = open()?;
    ensure!(
        gate.is_authenticated(),
        "not logged in (run `tsk login <username> <password>` first)"
    );

    let tasks = store.list(filter);
    if tasks.is_empty() {
        match filter {
            StatusFilter::All => println!("No tasks found."),
            StatusFilter::Only(status) => println!("No {status} tasks."),
        }
        return Ok(());
    }

    for task in &tasks {
        print_row(task);
    }
    if let StatusFilter::Only(status) = filter {
        println!("Showing: {} tasks ({} of {})", status, tasks.len(), store.len());
    }
    Ok(())
}

pub fn create(draft: TaskDraft) -> Result<()> {
    let (gate, mut store) = open()?;
    let task = store
        .create(gate.session(), draft)
        .context("create task")?;
    println!("Created task {} ({})", task.id, task.title);
    Ok(())
}

pub fn edit(id: &str, patch: TaskPatch) -> Result<()> {
    ensure!(
        !patch.is_empty(),
        "nothing to edit: pass at least one of --title, --description, --assigned-to, --status"
    );
    let (gate, mut store) = open()?;
    let task = store
        .update(gate.session(), id, patch)
        .with_context(|| format!("edit task '{id}'"))?;
    println!("Updated task {} ({})", task.id, task.title);
    Ok(())
}

pub fn done(id: &str) -> Result<()> {
    let (gate, mut store) = open()?;
    let task = store
        .set_status(gate.session(), id, TaskStatus::Completed)
        .with_context(|| format!("complete task '{id}'"))?;
    println!("Completed task {} ({})", task.id, task.title);
    Ok(())
}

pub fn delete(id: &str) -> Result<()> {
    let (gate, mut store) = open()?;
    store
        .delete(gate.session(), id)
        .with_context(|| format!("delete task '{id}'"))?;
    println!("Deleted task {id}");
    Ok(())
}
