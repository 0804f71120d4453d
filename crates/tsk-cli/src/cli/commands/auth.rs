//! Session command handlers.

use anyhow::{Context, Result};
use tsk_core::auth::AuthGate;

pub fn login(username: &str, password: &str) -> Result<()> {
    let mut gate = AuthGate::restore();
    let role = gate.login(username, password).context("login failed")?;
    println!("Logged in as {username} ({role})");
    Ok(())
}

pub fn logout() -> Result<()> {
    let mut gate = AuthGate::restore();
    gate.logout().context("logout failed")?;
    println!("Logged out.");
    Ok(())
}

pub fn whoami() -> Result<()> {
    let gate = AuthGate::restore();
    match gate.role() {
        Some(role) => println!("Logged in ({role})"),
        None => println!("Not logged in."),
    }
    Ok(())
}
