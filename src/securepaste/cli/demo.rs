//! # Guided Tour
//!
//! `securepaste demo` walks through every client operation in a fixed order
//! against a live service, printing a summary after each step.
//!
//! Only the opening health check is fatal: if it fails the tour stops with
//! [`PasteError::Unavailable`] and the binary exits nonzero. If either of the
//! first two creates fails the tour stops quietly, since every later step
//! depends on their ids. Any other failure is reported and the tour moves on.

use super::render::{render_paste, render_statistics};
use colored::Colorize;
use securepaste::api::{CmdResult, PasteClient};
use securepaste::backend::Backend;
use securepaste::error::{PasteError, Result};
use securepaste::model::{PasteOptions, PasteUpdate, Visibility};
use std::io::Write;

const PROTECTED_PASSWORD: &str = "secret123";

pub fn run<B: Backend>(client: &PasteClient<B>, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", "SecurePaste Rust Client Example".bold())?;
    writeln!(out, "{}", "=".repeat(50))?;

    step(out, 1, "Health Check")?;
    if client.health_check() {
        ok(out, "Service is healthy")?;
    } else {
        fail(out, "Service is not available")?;
        return Err(PasteError::Unavailable(client.describe()));
    }

    step(out, 2, "Creating a simple paste")?;
    let simple = report(
        out,
        "Failed to create paste",
        client.create_paste(
            "Hello World Example",
            r#"print("Hello, World from Python!")"#,
            PasteOptions::new()
                .language("python")
                .author_name("API Example")
                .visibility(Visibility::Public),
        ),
    )?
    .and_then(CmdResult::into_paste);
    let Some(simple) = simple else {
        return Ok(());
    };
    ok(out, "Paste created successfully")?;
    write!(out, "{}", render_paste(&simple))?;

    step(out, 3, "Creating a password-protected paste")?;
    let protected = report(
        out,
        "Failed to create protected paste",
        client.create_paste(
            "Secret Code",
            "const secret = 'This is a secret message!';",
            PasteOptions::new()
                .language("javascript")
                .visibility(Visibility::Unlisted)
                .password(PROTECTED_PASSWORD),
        ),
    )?
    .and_then(CmdResult::into_paste);
    let Some(protected) = protected else {
        return Ok(());
    };
    ok(out, "Protected paste created successfully")?;
    write!(out, "{}", render_paste(&protected))?;

    step(out, 4, "Creating a paste that expires in 60 minutes")?;
    let expiring = report(
        out,
        "Failed to create expiring paste",
        client.create_paste(
            "Temporary Code Snippet",
            "// This paste will expire in 60 minutes\nconsole.log('Temporary message');",
            PasteOptions::new()
                .language("javascript")
                .expires_in(60)
                .visibility(Visibility::Public),
        ),
    )?
    .and_then(CmdResult::into_paste);
    if let Some(expiring) = expiring {
        ok(out, "Expiring paste created successfully")?;
        write!(out, "{}", render_paste(&expiring))?;
    }

    step(out, 5, "Retrieving the simple paste")?;
    let retrieved = report(
        out,
        "Failed to retrieve paste",
        client.get_paste(&simple.id, None),
    )?
    .and_then(CmdResult::into_paste);
    if let Some(retrieved) = retrieved {
        ok(out, "Paste retrieved successfully")?;
        writeln!(out, "View count increased to: {}", retrieved.view_count)?;
    }

    step(out, 6, "Attempting to retrieve protected paste without password")?;
    match client.get_paste(&protected.id, None) {
        Err(e) if e.is_access_denied() => ok(out, "Correctly denied access without password")?,
        Err(e) => {
            report::<()>(out, "Retrieval failed for another reason", Err(e))?;
        }
        Ok(_) => fail(out, "Protected paste was returned without a password")?,
    }

    step(out, 7, "Retrieving protected paste with password")?;
    let unlocked = report(
        out,
        "Failed to retrieve protected paste",
        client.get_paste(&protected.id, Some(PROTECTED_PASSWORD)),
    )?;
    if unlocked.is_some() {
        ok(out, "Protected paste retrieved successfully with password")?;
    }

    step(out, 8, "Updating the simple paste")?;
    let update = PasteUpdate::new()
        .title("Updated Hello World Example")
        .content(r#"print("Hello, Updated World from Python!")"#);
    let updated = report(
        out,
        "Failed to update paste",
        client.update_paste(&simple.id, &update),
    )?
    .and_then(CmdResult::into_paste);
    if let Some(updated) = updated {
        ok(out, "Paste updated successfully")?;
        writeln!(out, "New title: {}", updated.title)?;
    }

    step(out, 9, "Searching for Python pastes")?;
    let found = report(
        out,
        "Search failed",
        client.search_pastes("Python", 0, Some(5)),
    )?
    .and_then(|r| r.page);
    if let Some(page) = found.filter(|p| !p.is_empty()) {
        ok(out, &format!("Found {} Python-related pastes", page.len()))?;
        for paste in page.content.iter().take(2) {
            write!(out, "{}", render_paste(paste))?;
        }
    }

    step(out, 10, "Getting JavaScript pastes")?;
    let js = report(
        out,
        "Failed to list javascript pastes",
        client.list_by_language("javascript", 0, Some(3)),
    )?
    .and_then(|r| r.page);
    if let Some(page) = js.filter(|p| !p.is_empty()) {
        ok(out, &format!("Found {} JavaScript pastes", page.len()))?;
    }

    step(out, 11, "Getting recent public pastes")?;
    let public = report(
        out,
        "Failed to list public pastes",
        client.list_public_pastes(0, Some(5)),
    )?
    .and_then(|r| r.page);
    if let Some(page) = public.filter(|p| !p.is_empty()) {
        ok(out, &format!("Retrieved {} public pastes", page.len()))?;
        writeln!(out, "Total public pastes: {}", page.total_elements)?;
    }

    step(out, 12, "Getting service statistics")?;
    let stats = report(out, "Failed to get statistics", client.get_statistics())?
        .and_then(|r| r.statistics);
    if let Some(stats) = stats {
        ok(out, "Statistics retrieved successfully")?;
        write!(out, "{}", render_statistics(&stats, 5))?;
    }

    step(out, 13, "Cleaning up test pastes")?;
    if deleted(out, client, &simple.id)? {
        ok(out, "Simple paste deleted")?;
    }
    if deleted(out, client, &protected.id)? {
        ok(out, "Protected paste deleted")?;
    }

    writeln!(out)?;
    ok(out, "Example completed successfully!")?;
    Ok(())
}

fn deleted<B: Backend>(out: &mut dyn Write, client: &PasteClient<B>, id: &str) -> Result<bool> {
    Ok(report(out, "Failed to delete paste", client.delete_paste(id))?.is_some())
}

/// Prints a failed operation and turns it into `None` so the tour can
/// carry on. Write errors on `out` still propagate.
fn report<T>(out: &mut dyn Write, what: &str, result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            log::warn!("{}: {}", what, e);
            fail(out, &format!("{}: {}", what, e))?;
            if let Some(body) = e.body() {
                writeln!(out, "Response: {}", body)?;
            }
            Ok(None)
        }
    }
}

fn step(out: &mut dyn Write, number: u32, title: &str) -> Result<()> {
    if number > 1 {
        writeln!(out)?;
    }
    writeln!(out, "{}", format!("{}. {}", number, title).bold())?;
    Ok(())
}

fn ok(out: &mut dyn Write, message: &str) -> Result<()> {
    writeln!(out, "{} {}", "✓".green(), message)?;
    Ok(())
}

fn fail(out: &mut dyn Write, message: &str) -> Result<()> {
    writeln!(out, "{} {}", "✗".red(), message)?;
    Ok(())
}
