//! # CLI Behavior
//!
//! This is **one possible UI client** for securepaste, not the library itself.
//! The CLI is the only place that knows about terminal I/O, exit codes and output formatting.
//!
//! For the overall architecture, see the crate-level documentation of the `securepaste` library.
//!
//! ## Naked Execution (`securepaste`)
//!
//! Running `securepaste` with no subcommand runs the guided tour (`securepaste demo`).
//!
//! ## Where the Service Lives
//!
//! The service URL is resolved once per invocation, lowest to highest priority:
//! built-in default (`http://localhost:8080`), `config.json`, `SECUREPASTE_URL`, `--url`.
//! `securepaste config base-url <URL>` stores it.
//!
//! ## Failures
//!
//! Single commands stop at the first error: `Error: ...` on stderr (plus the
//! service's response body, when there is one) and exit code 1. The tour
//! reports failures and keeps going, except for the opening health check.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print output
//! - `demo`: The guided tour
//! - `render`: Output formatting (blocks, rows, colors)
//! - `setup`: Argument parsing via clap

mod commands;
mod demo;
mod render;
pub mod setup;

pub use commands::run;
