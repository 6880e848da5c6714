//! # SecurePaste Client Architecture
//!
//! SecurePaste is a paste-sharing web service; this crate is a **UI-agnostic client
//! library** for its HTTP+JSON API, plus a small CLI that happens to use it. All durable
//! behavior (storage, passwords, expiry, search, statistics) lives in the service. The
//! library builds requests, checks statuses and decodes responses into typed values.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output, runs the guided tour   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - PasteClient: thin facade over commands                   │
//! │  - Fills in default page sizes                              │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation                                 │
//! │  - Validates input, builds the request, decodes the reply   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Backend Layer (backend/)                                   │
//! │  - Abstract Backend trait: one request, one response        │
//! │  - HttpBackend (production), MemoryBackend (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr (diagnostics go through `log`)
//! - **Never** calls `std::process::exit`
//!
//! Failures are typed [`error::PasteError`]s that keep the HTTP status and the
//! service's response body. Whether to stop or report-and-continue is the caller's call.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): request shape and response handling, run
//!    against `MemoryBackend`. Most tests live here.
//! 2. **Backends**: `MemoryBackend` is tested as a service; `HttpBackend` is tested
//!    on the wire against a `mockito` server.
//! 3. **API** (`api.rs`): dispatch tests, checking which request each method sends.
//! 4. **CLI** (`cli/` + `tests/`): argument parsing, rendering of canned results, and
//!    end-to-end runs of the binary against a mock service.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`backend`]: Transport abstraction and implementations
//! - [`model`]: Wire types (`Paste`, `Page`, `Statistics`) and request bodies
//! - [`config`]: Client configuration
//! - [`error`]: Error types
//! - `cli`: Argument parsing, rendering and the guided tour for the binary (not part of the lib API)

pub mod api;
pub mod backend;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
