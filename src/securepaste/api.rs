//! # API Facade
//!
//! `PasteClient` is the single entry point for every SecurePaste operation.
//! It is a thin facade: each method dispatches to one function in
//! `commands/*.rs` and hands back a `Result<CmdResult>`.
//!
//! The facade does not print, exit or retry. Failures come back as typed
//! [`PasteError`](crate::error::PasteError)s carrying the HTTP status and raw
//! body, and the CLI decides whether to report-and-continue or stop.
//!
//! ## Generic Over Backend
//!
//! `PasteClient<B: Backend>` is generic over the transport:
//! - Production: `PasteClient<HttpBackend>`, built with [`PasteClient::connect`]
//! - Testing: `PasteClient<MemoryBackend>` (or `&MemoryBackend`)
//!
//! Tests at this layer check dispatch only: that each method produces the
//! right request. Request semantics are tested in the command modules.

use crate::backend::http::HttpBackend;
use crate::backend::Backend;
use crate::commands;
use crate::config::{ClientConfig, DEFAULT_PAGE_SIZE};
use crate::error::Result;
use crate::model::{NewPaste, PasteOptions, PasteUpdate};
use std::path::Path;

pub struct PasteClient<B: Backend> {
    backend: B,
    page_size: u32,
}

impl PasteClient<HttpBackend> {
    /// Builds a client that talks HTTP to `config.base_url`.
    pub fn connect(config: &ClientConfig) -> Result<Self> {
        let backend = HttpBackend::new(config)?;
        Ok(Self {
            backend,
            page_size: config.page_size,
        })
    }
}

impl<B: Backend> PasteClient<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = size.max(1);
        self
    }

    pub fn describe(&self) -> String {
        self.backend.describe()
    }

    pub fn create_paste(
        &self,
        title: &str,
        content: &str,
        options: PasteOptions,
    ) -> Result<commands::CmdResult> {
        commands::create::run(&self.backend, NewPaste::new(title, content, options))
    }

    pub fn get_paste(&self, id: &str, password: Option<&str>) -> Result<commands::CmdResult> {
        commands::get::run(&self.backend, id, password)
    }

    pub fn update_paste(&self, id: &str, update: &PasteUpdate) -> Result<commands::CmdResult> {
        commands::update::run(&self.backend, id, update)
    }

    pub fn delete_paste(&self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&self.backend, id)
    }

    pub fn list_public_pastes(&self, page: u32, size: Option<u32>) -> Result<commands::CmdResult> {
        commands::list::public(&self.backend, page, self.size_or_default(size))
    }

    pub fn list_recent_pastes(&self, page: u32, size: Option<u32>) -> Result<commands::CmdResult> {
        commands::list::recent(&self.backend, page, self.size_or_default(size))
    }

    pub fn search_pastes(
        &self,
        query: &str,
        page: u32,
        size: Option<u32>,
    ) -> Result<commands::CmdResult> {
        commands::search::run(&self.backend, query, page, self.size_or_default(size))
    }

    pub fn list_by_language(
        &self,
        language: &str,
        page: u32,
        size: Option<u32>,
    ) -> Result<commands::CmdResult> {
        commands::list::by_language(&self.backend, language, page, self.size_or_default(size))
    }

    pub fn get_statistics(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.backend)
    }

    /// `true` only when the service reports `UP`. Never fails.
    pub fn health_check(&self) -> bool {
        commands::health::check(&self.backend)
    }

    pub fn health_status(&self) -> Result<commands::CmdResult> {
        commands::health::probe(&self.backend)
    }

    fn size_or_default(&self, size: Option<u32>) -> u32 {
        size.unwrap_or(self.page_size)
    }
}

/// Shows or changes the stored client configuration.
pub fn config(config_dir: &Path, action: ConfigAction) -> Result<commands::CmdResult> {
    commands::config::run(config_dir, action)
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
