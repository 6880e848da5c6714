use crate::config::ClientConfig;
use crate::model::{HealthStatus, Page, Paste, Statistics};

pub mod config;
pub mod create;
pub mod delete;
pub mod get;
pub mod health;
pub mod helpers;
pub mod list;
pub mod search;
pub mod stats;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub pastes: Vec<Paste>,
    pub page: Option<Page<Paste>>,
    pub statistics: Option<Statistics>,
    pub health: Option<HealthStatus>,
    pub config: Option<ClientConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_paste(mut self, paste: Paste) -> Self {
        self.pastes.push(paste);
        self
    }

    pub fn with_page(mut self, page: Page<Paste>) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_statistics(mut self, statistics: Statistics) -> Self {
        self.statistics = Some(statistics);
        self
    }

    pub fn with_health(mut self, health: HealthStatus) -> Self {
        self.health = Some(health);
        self
    }

    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// The paste a single-paste command produced, if any.
    pub fn paste(&self) -> Option<&Paste> {
        self.pastes.first()
    }

    pub fn into_paste(self) -> Option<Paste> {
        self.pastes.into_iter().next()
    }
}
