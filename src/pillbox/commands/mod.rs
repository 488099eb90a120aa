use crate::config::PillboxConfig;
use crate::model::{Drawer, Medicine};
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod export;
pub mod helpers;
pub mod import;
pub mod init;
pub mod list;
pub mod remove;
pub mod search;

#[derive(Debug, Clone)]
pub struct PillboxPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone)]
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
    pub affected_medicines: Vec<Medicine>,
    pub listed_medicines: Vec<Medicine>,
    pub listed_drawers: Vec<Drawer>,
    pub export_path: Option<PathBuf>,
    pub config: Option<PillboxConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_medicines(mut self, medicines: Vec<Medicine>) -> Self {
        self.affected_medicines = medicines;
        self
    }

    pub fn with_listed_medicines(mut self, medicines: Vec<Medicine>) -> Self {
        self.listed_medicines = medicines;
        self
    }

    pub fn with_listed_drawers(mut self, drawers: Vec<Drawer>) -> Self {
        self.listed_drawers = drawers;
        self
    }

    pub fn with_export_path(mut self, path: PathBuf) -> Self {
        self.export_path = Some(path);
        self
    }

    pub fn with_config(mut self, config: PillboxConfig) -> Self {
        self.config = Some(config);
        self
    }
}
