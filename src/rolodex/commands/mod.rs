pub mod add;
pub mod append;
pub mod change;
pub mod delete;
pub mod find;
pub mod helpers;
pub mod misc;
pub mod phone;
pub mod remove;
pub mod seek;
pub mod show;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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

/// What a command hands back to the UI: record lines to list, leveled
/// messages, and whether the session should end.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_records: Vec<String>,
    pub messages: Vec<CmdMessage>,
    pub terminate: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(message: CmdMessage) -> Self {
        let mut result = Self::default();
        result.add_message(message);
        result
    }

    pub fn with_listed_records(mut self, records: Vec<String>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn terminating(mut self) -> Self {
        self.terminate = true;
        self
    }
}
