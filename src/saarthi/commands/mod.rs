use crate::model::{PropertyId, PropertyRecord};

pub mod favorites;
pub mod search;
pub mod view;

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

/// Structured result of a command, free of any I/O or formatting.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_properties: Vec<PropertyRecord>,
    pub favorite_ids: Vec<PropertyId>,
    /// Post-mutation membership after a favorite toggle.
    pub favorite_state: Option<bool>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_properties(mut self, properties: Vec<PropertyRecord>) -> Self {
        self.listed_properties = properties;
        self
    }

    pub fn with_favorite_ids(mut self, ids: Vec<PropertyId>) -> Self {
        self.favorite_ids = ids;
        self
    }

    pub fn with_favorite_state(mut self, state: bool) -> Self {
        self.favorite_state = Some(state);
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}
