use std::fmt;

use crate::global_constants;

/// Named display areas an operation is allowed to overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Results,
    SearchMessage,
    UploadMessage,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::SearchMessage, Region::Results, Region::UploadMessage];

    pub fn id(&self) -> &'static str {
        match self {
            Region::Results => global_constants::REGION_ID_RESULTS,
            Region::SearchMessage => global_constants::REGION_ID_SEARCH_MESSAGE,
            Region::UploadMessage => global_constants::REGION_ID_UPLOAD_MESSAGE,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
    Info,
}

impl MessageKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            MessageKind::Success => "success-message",
            MessageKind::Error => "error-message",
            MessageKind::Info => "loading",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayMessage {
    pub target_region: Region,
    pub text: String,
    pub kind: MessageKind,
}

impl DisplayMessage {
    pub fn new(target_region: Region, text: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            target_region,
            text: text.into(),
            kind,
        }
    }
}
