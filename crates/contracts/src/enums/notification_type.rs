use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Warning,
    #[default]
    Info,
    Success,
    Danger,
}

impl NotificationType {
    pub fn code(&self) -> &'static str {
        match self {
            NotificationType::Warning => "warning",
            NotificationType::Info => "info",
            NotificationType::Success => "success",
            NotificationType::Danger => "danger",
        }
    }
}
