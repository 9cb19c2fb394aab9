use serde::Serialize;

/// Placeholder shown when a list has nothing to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl EmptyState {
    pub fn new(
        icon: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}
