//! Per-process selection state.

use crate::error::Precondition;

/// The movie the user is currently inspecting.
///
/// Starts as `NoSelection`; a successful selection moves it to (or replaces)
/// `Selected`. Nothing moves it back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    NoSelection,
    Selected(String),
}

impl SessionState {
    pub fn select(&mut self, title: impl Into<String>) {
        *self = Self::Selected(title.into());
    }

    pub fn selected(&self) -> Option<&str> {
        match self {
            Self::NoSelection => None,
            Self::Selected(title) => Some(title),
        }
    }

    /// The selected title, or the precondition guarded operations report.
    pub fn require_selection(&self) -> Result<&str, Precondition> {
        self.selected().ok_or(Precondition::NoSelection)
    }
}
