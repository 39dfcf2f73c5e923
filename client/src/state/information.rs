//! Information page state.

#[cfg(test)]
#[path = "information_test.rs"]
mod information_test;

use catalog::InformationBoard;
use catalog::info::{InfoItem, InfoTab};

#[derive(Clone, Debug, Default)]
pub struct InformationState {
    pub loading: bool,
    pub error: Option<String>,
    pub board: Option<InformationBoard>,
    pub tab: InfoTab,
    pub selected: Option<InfoItem>,
}

impl InformationState {
    #[must_use]
    pub fn new() -> Self {
        Self { loading: true, ..Self::default() }
    }

    pub fn finish(&mut self, result: Result<InformationBoard, String>) {
        self.loading = false;
        match result {
            Ok(board) => {
                self.board = Some(board);
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
    }

    /// Cards for the active tab; empty until the board arrives.
    #[must_use]
    pub fn items(&self) -> Vec<InfoItem> {
        self.board.as_ref().map(|b| b.items(self.tab)).unwrap_or_default()
    }

    /// Notice shown when part of the board could not be fetched.
    #[must_use]
    pub fn unavailable_notice(&self) -> Option<String> {
        let board = self.board.as_ref()?;
        if board.unavailable.is_empty() {
            return None;
        }
        let names: Vec<String> = board.unavailable.iter().map(|c| c.replace('_', " ")).collect();
        Some(format!("Some information is temporarily unavailable ({}).", names.join(", ")))
    }
}

/// Empty-state line for a tab with no cards.
#[must_use]
pub fn empty_message(tab: InfoTab) -> &'static str {
    match tab {
        InfoTab::Deals => "No active deals at the moment.",
        InfoTab::Events => "No events scheduled.",
        InfoTab::Policies => "No policies listed.",
        InfoTab::Alerts => "No inventory alerts. Everything is in stock.",
    }
}
