use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_TOP_K: usize = 15;

/// Expand/collapse state of the leaderboard slot.
///
/// `Collapsed -> Expanded` happens only through an explicit show-all request
/// while truncation is active. `Expanded -> Collapsed` happens only when the
/// selection changes; there is no user transition back within one selection
/// epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LeaderboardView {
    #[default]
    Collapsed,
    Expanded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) struct LeaderboardViewState {
    view: LeaderboardView,
}

impl LeaderboardViewState {
    #[must_use]
    pub(super) fn view(self) -> LeaderboardView {
        self.view
    }

    pub(super) fn on_selection_changed(&mut self) {
        if self.view == LeaderboardView::Expanded {
            debug!("selection changed, collapsing leaderboard");
        }
        self.view = LeaderboardView::Collapsed;
    }

    /// Enters `Expanded` when the affordance is on offer. Returns `true` on transition.
    pub(super) fn request_show_all(&mut self, filtered_count: usize, top_k: usize) -> bool {
        if self.view == LeaderboardView::Collapsed && filtered_count > top_k {
            self.view = LeaderboardView::Expanded;
            return true;
        }
        false
    }

    #[must_use]
    pub(super) fn truncates(self, filtered_count: usize, top_k: usize) -> bool {
        self.view == LeaderboardView::Collapsed && filtered_count > top_k
    }
}

/// Leaderboard truncation output consumed by page chrome.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LeaderboardChrome {
    /// `"Showing top K of N models"` while truncated, empty otherwise.
    pub note: String,
    pub show_all_visible: bool,
}

impl LeaderboardChrome {
    #[must_use]
    pub fn truncated(shown: usize, total: usize) -> Self {
        Self {
            note: format!("Showing top {shown} of {total} models"),
            show_all_visible: true,
        }
    }

    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.show_all_visible
    }
}
