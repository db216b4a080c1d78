use std::fmt;

use serde::{Deserialize, Serialize};

pub const LEADERBOARD_SLOT_ID: &str = "leaderboard";

/// Render target of one chart: the leaderboard or one evaluation category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SlotId {
    Leaderboard,
    Evaluation(String),
}

impl SlotId {
    #[must_use]
    pub fn evaluation(id: impl Into<String>) -> Self {
        Self::Evaluation(id.into())
    }

    #[must_use]
    pub fn is_leaderboard(&self) -> bool {
        matches!(self, Self::Leaderboard)
    }

    /// Id of the canvas element hosting this slot's chart.
    #[must_use]
    pub fn canvas_id(&self) -> String {
        match self {
            Self::Leaderboard => format!("{LEADERBOARD_SLOT_ID}-chart"),
            Self::Evaluation(id) => format!("{id}-chart"),
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaderboard => f.write_str(LEADERBOARD_SLOT_ID),
            Self::Evaluation(id) => f.write_str(id),
        }
    }
}
