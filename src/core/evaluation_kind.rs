use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Evaluation id drawn as a progressive/conservative diverging bar by default.
pub const THEOLOGICAL_ORIENTATION_EVALUATION_ID: &str = "theological_orientation";

/// Rendering variant of one evaluation slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EvaluationKind {
    /// One bar per model using the raw [0, 1] score.
    #[default]
    Standard,
    /// Two stacked segments on a [0, 100] scale.
    ///
    /// With `invert = true` the leading segment is `(1 - score) * 100`, so a
    /// low raw score yields a large leading share.
    Diverging { invert: bool },
}

/// Lookup from evaluation id to its rendering variant.
///
/// Ids absent from the table render as `EvaluationKind::Standard`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EvaluationKindTable {
    kinds: IndexMap<String, EvaluationKind>,
}

impl EvaluationKindTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_diverging_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for id in ids {
            table.insert(id, EvaluationKind::Diverging { invert: true });
        }
        table
    }

    pub fn insert(&mut self, evaluation_id: impl Into<String>, kind: EvaluationKind) {
        self.kinds.insert(evaluation_id.into(), kind);
    }

    #[must_use]
    pub fn kind_of(&self, evaluation_id: &str) -> EvaluationKind {
        self.kinds.get(evaluation_id).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
