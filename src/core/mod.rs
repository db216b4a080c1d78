pub mod color;
pub mod dataset;
pub mod evaluation_kind;
pub mod slot;

pub use color::{
    ColorPolicy, HslaColor, MODEL_PALETTE, NamedColor, palette_color, score_linear_color,
};
pub use dataset::{Dataset, DatasetMetadata, Evaluation, Model};
pub use evaluation_kind::{
    EvaluationKind, EvaluationKindTable, THEOLOGICAL_ORIENTATION_EVALUATION_ID,
};
pub use slot::{LEADERBOARD_SLOT_ID, SlotId};
