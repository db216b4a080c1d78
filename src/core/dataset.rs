use std::collections::HashSet;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::LEADERBOARD_SLOT_ID;
use crate::error::{ChartError, ChartResult};

/// One benchmarked model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,
    pub display_name: String,
    pub provider: String,
    pub overall_score: f64,
}

impl Model {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        provider: impl Into<String>,
        overall_score: f64,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            provider: provider.into(),
            overall_score,
        }
    }
}

/// One evaluation category with partial per-model scores.
///
/// `model_scores` keeps source order so snapshots stay deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub model_scores: IndexMap<String, f64>,
}

impl Evaluation {
    #[must_use]
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            model_scores: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_score(mut self, model_id: impl Into<String>, score: f64) -> Self {
        self.model_scores.insert(model_id.into(), score);
        self
    }

    #[must_use]
    pub fn score_for(&self, model_id: &str) -> Option<f64> {
        self.model_scores.get(model_id).copied()
    }
}

/// Aggregate figures shown in the page header. Never used for rendering.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DatasetMetadata {
    pub total_models: Option<usize>,
    pub total_evaluations: Option<usize>,
    pub average_score: Option<f64>,
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
struct DatasetPayload {
    #[serde(default)]
    metadata: DatasetMetadata,
    #[serde(default)]
    models: Vec<Model>,
    #[serde(default)]
    evaluations: Vec<Evaluation>,
}

/// Immutable, validated benchmark dataset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    metadata: DatasetMetadata,
    models: Vec<Model>,
    evaluations: Vec<Evaluation>,
}

impl Dataset {
    /// Builds a dataset after validating ids and score ranges.
    pub fn new(models: Vec<Model>, evaluations: Vec<Evaluation>) -> ChartResult<Self> {
        Self::with_metadata(DatasetMetadata::default(), models, evaluations)
    }

    pub fn with_metadata(
        metadata: DatasetMetadata,
        models: Vec<Model>,
        evaluations: Vec<Evaluation>,
    ) -> ChartResult<Self> {
        validate_dataset(&models, &evaluations)?;
        debug!(
            models = models.len(),
            evaluations = evaluations.len(),
            "dataset validated"
        );
        Ok(Self {
            metadata,
            models,
            evaluations,
        })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Decodes the camelCase JSON payload produced by the data endpoint.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let payload: DatasetPayload = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse dataset json: {e}")))?;
        Self::with_metadata(payload.metadata, payload.models, payload.evaluations)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        let payload = DatasetPayload {
            metadata: self.metadata.clone(),
            models: self.models.clone(),
            evaluations: self.evaluations.clone(),
        };
        serde_json::to_string_pretty(&payload)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize dataset: {e}")))
    }

    #[must_use]
    pub fn metadata(&self) -> &DatasetMetadata {
        &self.metadata
    }

    #[must_use]
    pub fn models(&self) -> &[Model] {
        &self.models
    }

    #[must_use]
    pub fn evaluations(&self) -> &[Evaluation] {
        &self.evaluations
    }

    #[must_use]
    pub fn model(&self, id: &str) -> Option<&Model> {
        self.models.iter().find(|model| model.id == id)
    }

    #[must_use]
    pub fn evaluation(&self, id: &str) -> Option<&Evaluation> {
        self.evaluations.iter().find(|evaluation| evaluation.id == id)
    }

    #[must_use]
    pub fn contains_model(&self, id: &str) -> bool {
        self.model(id).is_some()
    }

    pub fn model_ids(&self) -> impl Iterator<Item = &str> {
        self.models.iter().map(|model| model.id.as_str())
    }
}

fn validate_dataset(models: &[Model], evaluations: &[Evaluation]) -> ChartResult<()> {
    let mut model_ids = HashSet::with_capacity(models.len());
    for model in models {
        if model.id.is_empty() {
            return Err(ChartError::InvalidData(
                "model id must not be empty".to_owned(),
            ));
        }
        if !model_ids.insert(model.id.as_str()) {
            return Err(ChartError::InvalidData(format!(
                "duplicate model id `{}`",
                model.id
            )));
        }
        validate_score(model.overall_score, || {
            format!("overall score of model `{}`", model.id)
        })?;
    }

    let mut evaluation_ids = HashSet::with_capacity(evaluations.len());
    for evaluation in evaluations {
        if evaluation.id.is_empty() {
            return Err(ChartError::InvalidData(
                "evaluation id must not be empty".to_owned(),
            ));
        }
        if evaluation.id == LEADERBOARD_SLOT_ID {
            return Err(ChartError::InvalidData(format!(
                "evaluation id `{LEADERBOARD_SLOT_ID}` is reserved for the leaderboard slot"
            )));
        }
        if !evaluation_ids.insert(evaluation.id.as_str()) {
            return Err(ChartError::InvalidData(format!(
                "duplicate evaluation id `{}`",
                evaluation.id
            )));
        }
        for (model_id, score) in &evaluation.model_scores {
            if !model_ids.contains(model_id.as_str()) {
                return Err(ChartError::InvalidData(format!(
                    "evaluation `{}` scores unknown model `{model_id}`",
                    evaluation.id
                )));
            }
            validate_score(*score, || {
                format!("score of model `{model_id}` in `{}`", evaluation.id)
            })?;
        }
    }

    Ok(())
}

fn validate_score(score: f64, field: impl FnOnce() -> String) -> ChartResult<()> {
    if !score.is_finite() || !(0.0..=1.0).contains(&score) {
        return Err(ChartError::InvalidData(format!(
            "{} must be finite and in [0, 1]",
            field()
        )));
    }
    Ok(())
}
