use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::SlotId;
use crate::error::{ChartError, ChartResult};
use crate::render::{BarOrientation, Color};

/// Tooltip lines for one bar; standard and diverging charts both use two.
pub type TooltipLines = SmallVec<[String; 2]>;

/// Tooltip formatter family the drawing primitive should mimic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TooltipKind {
    /// `"Score: P%"` / `"Provider: X"`.
    Score,
    /// `"Progressive: P%"` / `"Conservative: C%"`.
    Diverging,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub axis_min: f64,
    pub axis_max: f64,
    pub orientation: BarOrientation,
    pub stacked: bool,
    pub tooltip: TooltipKind,
}

impl ChartOptions {
    /// Horizontal single-series bars on a [0, 1] score axis.
    #[must_use]
    pub const fn unit_score() -> Self {
        Self {
            axis_min: 0.0,
            axis_max: 1.0,
            orientation: BarOrientation::Horizontal,
            stacked: false,
            tooltip: TooltipKind::Score,
        }
    }

    /// Horizontal stacked bars on a [0, 100] share axis.
    #[must_use]
    pub const fn diverging_percent() -> Self {
        Self {
            axis_min: 0.0,
            axis_max: 100.0,
            orientation: BarOrientation::Horizontal,
            stacked: true,
            tooltip: TooltipKind::Diverging,
        }
    }
}

/// One dataset of a chart: one value and one fill color per label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub label: String,
    pub data: Vec<f64>,
    pub background_colors: Vec<Color>,
    pub stack: Option<String>,
}

impl ChartSeries {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            data: Vec::new(),
            background_colors: Vec::new(),
            stack: None,
        }
    }

    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    pub fn push(&mut self, value: f64, color: Color) {
        self.data.push(value);
        self.background_colors.push(color);
    }
}

/// Backend-agnostic description of one bar chart, handed to the drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub slot: SlotId,
    pub title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<ChartSeries>,
    pub options: ChartOptions,
    pub tooltips: Vec<TooltipLines>,
}

impl ChartSpec {
    #[must_use]
    pub fn new(slot: SlotId, title: impl Into<String>, options: ChartOptions) -> Self {
        Self {
            slot,
            title: title.into(),
            labels: Vec::new(),
            datasets: Vec::new(),
            options,
            tooltips: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_series(mut self, series: ChartSeries) -> Self {
        self.datasets.push(series);
        self
    }

    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Looks up a series by its label.
    #[must_use]
    pub fn series(&self, label: &str) -> Option<&ChartSeries> {
        self.datasets.iter().find(|series| series.label == label)
    }

    pub fn validate(&self) -> ChartResult<()> {
        let options = self.options;
        if !options.axis_min.is_finite()
            || !options.axis_max.is_finite()
            || options.axis_min >= options.axis_max
        {
            return Err(ChartError::InvalidData(format!(
                "chart `{}` axis bounds must be finite with min < max",
                self.slot
            )));
        }
        if self.tooltips.len() != self.labels.len() {
            return Err(ChartError::InvalidData(format!(
                "chart `{}` has {} tooltips for {} labels",
                self.slot,
                self.tooltips.len(),
                self.labels.len()
            )));
        }

        for series in &self.datasets {
            if series.data.len() != self.labels.len()
                || series.background_colors.len() != self.labels.len()
            {
                return Err(ChartError::InvalidData(format!(
                    "series `{}` of chart `{}` must have one value and color per label",
                    series.label, self.slot
                )));
            }
            for value in &series.data {
                if !value.is_finite() || *value < options.axis_min || *value > options.axis_max {
                    return Err(ChartError::InvalidData(format!(
                        "series `{}` of chart `{}` has value {value} outside axis bounds",
                        series.label, self.slot
                    )));
                }
            }
            for color in &series.background_colors {
                color.validate()?;
            }
        }

        Ok(())
    }
}
