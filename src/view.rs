use crate::select::{argmax, select_above};
use crate::transform::{exponential_sum, SigmoidStep, SoftmaxStep, Step, Steps};
use serde::Serialize;

/// Charts never zoom in tighter than `[-5, 5]`.
pub const MIN_DOMAIN_EXTENT: f64 = 5.0;

/// Symmetric axis range for a bar chart centred on zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartDomain {
    pub min: f64,
    pub max: f64,
}

impl ChartDomain {
    /// `[-m, m]` with `m = max(5, max |x|)`. `NaN` values are ignored.
    #[must_use]
    pub fn symmetric(values: impl IntoIterator<Item = f64>) -> Self {
        let extent = values
            .into_iter()
            .map(f64::abs)
            .fold(MIN_DOMAIN_EXTENT, f64::max);
        Self {
            min: -extent,
            max: extent,
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Visualization {
    pub steps: Steps,
    pub threshold: f64,
    /// Softmax only.
    pub exponential_sum: Option<f64>,
    /// Sigmoid only: steps at or above the threshold.
    pub selected: Vec<SigmoidStep>,
    /// Softmax only: the most probable step.
    pub winner: Option<SoftmaxStep>,
    pub logit_domain: ChartDomain,
    pub scaled_domain: ChartDomain,
}

impl Visualization {
    #[must_use]
    pub fn new(steps: Steps, threshold: f64) -> Self {
        let (logit_domain, scaled_domain) = match &steps {
            Steps::Softmax(s) => domains(s),
            Steps::Sigmoid(s) => domains(s),
        };
        let (exponential_sum, selected, winner) = match &steps {
            Steps::Softmax(s) => (Some(exponential_sum(s)), Vec::new(), argmax(s).cloned()),
            Steps::Sigmoid(s) => (
                None,
                select_above(s, threshold).into_iter().cloned().collect(),
                None,
            ),
        };

        Self {
            steps,
            threshold,
            exponential_sum,
            selected,
            winner,
            logit_domain,
            scaled_domain,
        }
    }

    #[must_use]
    pub fn selected_labels(&self) -> Vec<&str> {
        self.selected.iter().map(|s| s.label.as_str()).collect()
    }
}

fn domains<S: Step>(steps: &[S]) -> (ChartDomain, ChartDomain) {
    (
        ChartDomain::symmetric(steps.iter().map(Step::original_logit)),
        ChartDomain::symmetric(steps.iter().map(Step::scaled_logit)),
    )
}
