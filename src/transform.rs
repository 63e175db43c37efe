use crate::entry::Entry;
use crate::scale::{effective_temperature, scale};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Which activation turns scaled logits into probabilities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Normalized exponential: one class wins.
    #[default]
    Softmax,
    /// Independent logistic: any number of classes may apply.
    Sigmoid,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Softmax => f.write_str("softmax"),
            Self::Sigmoid => f.write_str("sigmoid"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "softmax" => Ok(Self::Softmax),
            "sigmoid" => Ok(Self::Sigmoid),
            other => Err(format!("unknown mode '{other}', expected softmax or sigmoid")),
        }
    }
}

/// How the softmax denominator is formed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// `exp(x) / Σ exp(x)` exactly as written. Large logits overflow to
    /// `inf` and the probabilities become `NaN`.
    #[default]
    Literal,
    /// Subtract the largest scaled logit before exponentiating. Identical
    /// probabilities for representable inputs, finite ones for huge logits.
    MaxShift,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoftmaxStep {
    pub id: String,
    pub label: String,
    pub color: String,
    pub original_logit: f64,
    pub scaled_logit: f64,
    pub exponential: f64,
    pub probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SigmoidStep {
    pub id: String,
    pub label: String,
    pub color: String,
    pub original_logit: f64,
    pub scaled_logit: f64,
    pub probability: f64,
}

/// Result of one pass, tagged by the activation that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", content = "steps", rename_all = "lowercase")]
pub enum Steps {
    Softmax(Vec<SoftmaxStep>),
    Sigmoid(Vec<SigmoidStep>),
}

/// Shared read access to either step type.
pub trait Step {
    fn original_logit(&self) -> f64;
    fn scaled_logit(&self) -> f64;
    fn probability(&self) -> f64;
}

macro_rules! impl_step {
    ($ty:ty) => {
        impl Step for $ty {
            fn original_logit(&self) -> f64 {
                self.original_logit
            }
            fn scaled_logit(&self) -> f64 {
                self.scaled_logit
            }
            fn probability(&self) -> f64 {
                self.probability
            }
        }
    };
}

impl_step!(SoftmaxStep);
impl_step!(SigmoidStep);

impl Steps {
    #[must_use]
    pub const fn mode(&self) -> Mode {
        match self {
            Self::Softmax(_) => Mode::Softmax,
            Self::Sigmoid(_) => Mode::Sigmoid,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Softmax(steps) => steps.len(),
            Self::Sigmoid(steps) => steps.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn probabilities(&self) -> Vec<f64> {
        match self {
            Self::Softmax(steps) => steps.iter().map(|s| s.probability).collect(),
            Self::Sigmoid(steps) => steps.iter().map(|s| s.probability).collect(),
        }
    }

    #[must_use]
    pub fn as_softmax(&self) -> Option<&[SoftmaxStep]> {
        match self {
            Self::Softmax(steps) => Some(steps),
            Self::Sigmoid(_) => None,
        }
    }

    #[must_use]
    pub fn as_sigmoid(&self) -> Option<&[SigmoidStep]> {
        match self {
            Self::Sigmoid(steps) => Some(steps),
            Self::Softmax(_) => None,
        }
    }
}

/// Logistic function `1 / (1 + e^-x)`.
#[must_use]
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Run the transform selected by `mode` with literal softmax normalization.
#[must_use]
pub fn compute(entries: &[Entry], temperature: f64, mode: Mode) -> Steps {
    compute_with(entries, temperature, mode, Normalization::Literal)
}

#[must_use]
pub fn compute_with(
    entries: &[Entry],
    temperature: f64,
    mode: Mode,
    normalization: Normalization,
) -> Steps {
    debug!(
        entries = entries.len(),
        temperature,
        effective_temperature = effective_temperature(temperature),
        %mode,
        "recomputing steps"
    );
    if temperature == 0.0 {
        debug!("temperature is zero, scaling with the substitute divisor instead");
    }

    match mode {
        Mode::Softmax => Steps::Softmax(softmax_steps_with(entries, temperature, normalization)),
        Mode::Sigmoid => Steps::Sigmoid(sigmoid_steps(entries, temperature)),
    }
}

/// Scale, exponentiate, sum and normalize. One step per entry, in order.
///
/// No stabilization is applied: scaled logits above ~709 overflow `exp` to
/// infinity and the affected probabilities come out as `NaN`. An empty slice
/// yields an empty result.
#[must_use]
pub fn softmax_steps(entries: &[Entry], temperature: f64) -> Vec<SoftmaxStep> {
    softmax_steps_with(entries, temperature, Normalization::Literal)
}

/// [`softmax_steps`] with an explicit normalization strategy.
///
/// Under [`Normalization::MaxShift`] the reported `exponential` is still
/// `exp(scaled_logit)`; only the probabilities use the shifted exponentials.
#[must_use]
pub fn softmax_steps_with(
    entries: &[Entry],
    temperature: f64,
    normalization: Normalization,
) -> Vec<SoftmaxStep> {
    let scaled: Array1<f64> = entries.iter().map(|e| scale(e.value, temperature)).collect();
    let exponentials = scaled.mapv(f64::exp);

    let weights = match normalization {
        Normalization::Literal => exponentials.clone(),
        Normalization::MaxShift => {
            let max = scaled.fold(f64::NEG_INFINITY, |a, &b| a.max(b));
            scaled.mapv(|x| (x - max).exp())
        }
    };
    let sum = weights.sum();
    if !entries.is_empty() && (sum == 0.0 || !sum.is_finite()) {
        warn!(sum, ?normalization, "softmax denominator is degenerate");
    }
    let probabilities = &weights / sum;

    entries
        .iter()
        .zip(scaled.iter().zip(exponentials.iter().zip(probabilities.iter())))
        .map(|(entry, (&scaled_logit, (&exponential, &probability)))| SoftmaxStep {
            id: entry.id.clone(),
            label: entry.label.clone(),
            color: entry.color.clone(),
            original_logit: entry.value,
            scaled_logit,
            exponential,
            probability,
        })
        .collect()
}

/// Sum of the reported exponentials, the literal softmax denominator.
#[must_use]
pub fn exponential_sum(steps: &[SoftmaxStep]) -> f64 {
    steps.iter().map(|s| s.exponential).sum()
}

/// Scale each entry and apply the logistic function to it on its own.
#[must_use]
pub fn sigmoid_steps(entries: &[Entry], temperature: f64) -> Vec<SigmoidStep> {
    entries
        .iter()
        .map(|entry| {
            let scaled_logit = scale(entry.value, temperature);
            SigmoidStep {
                id: entry.id.clone(),
                label: entry.label.clone(),
                color: entry.color.clone(),
                original_logit: entry.value,
                scaled_logit,
                probability: sigmoid(scaled_logit),
            }
        })
        .collect()
}
