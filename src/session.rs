use crate::config::VisualizerConfig;
use crate::entry::EntryList;
use crate::error::Result;
use crate::transform::{compute_with, Mode, Normalization, Steps};
use crate::view::Visualization;

/// Everything the interactive surface can change, captured as one value.
///
/// A `Session` is never mutated: each `with_*` call returns the next
/// snapshot, and [`Session::steps`] recomputes from scratch.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub entries: EntryList,
    pub temperature: f64,
    pub mode: Mode,
    pub threshold: f64,
    pub normalization: Normalization,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            entries: EntryList::default(),
            temperature: 1.0,
            mode: Mode::Softmax,
            threshold: 0.5,
            normalization: Normalization::Literal,
        }
    }
}

impl Session {
    pub fn from_config(config: &VisualizerConfig) -> Result<Self> {
        Ok(Self {
            entries: EntryList::from_entries(config.entries_or_default())?,
            temperature: config.temperature,
            mode: config.mode,
            threshold: config.threshold,
            normalization: config.normalization,
        })
    }

    #[must_use]
    pub fn with_entries(&self, entries: EntryList) -> Self {
        Self {
            entries,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_temperature(&self, temperature: f64) -> Self {
        Self {
            temperature,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_mode(&self, mode: Mode) -> Self {
        Self {
            mode,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_threshold(&self, threshold: f64) -> Self {
        Self {
            threshold,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_normalization(&self, normalization: Normalization) -> Self {
        Self {
            normalization,
            ..self.clone()
        }
    }

    /// Back to the default entries, temperature and threshold. The mode is kept.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self {
            mode: self.mode,
            normalization: self.normalization,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn steps(&self) -> Steps {
        compute_with(
            self.entries.as_slice(),
            self.temperature,
            self.mode,
            self.normalization,
        )
    }

    #[must_use]
    pub fn visualize(&self) -> Visualization {
        Visualization::new(self.steps(), self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshots_are_independent() {
        let first = Session::default();
        let second = first.with_temperature(2.0).with_mode(Mode::Sigmoid);
        assert_eq!(first.temperature, 1.0);
        assert_eq!(first.mode, Mode::Softmax);
        assert_eq!(second.steps().mode(), Mode::Sigmoid);
    }

    #[test]
    fn reset_keeps_mode() {
        let session = Session::default()
            .with_mode(Mode::Sigmoid)
            .with_threshold(0.9)
            .with_temperature(3.0)
            .with_entries(EntryList::default().with_added());
        let reset = session.reset();
        assert_eq!(reset.mode, Mode::Sigmoid);
        assert_eq!(reset.threshold, 0.5);
        assert_eq!(reset.temperature, 1.0);
        assert_eq!(reset.entries, EntryList::default());
    }

    #[test]
    fn from_config_rejects_single_entry() {
        let config = VisualizerConfig::from_json(
            r##"{ "entries": [ { "id": "a", "label": "A", "value": 1, "color": "#000" } ] }"##,
        )
        .unwrap();
        assert!(Session::from_config(&config).is_err());
    }
}
