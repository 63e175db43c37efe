use crate::error::{Result, VisualizerError};
use serde::{Deserialize, Serialize};

/// Display colors handed out to new entries, cycling by list length.
pub const PALETTE: [&str; 6] = [
    "#6366f1", // indigo
    "#ec4899", // pink
    "#10b981", // emerald
    "#f59e0b", // amber
    "#3b82f6", // blue
    "#8b5cf6", // violet
];

/// Removal is refused below this many entries.
pub const MIN_ENTRIES: usize = 2;

/// A labelled raw score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub label: String,
    pub value: f64,
    pub color: String,
}

impl Entry {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        value: f64,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value,
            color: color.into(),
        }
    }
}

/// The three entries every fresh session starts with.
#[must_use]
pub fn default_entries() -> Vec<Entry> {
    vec![
        Entry::new("1", "Cat", 3.5, PALETTE[0]),
        Entry::new("2", "Dog", 1.0, PALETTE[1]),
        Entry::new("3", "Car", -2.0, PALETTE[2]),
    ]
}

/// Immutable snapshot of the editable entry list.
///
/// Every edit returns a new list and leaves `self` untouched, so a caller can
/// keep the previous snapshot around (undo, diffing) without cloning by hand.
/// The list never holds fewer than [`MIN_ENTRIES`] entries.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryList {
    entries: Vec<Entry>,
    next_id: u64,
}

impl Default for EntryList {
    fn default() -> Self {
        Self {
            entries: default_entries(),
            next_id: 4,
        }
    }
}

impl EntryList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from caller-supplied entries, validating every entry.
    pub fn from_entries(entries: Vec<Entry>) -> Result<Self> {
        if entries.len() < MIN_ENTRIES {
            return Err(VisualizerError::MinimumEntries { min: MIN_ENTRIES });
        }
        for entry in &entries {
            validate_label(&entry.label)?;
            validate_value(entry.value)?;
        }
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|e| e.id == entry.id) {
                return Err(VisualizerError::Config(format!(
                    "Duplicate entry id '{}'",
                    entry.id
                )));
            }
        }

        let next_id = entries
            .iter()
            .filter_map(|e| e.id.parse::<u64>().ok())
            .max()
            .and_then(|max| max.checked_add(1))
            .unwrap_or(entries.len() as u64 + 1);

        Ok(Self { entries, next_id })
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Append a `Class {n}` entry with value 0 and the next palette color.
    ///
    /// The counter wraps at `u64::MAX`; ids already in the list are skipped,
    /// so the new id is always free.
    #[must_use]
    pub fn with_added(&self) -> Self {
        let mut next_id = self.next_id;
        while self.get(&next_id.to_string()).is_some() {
            next_id = next_id.wrapping_add(1);
        }

        let position = self.entries.len();
        let mut entries = self.entries.clone();
        entries.push(Entry::new(
            next_id.to_string(),
            format!("Class {}", position + 1),
            0.0,
            PALETTE[position % PALETTE.len()],
        ));

        Self {
            entries,
            next_id: next_id.wrapping_add(1),
        }
    }

    /// Remove the entry with `id`. Refused once only [`MIN_ENTRIES`] remain.
    pub fn without(&self, id: &str) -> Result<Self> {
        if self.entries.len() <= MIN_ENTRIES {
            return Err(VisualizerError::MinimumEntries { min: MIN_ENTRIES });
        }
        self.position(id)?;

        Ok(Self {
            entries: self.entries.iter().filter(|e| e.id != id).cloned().collect(),
            next_id: self.next_id,
        })
    }

    pub fn with_value(&self, id: &str, value: f64) -> Result<Self> {
        validate_value(value)?;
        self.edit(id, |entry| entry.value = value)
    }

    pub fn with_label(&self, id: &str, label: impl Into<String>) -> Result<Self> {
        let label = label.into();
        validate_label(&label)?;
        self.edit(id, |entry| entry.label = label)
    }

    fn edit(&self, id: &str, apply: impl FnOnce(&mut Entry)) -> Result<Self> {
        let index = self.position(id)?;
        let mut entries = self.entries.clone();
        apply(&mut entries[index]);
        Ok(Self {
            entries,
            next_id: self.next_id,
        })
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| VisualizerError::UnknownEntry(id.to_owned()))
    }
}

impl AsRef<[Entry]> for EntryList {
    fn as_ref(&self) -> &[Entry] {
        &self.entries
    }
}

fn validate_label(label: &str) -> Result<()> {
    if label.trim().is_empty() {
        return Err(VisualizerError::EmptyLabel);
    }
    Ok(())
}

fn validate_value(value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(VisualizerError::NonFiniteValue(value));
    }
    Ok(())
}
