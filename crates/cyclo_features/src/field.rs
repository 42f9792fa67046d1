//! Field descriptors for driving user input controls.

/// The control a field should be rendered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// A free counter, incremented and decremented directly.
    Increment,
    /// A slider over a fixed, human-labelled choice list; the field value is
    /// the selected index.
    Range { choices: Vec<String> },
}

/// A single adjustable parameter of a feature.
///
/// `key` names the internal parameter and is what
/// [`crate::Feature::set`] accepts; `label` is the display name. The
/// descriptor is a snapshot: mutating the feature invalidates `value` but not
/// `key`, `label`, or the choice list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub value: u64,
}

impl Field {
    pub fn increment(key: &'static str, label: &'static str, value: u64) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Increment,
            value,
        }
    }

    pub fn range(key: &'static str, label: &'static str, choices: Vec<String>, index: usize) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Range { choices },
            value: index as u64,
        }
    }
}
