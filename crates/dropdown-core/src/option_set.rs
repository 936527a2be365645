//! OptionSet — the ordered `(label, value)` list a dropdown navigates.
//!
//! Insertion order is display order is navigation order. The set is rebuilt by
//! the host for each render pass and never mutated by the controller.

use serde::{Deserialize, Serialize};

/// Emphasis for one piece of a rich label. Hosts map these to their own styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentStyle {
    #[default]
    Plain,
    Muted,
    Accent,
    Bold,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSegment {
    pub text: String,
    #[serde(default)]
    pub style: SegmentStyle,
}

impl LabelSegment {
    pub fn new(text: impl Into<String>, style: SegmentStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// What an option shows. Only `Text` labels take part in type-ahead directly;
/// rich labels are matched through the option value's `Display` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Text(String),
    Rich(Vec<LabelSegment>),
}

impl Label {
    /// The label as plain text, if it is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            Self::Rich(_) => None,
        }
    }

    /// Concatenated text of every segment, for measuring and fallbacks.
    pub fn plain(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Rich(segments) => segments.iter().map(|s| s.text.as_str()).collect(),
        }
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<LabelSegment>> for Label {
    fn from(segments: Vec<LabelSegment>) -> Self {
        Self::Rich(segments)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DropdownOption<T> {
    pub label: Label,
    pub value: T,
}

impl<T> DropdownOption<T> {
    pub fn new(label: impl Into<Label>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptionSet<T> {
    items: Vec<DropdownOption<T>>,
}

impl<T> Default for OptionSet<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> FromIterator<DropdownOption<T>> for OptionSet<T> {
    fn from_iter<I: IntoIterator<Item = DropdownOption<T>>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> From<Vec<DropdownOption<T>>> for OptionSet<T> {
    fn from(items: Vec<DropdownOption<T>>) -> Self {
        Self { items }
    }
}

impl<T> OptionSet<T> {
    pub fn new(items: Vec<DropdownOption<T>>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DropdownOption<T>> {
        self.items.get(index)
    }

    pub fn first(&self) -> Option<&DropdownOption<T>> {
        self.items.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DropdownOption<T>> {
        self.items.iter()
    }

    /// Cyclic forward search.
    ///
    /// Scans `start_exclusive + 1 ..= len - 1`; when `wrap` is set and that finds
    /// nothing, continues with `0 ..= start_exclusive`. Passing `None` as the
    /// start scans the whole set once.
    pub fn find_from<P>(
        &self,
        start_exclusive: Option<usize>,
        mut predicate: P,
        wrap: bool,
    ) -> Option<(usize, &DropdownOption<T>)>
    where
        P: FnMut(&DropdownOption<T>) -> bool,
    {
        let begin = start_exclusive.map_or(0, |i| i.saturating_add(1));
        let after = self
            .items
            .iter()
            .enumerate()
            .skip(begin)
            .find(|(_, o)| predicate(o));
        if after.is_some() || !wrap {
            return after;
        }
        let end = begin.min(self.items.len());
        self.items[..end]
            .iter()
            .enumerate()
            .find(|(_, o)| predicate(o))
    }
}

impl<T: PartialEq> OptionSet<T> {
    pub fn find_by_value(&self, value: &T) -> Option<&DropdownOption<T>> {
        self.items.iter().find(|o| o.value == *value)
    }

    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.items.iter().position(|o| o.value == *value)
    }

    /// Index of `value`, or 0 when it is not listed. `None` only for an empty set.
    pub fn resolve_index(&self, value: &T) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }
        Some(self.index_of(value).unwrap_or(0))
    }

    /// The option for `value`, degrading to the first option.
    pub fn resolve(&self, value: &T) -> Option<&DropdownOption<T>> {
        self.find_by_value(value).or_else(|| self.first())
    }
}

impl<'a, T> IntoIterator for &'a OptionSet<T> {
    type Item = &'a DropdownOption<T>;
    type IntoIter = std::slice::Iter<'a, DropdownOption<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
