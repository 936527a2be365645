//! KeyboardNavigator — maps a key press inside the open panel to a new highlight.
//!
//! Pure: the caller owns the state and applies the returned `Navigation`.

use std::fmt::Display;

use tracing::trace;

use crate::option_set::{DropdownOption, OptionSet};

/// Keys the navigator understands. Hosts translate their own events into these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Escape,
    Char(char),
    Other,
}

impl Key {
    /// Parse a key name: `"ArrowDown"`, `"ArrowUp"`, `"Escape"` or a single
    /// character. Anything else is `Other`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowDown" => Self::ArrowDown,
            "ArrowUp" => Self::ArrowUp,
            "Escape" => Self::Escape,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Char(c),
                    _ => Self::Other,
                }
            }
        }
    }
}

/// Result of one key press.
#[derive(Debug, Clone, PartialEq)]
pub enum Navigation<T> {
    /// Arrow key moved (or clamped) the highlight.
    Move(T),
    /// Type-ahead found a label starting with the typed letter.
    TypeAhead(T),
    /// Escape: highlight reverts to the committed value and the panel closes.
    Cancel(T),
    /// Nothing to do; the host may handle the key itself.
    Unhandled,
}

impl<T> Navigation<T> {
    pub fn highlight(&self) -> Option<&T> {
        match self {
            Self::Move(v) | Self::TypeAhead(v) | Self::Cancel(v) => Some(v),
            Self::Unhandled => None,
        }
    }

    pub fn closes(&self) -> bool {
        matches!(self, Self::Cancel(_))
    }

    /// Navigation keys swallow the host's default action. Type-ahead does not.
    pub fn suppresses_default(&self) -> bool {
        matches!(self, Self::Move(_) | Self::Cancel(_))
    }

    pub fn into_highlight(self) -> Option<T> {
        match self {
            Self::Move(v) | Self::TypeAhead(v) | Self::Cancel(v) => Some(v),
            Self::Unhandled => None,
        }
    }
}

pub fn navigate<T>(options: &OptionSet<T>, highlighted: &T, committed: &T, key: Key) -> Navigation<T>
where
    T: Clone + PartialEq + Display,
{
    match key {
        Key::Escape => Navigation::Cancel(committed.clone()),
        Key::ArrowDown => {
            let Some(i) = options.resolve_index(highlighted) else {
                return Navigation::Unhandled;
            };
            let next = (i + 1).min(options.len() - 1);
            move_to(options, next)
        }
        Key::ArrowUp => {
            let Some(i) = options.resolve_index(highlighted) else {
                return Navigation::Unhandled;
            };
            move_to(options, i.saturating_sub(1))
        }
        Key::Char(c) if c.is_ascii_lowercase() => type_ahead(options, highlighted, c),
        Key::Char(_) | Key::Other => Navigation::Unhandled,
    }
}

fn move_to<T: Clone>(options: &OptionSet<T>, index: usize) -> Navigation<T> {
    match options.get(index) {
        Some(o) => {
            trace!(index, "highlight moved");
            Navigation::Move(o.value.clone())
        }
        None => Navigation::Unhandled,
    }
}

fn type_ahead<T>(options: &OptionSet<T>, highlighted: &T, c: char) -> Navigation<T>
where
    T: Clone + PartialEq + Display,
{
    // An unlisted highlight searches the whole set from the top.
    let start = options.index_of(highlighted);
    let hit = options.find_from(start, |o| starts_with(o, c), true);
    match hit {
        Some((index, o)) => {
            trace!(index, key = %c, "type-ahead match");
            Navigation::TypeAhead(o.value.clone())
        }
        None => Navigation::Unhandled,
    }
}

fn starts_with<T: Display>(option: &DropdownOption<T>, c: char) -> bool {
    let text = match option.label.as_text() {
        Some(text) => text.to_lowercase(),
        None => option.value.to_string().to_lowercase(),
    };
    text.starts_with(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option_set::{Label, LabelSegment, SegmentStyle};

    fn fruit() -> OptionSet<&'static str> {
        OptionSet::new(vec![
            DropdownOption::new("Alpha", "a"),
            DropdownOption::new("Beta", "b"),
            DropdownOption::new("Cherry", "c"),
        ])
    }

    #[test]
    fn key_names_parse() {
        assert_eq!(Key::from_name("ArrowDown"), Key::ArrowDown);
        assert_eq!(Key::from_name("ArrowUp"), Key::ArrowUp);
        assert_eq!(Key::from_name("Escape"), Key::Escape);
        assert_eq!(Key::from_name("q"), Key::Char('q'));
        assert_eq!(Key::from_name("Tab"), Key::Other);
        assert_eq!(Key::from_name(""), Key::Other);
    }

    #[test]
    fn arrows_clamp_at_both_ends() {
        let set = fruit();
        assert_eq!(navigate(&set, &"c", &"a", Key::ArrowDown), Navigation::Move("c"));
        assert_eq!(navigate(&set, &"a", &"a", Key::ArrowUp), Navigation::Move("a"));
        assert_eq!(navigate(&set, &"a", &"a", Key::ArrowDown), Navigation::Move("b"));
        assert_eq!(navigate(&set, &"c", &"a", Key::ArrowUp), Navigation::Move("b"));
    }

    #[test]
    fn unknown_highlight_navigates_from_first() {
        let set = fruit();
        assert_eq!(navigate(&set, &"zz", &"zz", Key::ArrowDown), Navigation::Move("b"));
        assert_eq!(navigate(&set, &"zz", &"zz", Key::ArrowUp), Navigation::Move("a"));
    }

    #[test]
    fn escape_reverts_to_committed() {
        let set = fruit();
        let nav = navigate(&set, &"c", &"a", Key::Escape);
        assert_eq!(nav, Navigation::Cancel("a"));
        assert!(nav.closes());
        assert!(nav.suppresses_default());
    }

    #[test]
    fn type_ahead_cycles_forward() {
        let set = fruit();
        assert_eq!(navigate(&set, &"a", &"a", Key::Char('b')), Navigation::TypeAhead("b"));
        assert_eq!(navigate(&set, &"b", &"a", Key::Char('c')), Navigation::TypeAhead("c"));
        assert_eq!(navigate(&set, &"c", &"a", Key::Char('a')), Navigation::TypeAhead("a"));
    }

    #[test]
    fn type_ahead_does_not_suppress_default() {
        let nav = navigate(&fruit(), &"a", &"a", Key::Char('b'));
        assert!(!nav.suppresses_default());
        assert!(!nav.closes());
    }

    #[test]
    fn type_ahead_moves_to_next_of_same_letter() {
        let set = OptionSet::new(vec![
            DropdownOption::new("Mango", 1),
            DropdownOption::new("Melon", 2),
            DropdownOption::new("Apple", 3),
            DropdownOption::new("Mint", 4),
        ]);
        assert_eq!(navigate(&set, &1, &1, Key::Char('m')), Navigation::TypeAhead(2));
        assert_eq!(navigate(&set, &2, &1, Key::Char('m')), Navigation::TypeAhead(4));
        assert_eq!(navigate(&set, &4, &1, Key::Char('m')), Navigation::TypeAhead(1));
        // The only match is the current highlight: found again on the wrap.
        assert_eq!(navigate(&set, &3, &1, Key::Char('a')), Navigation::TypeAhead(3));
    }

    #[test]
    fn unknown_highlight_type_ahead_starts_at_top() {
        let set = OptionSet::new(vec![
            DropdownOption::new("Apple", "apple"),
            DropdownOption::new("Banana", "banana"),
            DropdownOption::new("Avocado", "avocado"),
        ]);
        assert_eq!(navigate(&set, &"zz", &"zz", Key::Char('a')), Navigation::TypeAhead("apple"));
        assert_eq!(navigate(&set, &"zz", &"zz", Key::Char('b')), Navigation::TypeAhead("banana"));
        assert_eq!(navigate(&set, &"zz", &"zz", Key::Char('q')), Navigation::Unhandled);
    }

    #[test]
    fn type_ahead_without_match_is_unhandled() {
        assert_eq!(navigate(&fruit(), &"a", &"a", Key::Char('z')), Navigation::Unhandled);
    }

    #[test]
    fn only_lowercase_letters_search() {
        let set = fruit();
        assert_eq!(navigate(&set, &"a", &"a", Key::Char('B')), Navigation::Unhandled);
        assert_eq!(navigate(&set, &"a", &"a", Key::Char('1')), Navigation::Unhandled);
        assert_eq!(navigate(&set, &"a", &"a", Key::Other), Navigation::Unhandled);
    }

    #[test]
    fn rich_labels_match_on_value_text() {
        let set = OptionSet::new(vec![
            DropdownOption::new(
                Label::Rich(vec![LabelSegment::new("Zebra", SegmentStyle::Bold)]),
                "north",
            ),
            DropdownOption::new("South", "south"),
        ]);
        // The rich label says "Zebra" but matching uses the value "north".
        assert_eq!(navigate(&set, &"south", &"south", Key::Char('z')), Navigation::Unhandled);
        assert_eq!(navigate(&set, &"south", &"south", Key::Char('n')), Navigation::TypeAhead("north"));
    }

    #[test]
    fn empty_set_only_handles_escape() {
        let set: OptionSet<&str> = OptionSet::default();
        assert_eq!(navigate(&set, &"a", &"a", Key::ArrowDown), Navigation::Unhandled);
        assert_eq!(navigate(&set, &"a", &"a", Key::ArrowUp), Navigation::Unhandled);
        assert_eq!(navigate(&set, &"a", &"a", Key::Char('a')), Navigation::Unhandled);
        assert_eq!(navigate(&set, &"a", &"x", Key::Escape), Navigation::Cancel("x"));
    }
}
