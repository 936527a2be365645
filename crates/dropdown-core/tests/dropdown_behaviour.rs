//! End-to-end behaviour of the dropdown controller through its public API.

use std::cell::RefCell;
use std::rc::Rc;

use dropdown_core::focus::{self, FocusSurface};
use dropdown_core::{
    Dropdown, DropdownOption, DropdownProps, FocusError, Key, Label, OptionSet, Viewport,
};

type Calls = Rc<RefCell<Vec<&'static str>>>;

fn greek() -> OptionSet<&'static str> {
    OptionSet::new(vec![
        DropdownOption::new("Alpha", "A"),
        DropdownOption::new("Beta", "B"),
        DropdownOption::new("Cherry", "C"),
    ])
}

fn open_dropdown(value: &'static str) -> (Dropdown<&'static str>, Calls) {
    let calls: Calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let mut dd = Dropdown::new(DropdownProps::new(greek(), value, move |v| {
        sink.borrow_mut().push(v)
    }));
    dd.on_toggle_click();
    assert!(dd.is_open());
    (dd, calls)
}

#[test]
fn arrows_never_leave_the_list() {
    for len in 1..6usize {
        let set: OptionSet<usize> = (0..len).map(|i| DropdownOption::new(format!("o{i}"), i)).collect();
        for start in 0..len {
            let mut dd = Dropdown::new(DropdownProps::new(set.clone(), start, |_| {}));
            dd.on_toggle_click();
            for _ in 0..len + 2 {
                dd.on_key_down(Key::ArrowDown);
                assert!(*dd.highlighted() <= len - 1);
            }
            assert_eq!(*dd.highlighted(), len - 1);
            for _ in 0..len + 2 {
                dd.on_key_down(Key::ArrowUp);
            }
            assert_eq!(*dd.highlighted(), 0);
        }
    }
}

#[test]
fn escape_cancels_without_committing() {
    let (mut dd, calls) = open_dropdown("A");
    dd.on_key_down(Key::ArrowDown);
    dd.on_key_down(Key::ArrowDown);
    assert_eq!(*dd.highlighted(), "C");

    let t = dd.on_key_down(Key::from_name("Escape"));
    assert!(t.prevent_default);
    assert_eq!(*dd.highlighted(), "A");
    assert!(!dd.is_open());
    assert!(calls.borrow().is_empty());

    // Closed: a second Escape does nothing.
    assert!(!dd.on_key_down(Key::Escape).changed);
}

#[test]
fn type_ahead_walks_labels_cyclically() {
    let (mut dd, _) = open_dropdown("A");
    dd.on_key_down(Key::from_name("b"));
    assert_eq!(*dd.highlighted(), "B");
    dd.on_key_down(Key::from_name("c"));
    assert_eq!(*dd.highlighted(), "C");
    let t = dd.on_key_down(Key::from_name("a"));
    assert_eq!(*dd.highlighted(), "A");
    assert!(!t.prevent_default);
}

#[test]
fn option_click_commits_once_and_closes() {
    let (mut dd, calls) = open_dropdown("A");
    dd.on_option_click("B");
    assert_eq!(*calls.borrow(), vec!["B"]);
    assert!(!dd.is_open());
    // The caller owns the value: nothing changes until it is supplied back.
    assert_eq!(*dd.value(), "A");
    dd.set_value("B");
    assert_eq!(dd.render().shown.map(|o| o.value), Some("B"));
}

#[test]
fn external_value_change_resets_highlight_while_open() {
    let (mut dd, _) = open_dropdown("A");
    dd.on_key_down(Key::ArrowDown);
    assert_eq!(*dd.highlighted(), "B");
    let t = dd.set_value("C");
    assert!(t.changed);
    assert!(dd.is_open());
    assert_eq!(*dd.highlighted(), "C");
}

#[test]
fn empty_list_renders_nothing_shown() {
    let mut dd = Dropdown::new(DropdownProps::new(OptionSet::<u8>::default(), 7, |_| {}));
    let model = dd.render();
    assert!(model.shown.is_none());
    assert!(model.options.is_empty());
    assert_eq!(dd.display_label(), None);

    dd.on_toggle_click();
    assert!(!dd.on_key_down(Key::ArrowDown).changed);
    assert!(!dd.on_key_down(Key::Char('a')).changed);
    assert!(!dd.commit_highlighted().changed);
}

#[test]
fn outside_dismiss_is_idempotent_and_keeps_preview() {
    let (mut dd, calls) = open_dropdown("A");
    dd.on_key_down(Key::ArrowDown);
    assert!(dd.on_outside_dismiss().changed);
    assert_eq!(*dd.highlighted(), "B");

    let before = (dd.is_open(), *dd.highlighted());
    assert!(!dd.on_outside_dismiss().changed);
    assert_eq!((dd.is_open(), *dd.highlighted()), before);
    assert!(calls.borrow().is_empty());
}

#[test]
fn unknown_keys_are_left_to_the_host() {
    let (mut dd, _) = open_dropdown("B");
    for name in ["Tab", "Enter", "Z", "7", "PageDown"] {
        let t = dd.on_key_down(Key::from_name(name));
        assert!(!t.changed, "{name}");
        assert!(!t.prevent_default, "{name}");
    }
    assert_eq!(*dd.highlighted(), "B");
    assert!(dd.is_open());
}

#[test]
fn rich_label_passes_through_render_value() {
    let set = OptionSet::new(vec![DropdownOption::new(
        Label::Rich(vec![dropdown_core::LabelSegment::new(
            "Large",
            dropdown_core::SegmentStyle::Bold,
        )]),
        3u8,
    )]);
    let dd = Dropdown::new(DropdownProps::new(set, 3, |_| {}).prefix("size "));
    assert_eq!(dd.display_label().map(|l| l.plain()), Some("Large".to_string()));
    assert_eq!(dd.decor().prefix, Some(Label::Text("size ".into())));
}

struct Flaky {
    revealed: Vec<usize>,
}

impl FocusSurface for Flaky {
    fn reveal(&mut self, index: usize) -> Result<(), FocusError> {
        self.revealed.push(index);
        Err(FocusError::NotMounted)
    }
}

#[test]
fn focus_step_follows_highlight_and_swallows_errors() {
    let (mut dd, _) = open_dropdown("A");
    let mut viewport = Viewport::new(dd.options().len(), 2);

    dd.on_key_down(Key::ArrowDown);
    dd.on_key_down(Key::ArrowDown);
    focus::settle(&dd.render(), &mut viewport);
    assert_eq!(viewport.focused(), Some(2));
    assert_eq!(viewport.offset(), 1);

    let mut flaky = Flaky { revealed: Vec::new() };
    focus::settle(&dd.render(), &mut flaky);
    assert_eq!(flaky.revealed, vec![2]);

    dd.on_outside_dismiss();
    focus::settle(&dd.render(), &mut flaky);
    assert_eq!(flaky.revealed, vec![2]);
}
