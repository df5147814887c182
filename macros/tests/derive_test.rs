//! Tests for the composed-state and all-cases derives

use composable_composition::{AllCases, ChildAccess, ComposedAction, ComposedState};
use composable_composition_macros::{AllCases, ChildFields, ParentFields};

#[derive(AllCases, Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Inbox,
    Archive,
    Settings,
}

#[derive(AllCases, Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

#[derive(ChildFields, Clone, Debug, PartialEq)]
struct ChildState {
    child_value: i32,
    label: String,
    #[composed(skip)]
    scratch: Vec<u8>,
}

#[derive(ParentFields, Clone, Debug, PartialEq)]
struct ParentState {
    parent_value: i32,
    user: Option<String>,
}

fn composed() -> ComposedState<ChildState, ParentState> {
    ComposedState::new(
        ChildState {
            child_value: 10,
            label: "counter".to_string(),
            scratch: Vec::new(),
        },
        ParentState {
            parent_value: 20,
            user: Some("blob".to_string()),
        },
    )
}

#[test]
fn test_all_cases_declaration_order() {
    assert_eq!(Tab::all_cases(), vec![Tab::Inbox, Tab::Archive, Tab::Settings]);
}

#[test]
fn test_all_cases_of_composed_action() {
    let cases = ComposedAction::<Tab, Direction>::all_cases();
    assert_eq!(
        cases,
        vec![
            ComposedAction::Local(Tab::Inbox),
            ComposedAction::Local(Tab::Archive),
            ComposedAction::Local(Tab::Settings),
            ComposedAction::Parent(Direction::Up),
            ComposedAction::Parent(Direction::Down),
        ]
    );
}

#[test]
fn test_child_fields_read_and_write() {
    let mut state = composed();
    assert_eq!(*state.child_value(), 10);

    state.set_child_value(15);
    assert_eq!(*state.child_value(), 15);
    assert_eq!(state.child.child_value, 15);

    state.label_mut().push_str("-2");
    assert_eq!(state.label(), "counter-2");
}

#[test]
fn test_parent_fields_read() {
    let state = composed();
    assert_eq!(*state.parent_value(), 20);
    assert_eq!(state.user().as_deref(), Some("blob"));
}

#[test]
fn test_child_and_parent_fields_side_by_side() {
    let mut state = composed();
    let sum = state.child_value() + state.parent_value();
    state.set_child_value(sum);
    assert_eq!(*state.child_value(), 30);
    assert_eq!(*state.parent_value(), 20);
}

#[test]
fn test_skipped_field_is_reachable_directly() {
    let mut state = composed();
    state.child_state_mut().scratch.push(1);
    assert_eq!(state.child.scratch, vec![1]);
}

struct Detached {
    child: ChildState,
}

impl ChildAccess for Detached {
    type Child = ChildState;

    fn child_state(&self) -> &ChildState {
        &self.child
    }

    fn child_state_mut(&mut self) -> &mut ChildState {
        &mut self.child
    }
}

#[test]
fn test_child_fields_on_any_child_access() {
    let mut detached = Detached {
        child: composed().into_child(),
    };
    detached.set_label("detached".to_string());
    assert_eq!(detached.label(), "detached");
}

#[derive(ChildFields, Clone, Debug, PartialEq)]
struct Slider {
    value: i32,
}

#[derive(ParentFields, Clone, Debug, PartialEq)]
struct Range {
    value: i32,
    limit: i32,
}

#[test]
fn test_shared_field_name_reads_the_child() {
    let mut state = ComposedState::new(Slider { value: 1 }, Range { value: 5, limit: 10 });
    assert_eq!(*state.value(), 1);
    assert_eq!(*state.limit(), 10);

    state.set_value(7);
    assert_eq!(*state.value(), 7);
    assert_eq!(state.parent().value, 5);
    assert_eq!(*state.parent().value(), 5);
}

#[test]
fn test_parent_fields_on_the_parent_itself() {
    let range = Range { value: 2, limit: 3 };
    assert_eq!((*range.value(), *range.limit()), (2, 3));
}
