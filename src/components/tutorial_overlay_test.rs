use super::*;
use crate::state::tutorial::{TutorialCatalog, TutorialStep};

fn two_steps() -> TutorialState {
    let catalog = TutorialCatalog::default().with_script(
        "Home",
        vec![TutorialStep::new("header h1", "one"), TutorialStep::new(".nav-links", "two")],
    );
    let mut state = TutorialState::new(catalog);
    state.set_route("Home");
    state
}

#[test]
fn progress_label_counts_from_one() {
    let mut state = two_steps();
    assert_eq!(progress_label(&state), "Step 1 of 2");
    state.next_step();
    assert_eq!(progress_label(&state), "Step 2 of 2");
}

#[test]
fn progress_label_empty_without_steps() {
    assert_eq!(progress_label(&TutorialState::default()), "");
}

#[test]
fn highlighted_selector_requires_running_tutorial() {
    let mut state = two_steps();
    assert_eq!(highlighted_selector(&state), None);
    state.start_tutorial();
    assert_eq!(highlighted_selector(&state).as_deref(), Some("header h1"));
    state.next_step();
    assert_eq!(highlighted_selector(&state).as_deref(), Some(".nav-links"));
    state.dismiss();
    assert_eq!(highlighted_selector(&state), None);
}

#[test]
fn highlighted_selector_none_on_route_without_script() {
    let mut state = two_steps();
    state.start_tutorial();
    state.set_route("LoginRegister");
    assert_eq!(highlighted_selector(&state), None);
}
