use super::*;

fn three_step_home() -> TutorialState {
    let catalog = TutorialCatalog::default().with_script(
        "Home",
        vec![
            TutorialStep::new("#a", "first"),
            TutorialStep::new("#b", "second"),
            TutorialStep::new("#c", "third"),
        ],
    );
    let mut state = TutorialState::new(catalog);
    state.set_route("Home");
    state
}

// =============================================================
// Catalog
// =============================================================

#[test]
fn builtin_catalog_covers_home_and_course_detail() {
    let catalog = TutorialCatalog::builtin();
    assert_eq!(catalog.steps("Home").len(), 3);
    assert_eq!(catalog.steps("CourseDetail").len(), 4);
    assert_eq!(catalog.steps("CourseDetail")[0].selector, ".back-button");
    assert!(!catalog.steps("CourseEditor").is_empty());
}

#[test]
fn unknown_route_has_no_steps() {
    let catalog = TutorialCatalog::builtin();
    assert!(catalog.steps("Nowhere").is_empty());
    assert!(catalog.steps(RouteName::LoginRegister.as_str()).is_empty());
}

// =============================================================
// Cursor
// =============================================================

#[test]
fn default_state_has_no_active_route() {
    let state = TutorialState::default();
    assert_eq!(state.active_route, "");
    assert_eq!(state.current_step, 0);
    assert_eq!(state.total_steps(), 0);
    assert!(!state.running);
    assert_eq!(state.current(), None);
}

#[test]
fn next_step_sequence_clamps_at_last_step() {
    let mut state = three_step_home();
    let mut seen = vec![state.current_step];
    for _ in 0..3 {
        state.next_step();
        seen.push(state.current_step);
    }
    assert_eq!(seen, [0, 1, 2, 2]);
    assert!(state.is_last_step());
    assert_eq!(state.current().map(|s| s.message.as_str()), Some("third"));
}

#[test]
fn next_step_n_minus_one_times_reaches_last() {
    let mut state = TutorialState::default();
    state.set_route("CourseDetail");
    let n = state.total_steps();
    for _ in 0..n - 1 {
        state.next_step();
    }
    assert_eq!(state.current_step, n - 1);
    state.next_step();
    assert_eq!(state.current_step, n - 1);
}

#[test]
fn set_route_always_resets_cursor() {
    let mut state = TutorialState::default();
    state.set_route("CourseDetail");
    state.next_step();
    state.next_step();
    assert_eq!(state.current_step, 2);

    state.set_route("CourseDetail");
    assert_eq!(state.current_step, 0);

    state.next_step();
    state.set_route("Home");
    assert_eq!(state.current_step, 0);
    assert_eq!(state.active_route, "Home");
}

#[test]
fn empty_script_keeps_cursor_at_zero() {
    let mut state = TutorialState::default();
    state.set_route("LoginRegister");
    state.next_step();
    assert_eq!(state.current_step, 0);
    assert!(state.steps().is_empty());
    assert!(state.is_last_step());
}

#[test]
fn start_tutorial_rewinds_and_shows_overlay() {
    let mut state = three_step_home();
    state.next_step();
    state.start_tutorial();
    assert_eq!(state.current_step, 0);
    assert!(state.running);
}

#[test]
fn reset_tutorial_rewinds_without_changing_visibility() {
    let mut state = three_step_home();
    state.next_step();
    state.reset_tutorial();
    assert_eq!(state.current_step, 0);
    assert!(!state.running);
}

#[test]
fn dismiss_hides_overlay() {
    let mut state = three_step_home();
    state.start_tutorial();
    state.next_step();
    state.dismiss();
    assert!(!state.running);
    assert_eq!(state.current_step, 1);
}
