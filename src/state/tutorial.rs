//! On-screen walkthrough state.
//!
//! DESIGN
//! ======
//! A static catalog maps route names to ordered steps. The cursor follows the
//! active route: every route change resets it to the first step, `next_step`
//! clamps at the last step, and there is no way back. Progress is not
//! persisted.

#[cfg(test)]
#[path = "tutorial_test.rs"]
mod tutorial_test;

use std::collections::HashMap;
use std::sync::Arc;

use crate::routes::RouteName;

/// One highlighted element and the message shown next to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TutorialStep {
    /// CSS selector of the element to highlight.
    pub selector: String,
    pub message: String,
}

impl TutorialStep {
    #[must_use]
    pub fn new(selector: &str, message: &str) -> Self {
        Self { selector: selector.to_owned(), message: message.to_owned() }
    }
}

/// Route name → walkthrough script.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TutorialCatalog {
    scripts: HashMap<String, Vec<TutorialStep>>,
}

impl TutorialCatalog {
    #[must_use]
    pub fn with_script(mut self, route_name: &str, steps: Vec<TutorialStep>) -> Self {
        self.scripts.insert(route_name.to_owned(), steps);
        self
    }

    /// Steps for `route_name`; unknown routes have none.
    #[must_use]
    pub fn steps(&self, route_name: &str) -> &[TutorialStep] {
        self.scripts.get(route_name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Scripts shipped with the application.
    #[must_use]
    pub fn builtin() -> Self {
        Self::default()
            .with_script(
                RouteName::Home.as_str(),
                vec![
                    TutorialStep::new("header h1", "Welcome to the learning platform! This is the main heading."),
                    TutorialStep::new(".nav-links", "Use these links to reach your dashboard, profile and courses."),
                    TutorialStep::new("#tutorial-footer", "Use this link to replay the tutorial at any time."),
                ],
            )
            .with_script(
                RouteName::CourseDetail.as_str(),
                vec![
                    TutorialStep::new(".back-button", "This button takes you back to the overview."),
                    TutorialStep::new("h2", "The course title is shown here."),
                    TutorialStep::new(".course-content", "This is the course content. Read the key information here."),
                    TutorialStep::new(".comment-input", "Leave your comment on the course here."),
                ],
            )
            .with_script(
                RouteName::CourseEditor.as_str(),
                vec![
                    TutorialStep::new("#course-title", "Give your course a short, descriptive title."),
                    TutorialStep::new("#course-short-description", "Summarise the course in a sentence or two."),
                    TutorialStep::new("#course-content", "Write the course body in Markdown."),
                    TutorialStep::new(".editor-preview", "The preview shows how learners will see your content."),
                    TutorialStep::new(".editor-reset", "Start over with an empty draft."),
                ],
            )
    }
}

/// Cursor into the active route's walkthrough.
///
/// Invariant: `current_step < total_steps()`, or the script is empty and
/// `current_step == 0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TutorialState {
    catalog: Arc<TutorialCatalog>,
    pub active_route: String,
    pub current_step: usize,
    /// Whether the overlay is showing.
    pub running: bool,
}

impl Default for TutorialState {
    fn default() -> Self {
        Self::new(TutorialCatalog::builtin())
    }
}

impl TutorialState {
    #[must_use]
    pub fn new(catalog: TutorialCatalog) -> Self {
        Self { catalog: Arc::new(catalog), active_route: String::new(), current_step: 0, running: false }
    }

    /// Switch to `route_name` and rewind to the first step.
    pub fn set_route(&mut self, route_name: &str) {
        route_name.clone_into(&mut self.active_route);
        self.reset_tutorial();
    }

    pub fn start_tutorial(&mut self) {
        self.current_step = 0;
        self.running = true;
    }

    /// Advance one step; a no-op on the last step.
    pub fn next_step(&mut self) {
        if self.current_step + 1 < self.total_steps() {
            self.current_step += 1;
        }
    }

    pub fn reset_tutorial(&mut self) {
        self.current_step = 0;
    }

    /// Hide the overlay without touching the cursor.
    pub fn dismiss(&mut self) {
        self.running = false;
    }

    #[must_use]
    pub fn steps(&self) -> &[TutorialStep] {
        self.catalog.steps(&self.active_route)
    }

    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.steps().len()
    }

    #[must_use]
    pub fn current(&self) -> Option<&TutorialStep> {
        self.steps().get(self.current_step)
    }

    #[must_use]
    pub fn is_last_step(&self) -> bool {
        self.current_step + 1 >= self.total_steps()
    }
}
