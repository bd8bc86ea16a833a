use super::*;

#[test]
fn editor_heading_for_new_course() {
    assert_eq!(editor_heading(&CourseDraft::default()), "New course");
}

#[test]
fn editor_heading_for_existing_course() {
    let draft = CourseDraft { editing_course_id: Some(8), ..CourseDraft::default() };
    assert_eq!(editor_heading(&draft), "Editing course #8");
}
