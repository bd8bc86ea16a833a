use super::*;

#[test]
fn parse_course_id_accepts_positive_integers() {
    assert_eq!(parse_course_id("17"), Some(17));
    assert_eq!(parse_course_id(" 3 "), Some(3));
}

#[test]
fn parse_course_id_rejects_other_values() {
    assert_eq!(parse_course_id("0"), None);
    assert_eq!(parse_course_id("-4"), None);
    assert_eq!(parse_course_id("abc"), None);
    assert_eq!(parse_course_id(""), None);
}
