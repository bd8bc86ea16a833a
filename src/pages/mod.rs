//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared chrome to
//! `components`. Elements targeted by tutorial scripts carry the ids and
//! classes named in `state::tutorial`.

pub mod course_detail;
pub mod course_editor;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod profile;
