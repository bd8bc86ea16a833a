//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `course_editor`, `tutorial`) and each
//! model is held in one `RwSignal` provided by `App`, so there are no ambient
//! globals: `App` restores from storage on start and `logout`/`reset` clear.

pub mod auth;
pub mod course_editor;
pub mod tutorial;
