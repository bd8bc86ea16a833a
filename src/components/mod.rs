//! Shared UI components mounted by `App` around every page.

pub mod site_footer;
pub mod site_header;
pub mod tutorial_overlay;
