//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, token
//! decoding, markdown) from page and store logic to improve reuse and
//! testability.

pub mod markdown;
pub mod storage;
pub mod token;
