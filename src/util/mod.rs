//! Utility helpers shared across portal UI modules.

pub mod format;
