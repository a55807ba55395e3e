//! Merge rules for launcher settings.

pub mod merge_policy;
