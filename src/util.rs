//! Utility functions and structures.

pub(crate) mod data;
