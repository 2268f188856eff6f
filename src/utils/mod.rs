//! Utility functions and helpers.

pub mod http;
pub mod log;
pub mod pagination;
pub mod url;
