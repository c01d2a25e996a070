//! CLI library components for the gridform reshape tools.

pub mod logging;
pub mod pipeline;
