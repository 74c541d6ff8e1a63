//! Small helpers shared by handlers.

pub mod ids;
pub mod input;
