//! Command handlers that delegate to `AppCore`.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call `AppCore` methods
//!   3. Format output for the terminal
//!
//! Handlers should NOT access repositories directly or contain business logic.

pub mod add;
pub mod colors;
pub mod config;
pub mod generate;
pub mod list;
pub mod outfits;
pub mod paths;
pub mod profile;
pub mod remove;
