//! Command implementations for graft-cli

pub mod preview;
pub mod purge;
pub mod update;

pub use preview::run_preview;
pub use purge::run_purge;
pub use update::run_update;
