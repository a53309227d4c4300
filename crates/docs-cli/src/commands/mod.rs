//! Command implementations for docs-sync

mod sync;
mod versions;

pub use sync::run_sync;
pub use versions::run_versions;
