//! Reading transactions out of HTTP Archive (HAR 1.2) capture files.

mod har_entry;
mod har_log;

pub use har_entry::HarEntry;
pub use har_log::HarLoadError;
pub use har_log::HarLog;
