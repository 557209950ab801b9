pub mod classify;
pub mod pool;
pub mod seen;
pub mod walker;

pub use classify::{classify_directory, is_directory_response, Classification};
pub use pool::{effective_workers, ScanEngine, ScanSummary};
pub use seen::SeenSet;
