// Handler modules
pub mod check;
pub mod scan;

// Re-export all handler functions
pub use check::{CheckReport, handle_check};
pub use scan::{handle_scan, run_scan};
