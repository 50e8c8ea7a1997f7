//! Utility modules for the tracker backend.
//!
//! Fixed configuration, output layout, networking and file helpers.

/// Fixed run settings.
pub mod config;
/// HTTP fetching with retries.
pub mod net;
/// Output directory layout.
pub mod paths;
/// File system operations.
pub mod system;
