//! Backend of the application.

pub mod launcher;
pub mod tracker;
pub mod utils;
pub mod wiki;

pub use tracker::FormatTracker;
