//! Data module - CSV loading and cleaning

mod loader;
mod processor;

pub use loader::{load, DataLoader, NA_MARKERS};
pub use processor::{normalize, DataProcessor};
